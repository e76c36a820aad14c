pub mod auth;
pub mod json;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use json::JsonBody;
