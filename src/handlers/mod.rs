// handlers/mod.rs - HTTP handlers
//
// public/    - no token required (sitemap, health, greeting, register, login)
// protected/ - mounted behind jwt_auth_middleware, receive an AuthUser extension

pub mod protected;
pub mod public;
