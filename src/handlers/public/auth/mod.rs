// handlers/public/auth/mod.rs - Public authentication handlers
//
// Account creation and token acquisition. Neither endpoint requires a token.

use serde::Deserialize;

use crate::error::ApiError;

pub mod login; // POST /login
pub mod register; // POST /user

pub use login::login_post;
pub use register::register_post;

/// Body shared by registration and login.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Credentials with both fields present.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl CredentialsRequest {
    /// Require both fields, reporting every absent one under `message`.
    pub fn require(self, message: &str) -> Result<Credentials, ApiError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok(Credentials { email, password }),
            (email, password) => {
                let mut missing = Vec::new();
                if email.is_none() {
                    missing.push("email");
                }
                if password.is_none() {
                    missing.push("password");
                }
                Err(ApiError::missing_fields(message, &missing))
            }
        }
    }
}

/// Run a CPU-bound password primitive off the async workers.
pub(crate) async fn run_blocking<F, T, E>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<ApiError> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result.map_err(Into::into),
        Err(e) => {
            tracing::error!("Blocking task failed: {}", e);
            Err(ApiError::internal_server_error(
                "An error occurred while processing your request",
            ))
        }
    }
}
