// handlers/public/auth/login.rs - POST /login handler

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::auth::verify_password;
use crate::error::ApiError;
use crate::middleware::JsonBody;
use crate::state::AppState;

use super::{run_blocking, CredentialsRequest};

/**
 * POST /login - Authenticate user and receive JWT token
 *
 * Expected Input:
 * ```json
 * { "email": "string", "password": "string" }
 * ```
 *
 * Expected Output (Success):
 * ```json
 * { "token": "eyJhbGciOiJIUzI1NiI..." }
 * ```
 *
 * 400 when a field is missing, 404 for an unknown email, 401 when the
 * password does not match the stored hash.
 */
pub async fn login_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> Result<Json<Value>, ApiError> {
    let credentials = payload.require("All inputs are required")?;

    let user = state
        .repository
        .find_user_by_email(&credentials.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login attempt for unknown email");
            ApiError::not_found("user not found")
        })?;

    let password = credentials.password;
    let stored_hash = user.password.clone();
    let password_match = run_blocking(move || verify_password(&password, &stored_hash)).await?;

    if !password_match {
        tracing::warn!(user_id = user.id, "Login rejected: incorrect password");
        return Err(ApiError::unauthorized("Incorrect password"));
    }

    let token = state.tokens.issue(user.id, &user.email)?;

    Ok(Json(json!({ "token": token })))
}
