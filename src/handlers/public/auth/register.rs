// handlers/public/auth/register.rs - POST /user handler

use axum::extract::State;

use crate::auth::hash_password;
use crate::database::models::NewUser;
use crate::error::ApiError;
use crate::middleware::JsonBody;
use crate::state::AppState;

use super::{run_blocking, CredentialsRequest};

/**
 * POST /user - Register new user account
 *
 * Expected Input:
 * ```json
 * { "email": "string", "password": "string" }
 * ```
 *
 * Responds with the plain text `User created`. The password is stored only
 * as an Argon2id hash.
 *
 * A failed insert is rolled back and answered with 500 and a generic JSON
 * error body rather than a 200 text body, so clients can tell it apart from
 * success. No database detail reaches the client.
 */
pub async fn register_post(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CredentialsRequest>,
) -> Result<&'static str, ApiError> {
    let credentials = payload.require("email and password required")?;

    let password = credentials.password;
    let password_hash = run_blocking(move || hash_password(&password)).await?;

    let user = state
        .repository
        .create_user(NewUser {
            email: credentials.email,
            password_hash,
            is_active: true,
        })
        .await?;

    tracing::info!(user_id = user.id, "Registered user");
    Ok("User created")
}
