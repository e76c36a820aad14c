use axum::{
    extract::{Extension, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /get - Every post owned by the token identity
pub async fn posts_list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    let posts = state.repository.posts_for_user(user.id).await?;
    Ok(Json(json!({ "posts": posts })))
}
