use axum::{
    extract::{rejection::PathRejection, Extension, Path, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// DELETE /post/:id - Delete a post, only by its owner
pub async fn post_delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    // Non-numeric ids can never name a post
    let Path(id) = id.map_err(|_| ApiError::not_found("post not found"))?;

    let post = state
        .repository
        .find_post(id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;

    if post.user_id != user.id {
        tracing::warn!(post_id = id, user_id = user.id, "Delete rejected: not the owner");
        return Err(ApiError::unauthorized("User not allowed for this action"));
    }

    state.repository.delete_post(id).await.map_err(|e| {
        tracing::error!(post_id = id, "Failed to delete post: {}", e);
        ApiError::internal_server_error("Internal server error")
    })?;

    Ok(Json(json!({ "Details": "Post deleted" })))
}
