use axum::extract::{Extension, State};
use serde::Deserialize;

use crate::database::models::NewPost;
use crate::error::ApiError;
use crate::middleware::{AuthUser, JsonBody};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    pub description: Option<String>,
    pub src: Option<String>,
}

/// POST /post - Create a post owned by the token identity
///
/// Answers the plain text `Post created`. A failed insert is rolled back and
/// answered with 500 and a generic JSON error body, not a 200 text body, so
/// clients can tell it apart from success.
pub async fn post_create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> Result<&'static str, ApiError> {
    let description = payload
        .description
        .ok_or_else(|| ApiError::missing_fields("description is required", &["description"]))?;

    // An empty media reference is the same as none
    let src = payload.src.filter(|s| !s.is_empty());

    let post = state
        .repository
        .create_post(NewPost {
            description,
            src,
            user_id: user.id,
            time: chrono::Utc::now(),
        })
        .await?;

    tracing::info!(post_id = post.id, user_id = user.id, "Created post");
    Ok("Post created")
}
