use axum::Json;
use axum::extract::{Path, State};
use tracing::debug;

use crate::auth::AuthUser;
use crate::db::models::Post;
use crate::error::QuillError;
use crate::router::QuillState;
use crate::types::api::{CreatePostRequest, MessageResponse, UpdatePostRequest};

pub async fn create_post(
    State(state): State<QuillState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<Post>, QuillError> {
    let post = state.posts.create(&req.title, &req.content).await?;
    debug!(id = post.id, author = %user.username, "created post");
    Ok(Json(post))
}

pub async fn get_post(
    State(state): State<QuillState>,
    Path(id): Path<i64>,
) -> Result<Json<Post>, QuillError> {
    state
        .posts
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(QuillError::PostNotFound)
}

pub async fn list_posts(State(state): State<QuillState>) -> Result<Json<Vec<Post>>, QuillError> {
    Ok(Json(state.posts.list_all().await?))
}

/// Plain-text response echoing the updated record, matching the original
/// `Updated: {...}` contract.
pub async fn update_post(
    State(state): State<QuillState>,
    AuthUser(_): AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<String, QuillError> {
    let post = state
        .posts
        .update(id, req.title.as_deref(), req.content.as_deref())
        .await?
        .ok_or(QuillError::PostNotFound)?;
    Ok(format!("Updated: {}", serde_json::to_string(&post)?))
}

pub async fn delete_post(
    State(state): State<QuillState>,
    AuthUser(_): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, QuillError> {
    if !state.posts.delete(id).await? {
        return Err(QuillError::PostNotFound);
    }
    Ok(Json(MessageResponse {
        message: format!("Post with id {id} has been deleted"),
    }))
}
