use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::db::models::User;
use crate::error::QuillError;
use crate::router::QuillState;
use crate::types::api::NewUserRequest;

pub async fn new_user(
    State(state): State<QuillState>,
    Json(req): Json<NewUserRequest>,
) -> Result<String, QuillError> {
    let user = state.users.create(&req.username, &req.password).await?;
    info!(id = user.id, username = %user.username, "registered new user");
    Ok(format!(
        "Successfully created a new user: {}",
        user.username
    ))
}

/// Lists every user row verbatim, cleartext password included — the
/// original surface exposes it and this one keeps the contract.
pub async fn list_users(State(state): State<QuillState>) -> Result<Json<Vec<User>>, QuillError> {
    Ok(Json(state.users.list_all().await?))
}
