use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::auth::issue_token;
use crate::error::QuillError;
use crate::router::QuillState;
use crate::types::api::{LoginRequest, LoginResponse};

/// Credential check is exact string equality against the stored value;
/// this surface deliberately has no password hashing.
pub async fn login(
    State(state): State<QuillState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, QuillError> {
    let user = match state.users.find_by_username(&req.username).await? {
        Some(user) if user.password == req.password => user,
        // Unknown user and wrong password produce the same response.
        _ => {
            warn!(username = %req.username, "failed login attempt");
            return Err(QuillError::InvalidCredentials);
        }
    };

    let access_token = issue_token(&state.jwt_secret, &user)?;
    Ok(Json(LoginResponse {
        message: "Successfully logged in!".to_string(),
        access_token,
    }))
}
