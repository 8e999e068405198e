use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum QuillError {
    #[error("post does not exist")]
    PostNotFound,

    #[error("user already exists")]
    UserExists,

    #[error("username or password is incorrect")]
    InvalidCredentials,

    #[error("missing or invalid bearer token")]
    Unauthorized,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Standardized JSON error body for the non-plain-text responses.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl IntoResponse for QuillError {
    fn into_response(self) -> axum::response::Response {
        match &self {
            // Plain-text contracts, kept verbatim from the public surface.
            QuillError::PostNotFound => {
                (StatusCode::NOT_FOUND, "Post does not exist!").into_response()
            }
            QuillError::UserExists => {
                (StatusCode::CONFLICT, "User already exists!").into_response()
            }
            // Deliberately generic: never reveals whether the username exists.
            QuillError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ApiErrorBody {
                    message: "Username or Password is incorrect.".to_string(),
                }),
            )
                .into_response(),
            QuillError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(ApiErrorBody {
                    message: "Missing or invalid access token.".to_string(),
                }),
            )
                .into_response(),
            QuillError::Database(_) | QuillError::Json(_) | QuillError::Token(_) => {
                error!(error = %self, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiErrorBody {
                        message: "An internal server error occurred.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
