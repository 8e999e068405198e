use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::db::models::User;
use crate::error::QuillError;
use crate::router::QuillState;

/// Token claims. The subject is the user id only — never the user record —
/// so resolution always re-fetches the current row from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
}

/// jsonwebtoken validates `exp` by default, so tokens carry one.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Issue an HS256 bearer token for the given user.
pub fn issue_token(secret: &str, user: &User) -> Result<String, QuillError> {
    let claims = Claims {
        sub: user.id,
        exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;
    Ok(token)
}

/// Decode and validate a bearer token. Any decode failure (bad signature,
/// expired, malformed) collapses into `Unauthorized`.
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, QuillError> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| QuillError::Unauthorized)?;
    Ok(data.claims)
}

/// Authenticated request identity, resolved from `Authorization: Bearer`.
/// The embedded claims are not trusted as state: the user row is re-read,
/// and a token for a since-deleted user is rejected.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl FromRequestParts<QuillState> for AuthUser {
    type Rejection = QuillError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &QuillState,
    ) -> Result<Self, Self::Rejection> {
        let auth = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .ok_or(QuillError::Unauthorized)?;

        let token = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            .ok_or(QuillError::Unauthorized)?;

        let claims = decode_token(&state.jwt_secret, token)?;

        let user = state
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                warn!(user_id = claims.sub, "token subject no longer exists");
                QuillError::Unauthorized
            })?;
        Ok(Self(user))
    }
}
