use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// User row. Serialization includes the cleartext `password` field on
/// purpose: the `/users` listing exposes it, matching the original surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}
