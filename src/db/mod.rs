//! Database module: models, schema and per-entity stores.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `posts.rs` / `users.rs`: CRUD stores over one table each

pub mod models;
pub mod posts;
pub mod schema;
pub mod users;

pub use models::{Post, User};
pub use posts::PostStore;
pub use schema::SQLITE_INIT;
pub use users::UserStore;

use crate::error::QuillError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

/// Open the database (creating the file if missing) and ensure the schema
/// exists. The returned pool is the only handle the rest of the app sees.
pub async fn connect(database_url: &str) -> Result<SqlitePool, QuillError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

/// Initialize the schema by executing the bundled DDL.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), QuillError> {
    // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let connect_opts =
        SqliteConnectOptions::from_str("sqlite::memory:").expect("invalid sqlite url");
    // single connection so every query sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_opts)
        .await
        .expect("failed to open in-memory database");
    init_schema(&pool).await.expect("failed to init schema");
    pool
}
