//! SQL DDL for initializing the blog database.
//! SQLite-first design; applied idempotently on startup.

/// SQLite schema with:
/// - `blog_post`: id INTEGER PRIMARY KEY AUTOINCREMENT, title, content
/// - `user`: id INTEGER PRIMARY KEY AUTOINCREMENT, username UNIQUE, password
///
/// The UNIQUE constraint on `username` makes registration an atomic
/// insert-or-fail instead of a racy scan-then-insert.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS blog_post (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS user (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
);
"#;
