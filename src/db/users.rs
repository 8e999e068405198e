use crate::db::SqlitePool;
use crate::db::models::User;
use crate::error::QuillError;

/// Create/list/lookup over the `user` table. Passwords are stored as
/// given; this surface performs no hashing.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomic insert-or-fail: the UNIQUE index on `username` is the
    /// uniqueness check, so concurrent duplicate registrations lose
    /// cleanly instead of racing a separate existence scan.
    pub async fn create(&self, username: &str, password: &str) -> Result<User, QuillError> {
        let result = sqlx::query("INSERT INTO user (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    QuillError::UserExists
                }
                other => QuillError::Database(other),
            })?;
        Ok(User {
            id: result.last_insert_rowid(),
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    pub async fn list_all(&self) -> Result<Vec<User>, QuillError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, password FROM user")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Exact, case-sensitive match.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, QuillError> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM user WHERE username = ?")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, QuillError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, password FROM user WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let store = UserStore::new(memory_pool().await);
        store.create("alice", "pw").await.unwrap();

        let err = store.create("alice", "other").await.unwrap_err();
        assert!(matches!(err, QuillError::UserExists));

        // exactly one row survives
        let users = store.list_all().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[0].password, "pw");
    }

    #[tokio::test]
    async fn username_lookup_is_case_sensitive() {
        let store = UserStore::new(memory_pool().await);
        store.create("Bob", "pw").await.unwrap();
        assert!(store.find_by_username("bob").await.unwrap().is_none());
        assert!(store.find_by_username("Bob").await.unwrap().is_some());
    }
}
