use crate::db::SqlitePool;
use crate::db::models::Post;
use crate::error::QuillError;

/// CRUD over the `blog_post` table. Holds no state beyond the pool handle;
/// every call is a single committed statement.
#[derive(Clone)]
pub struct PostStore {
    pool: SqlitePool,
}

impl PostStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, title: &str, content: &str) -> Result<Post, QuillError> {
        let result = sqlx::query("INSERT INTO blog_post (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(Post {
            id: result.last_insert_rowid(),
            title: title.to_owned(),
            content: content.to_owned(),
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>, QuillError> {
        let post = sqlx::query_as::<_, Post>("SELECT id, title, content FROM blog_post WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    /// Natural (rowid) order; no pagination on this surface.
    pub async fn list_all(&self) -> Result<Vec<Post>, QuillError> {
        let posts = sqlx::query_as::<_, Post>("SELECT id, title, content FROM blog_post")
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    /// Partial update: a `None` field keeps the stored value. Returns the
    /// row as it stands after the update, or `None` for an unknown id.
    pub async fn update(
        &self,
        id: i64,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Option<Post>, QuillError> {
        let result = sqlx::query(
            r#"UPDATE blog_post
               SET title = COALESCE(?, title),
                   content = COALESCE(?, content)
               WHERE id = ?"#,
        )
        .bind(title)
        .bind(content)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_by_id(id).await
    }

    /// Returns `false` when the id was already absent.
    pub async fn delete(&self, id: i64) -> Result<bool, QuillError> {
        let result = sqlx::query("DELETE FROM blog_post WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
