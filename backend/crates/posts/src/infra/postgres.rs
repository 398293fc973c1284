//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// PostgreSQL-backed post store
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn insert(&self, title: &str, content: &str) -> PostResult<Post> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id, title, content, created_at
            "#,
        )
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_post())
    }

    async fn list_all(&self) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, title, content, created_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> PostResult<u64> {
        let changed = sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, content = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(changed)
    }

    async fn delete(&self, id: i64) -> PostResult<u64> {
        let changed = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(changed)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
        }
    }
}
