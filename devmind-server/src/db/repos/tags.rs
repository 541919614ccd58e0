//! Tag repository
//!
//! Name uniqueness is enforced by the UNIQUE constraint; a violation comes
//! back as `DbError::Conflict`.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use devmind_core::{NewTag, Tag};

use crate::db::DbError;

/// Tag record from database
#[derive(Debug, Clone, FromRow)]
struct TagRow {
    id: i64,
    name: String,
    color: String,
    created_at: DateTime<Utc>,
}

impl From<TagRow> for Tag {
    fn from(r: TagRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            color: r.color,
            created_at: r.created_at,
        }
    }
}

/// Tag repository
pub struct TagRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TagRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all tags in insertion order.
    pub async fn list(&self) -> Result<Vec<Tag>, DbError> {
        let rows: Vec<TagRow> =
            sqlx::query_as("SELECT id, name, color, created_at FROM tags ORDER BY id")
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(Tag::from).collect())
    }

    pub async fn create(&self, tag: NewTag) -> Result<Tag, DbError> {
        let row: TagRow = sqlx::query_as(
            r#"
            INSERT INTO tags (name, color)
            VALUES ($1, $2)
            RETURNING id, name, color, created_at
            "#,
        )
        .bind(&tag.name)
        .bind(&tag.color)
        .fetch_one(self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, "tag", &tag.name))?;

        Ok(row.into())
    }

    /// Delete a tag (idempotent). Notes referencing the name are untouched.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p devmind-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_name_conflicts() {
        let pool = crate::db::pool::connect_from_env().await;
        crate::db::migrations::run(&pool).await.expect("migrations failed");
        let repo = TagRepo::new(&pool);

        let tag = NewTag {
            name: "repo-duplicate".into(),
            color: "#000000".into(),
        };
        let first = repo.create(tag.clone()).await.unwrap();
        let err = repo.create(tag).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict { resource: "tag", .. }));

        let stored = repo.list().await.unwrap();
        assert_eq!(
            stored.iter().filter(|t| t.name == "repo-duplicate").count(),
            1
        );

        repo.delete(first.id).await.unwrap();
    }
}
