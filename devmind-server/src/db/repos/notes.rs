//! Note repository
//!
//! - list: one query built from the filter, newest first
//! - update: COALESCE per column, so absent fields keep their value
//! - delete: idempotent

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use devmind_core::filter::like_pattern;
use devmind_core::{NewNote, Note, NoteFilter, NotePatch};

use crate::db::DbError;

const NOTE_COLUMNS: &str =
    "id, title, content, content_type, tags, is_pinned, is_archived, created_at, updated_at";

/// Note record from database
#[derive(Debug, Clone, FromRow)]
struct NoteRow {
    id: i64,
    title: String,
    content: String,
    content_type: String,
    tags: String,
    is_pinned: bool,
    is_archived: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(r: NoteRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            content: r.content,
            content_type: r.content_type,
            tags: r.tags,
            is_pinned: r.is_pinned,
            is_archived: r.is_archived,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Note repository
pub struct NoteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> NoteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List notes matching `filter`, newest first.
    pub async fn list(&self, filter: &NoteFilter) -> Result<Vec<Note>, DbError> {
        let mut query = list_query(filter);
        let rows: Vec<NoteRow> = query.build_query_as().fetch_all(self.pool).await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    /// Get a single note by id.
    pub async fn get(&self, id: i64) -> Result<Note, DbError> {
        let row: NoteRow = sqlx::query_as(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("note", id))?;

        Ok(row.into())
    }

    pub async fn create(&self, note: NewNote) -> Result<Note, DbError> {
        let row: NoteRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO notes (title, content, content_type, tags, is_pinned, is_archived)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {NOTE_COLUMNS}
            "#
        ))
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.content_type)
        .bind(&note.tags)
        .bind(note.is_pinned)
        .bind(note.is_archived)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Apply the present fields of `patch` and return the stored row.
    pub async fn update(&self, id: i64, patch: NotePatch) -> Result<Note, DbError> {
        let patch = patch.normalized();
        let row: NoteRow = sqlx::query_as(&format!(
            r#"
            UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                content_type = COALESCE($4, content_type),
                tags = COALESCE($5, tags),
                is_pinned = COALESCE($6, is_pinned),
                is_archived = COALESCE($7, is_archived),
                updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1
            RETURNING {NOTE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.content)
        .bind(patch.content_type)
        .bind(patch.tags)
        .bind(patch.is_pinned)
        .bind(patch.is_archived)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("note", id))?;

        Ok(row.into())
    }

    /// Delete a note (idempotent).
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

fn list_query(filter: &NoteFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("SELECT {NOTE_COLUMNS} FROM notes WHERE TRUE"));

    if let Some(search) = &filter.search {
        let pattern = like_pattern(search);
        query
            .push(" AND (title ILIKE ")
            .push_bind(pattern.clone())
            .push(r" ESCAPE '\' OR content ILIKE ")
            .push_bind(pattern)
            .push(r" ESCAPE '\')");
    }
    if let Some(tag) = &filter.tag {
        query
            .push(" AND tags LIKE ")
            .push_bind(like_pattern(tag))
            .push(r" ESCAPE '\'");
    }
    if filter.pinned_only {
        query.push(" AND is_pinned = TRUE");
    }
    if !filter.include_archived {
        query.push(" AND is_archived = FALSE");
    }

    query.push(" ORDER BY created_at DESC, id DESC");
    query
}
