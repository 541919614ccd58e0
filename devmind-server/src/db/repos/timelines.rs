//! Timeline repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use devmind_core::{NewTimeline, Timeline, TimelinePatch};

use crate::db::DbError;

const TIMELINE_COLUMNS: &str = "id, title, description, milestones, created_at, updated_at";

/// Timeline record from database
#[derive(Debug, Clone, FromRow)]
struct TimelineRow {
    id: i64,
    title: String,
    description: String,
    milestones: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TimelineRow> for Timeline {
    fn from(r: TimelineRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            milestones: r.milestones,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Timeline repository
pub struct TimelineRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TimelineRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all timelines, newest first.
    pub async fn list(&self) -> Result<Vec<Timeline>, DbError> {
        let rows: Vec<TimelineRow> = sqlx::query_as(&format!(
            "SELECT {TIMELINE_COLUMNS} FROM timelines ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Timeline::from).collect())
    }

    pub async fn get(&self, id: i64) -> Result<Timeline, DbError> {
        let row: TimelineRow = sqlx::query_as(&format!(
            "SELECT {TIMELINE_COLUMNS} FROM timelines WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("timeline", id))?;

        Ok(row.into())
    }

    pub async fn create(&self, timeline: NewTimeline) -> Result<Timeline, DbError> {
        let row: TimelineRow = sqlx::query_as(&format!(
            r#"
            INSERT INTO timelines (title, description, milestones)
            VALUES ($1, $2, $3)
            RETURNING {TIMELINE_COLUMNS}
            "#
        ))
        .bind(&timeline.title)
        .bind(&timeline.description)
        .bind(&timeline.milestones)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Apply the present fields of `patch` and return the stored row.
    pub async fn update(&self, id: i64, patch: TimelinePatch) -> Result<Timeline, DbError> {
        let patch = patch.normalized();
        let row: TimelineRow = sqlx::query_as(&format!(
            r#"
            UPDATE timelines SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                milestones = COALESCE($4, milestones),
                updated_at = GREATEST(clock_timestamp(), updated_at + INTERVAL '1 microsecond')
            WHERE id = $1
            RETURNING {TIMELINE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.milestones)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("timeline", id))?;

        Ok(row.into())
    }

    /// Delete a timeline (idempotent).
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        sqlx::query("DELETE FROM timelines WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
