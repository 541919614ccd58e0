//! The storage seam between HTTP handlers and persistence
//!
//! Handlers only see `Arc<dyn Store>`. Production wires in `PgStore`;
//! tests and embedders can pass `MemoryStore` (or anything else) to
//! `AppState::new` without touching process-wide state.

use async_trait::async_trait;
use sqlx::PgPool;

use devmind_core::{
    NewNote, NewTag, NewTimeline, Note, NoteFilter, NotePatch, Tag, Timeline, TimelinePatch,
};

use super::repos::{NoteRepo, TagRepo, TimelineRepo};
use super::DbError;

#[async_trait]
pub trait Store: Send + Sync + 'static {
    /// Notes matching `filter`, newest `created_at` first.
    async fn list_notes(&self, filter: &NoteFilter) -> Result<Vec<Note>, DbError>;
    async fn get_note(&self, id: i64) -> Result<Note, DbError>;
    async fn create_note(&self, note: NewNote) -> Result<Note, DbError>;
    /// `DbError::NotFound` if no such note.
    async fn update_note(&self, id: i64, patch: NotePatch) -> Result<Note, DbError>;
    /// Deleting a missing note succeeds.
    async fn delete_note(&self, id: i64) -> Result<(), DbError>;

    /// All tags in insertion order.
    async fn list_tags(&self) -> Result<Vec<Tag>, DbError>;
    /// `DbError::Conflict` if the name is taken.
    async fn create_tag(&self, tag: NewTag) -> Result<Tag, DbError>;
    async fn delete_tag(&self, id: i64) -> Result<(), DbError>;

    /// All timelines, newest `created_at` first.
    async fn list_timelines(&self) -> Result<Vec<Timeline>, DbError>;
    async fn get_timeline(&self, id: i64) -> Result<Timeline, DbError>;
    async fn create_timeline(&self, timeline: NewTimeline) -> Result<Timeline, DbError>;
    async fn update_timeline(&self, id: i64, patch: TimelinePatch)
        -> Result<Timeline, DbError>;
    async fn delete_timeline(&self, id: i64) -> Result<(), DbError>;

    /// Cheap round-trip used by the health endpoint.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Postgres-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_notes(&self, filter: &NoteFilter) -> Result<Vec<Note>, DbError> {
        NoteRepo::new(&self.pool).list(filter).await
    }

    async fn get_note(&self, id: i64) -> Result<Note, DbError> {
        NoteRepo::new(&self.pool).get(id).await
    }

    async fn create_note(&self, note: NewNote) -> Result<Note, DbError> {
        NoteRepo::new(&self.pool).create(note).await
    }

    async fn update_note(&self, id: i64, patch: NotePatch) -> Result<Note, DbError> {
        NoteRepo::new(&self.pool).update(id, patch).await
    }

    async fn delete_note(&self, id: i64) -> Result<(), DbError> {
        NoteRepo::new(&self.pool).delete(id).await
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, DbError> {
        TagRepo::new(&self.pool).list().await
    }

    async fn create_tag(&self, tag: NewTag) -> Result<Tag, DbError> {
        TagRepo::new(&self.pool).create(tag).await
    }

    async fn delete_tag(&self, id: i64) -> Result<(), DbError> {
        TagRepo::new(&self.pool).delete(id).await
    }

    async fn list_timelines(&self) -> Result<Vec<Timeline>, DbError> {
        TimelineRepo::new(&self.pool).list().await
    }

    async fn get_timeline(&self, id: i64) -> Result<Timeline, DbError> {
        TimelineRepo::new(&self.pool).get(id).await
    }

    async fn create_timeline(&self, timeline: NewTimeline) -> Result<Timeline, DbError> {
        TimelineRepo::new(&self.pool).create(timeline).await
    }

    async fn update_timeline(
        &self,
        id: i64,
        patch: TimelinePatch,
    ) -> Result<Timeline, DbError> {
        TimelineRepo::new(&self.pool).update(id, patch).await
    }

    async fn delete_timeline(&self, id: i64) -> Result<(), DbError> {
        TimelineRepo::new(&self.pool).delete(id).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
