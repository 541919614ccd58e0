//! In-process store with the same semantics as `PgStore`
//!
//! Ids start at 1 and only grow, tag names are unique, and list ordering
//! matches the SQL (`created_at DESC, id DESC`; tags by id).

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use devmind_core::{
    NewNote, NewTag, NewTimeline, Note, NoteFilter, NotePatch, Tag, Timeline, TimelinePatch,
};

use super::{DbError, Store};

#[derive(Default)]
struct Tables {
    notes: Vec<Note>,
    tags: Vec<Tag>,
    timelines: Vec<Timeline>,
    note_seq: i64,
    tag_seq: i64,
    timeline_seq: i64,
}

fn next_id(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

/// In-memory store, used by tests
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_notes(&self, filter: &NoteFilter) -> Result<Vec<Note>, DbError> {
        let tables = self.tables.read().await;
        let mut notes: Vec<Note> = tables
            .notes
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn get_note(&self, id: i64) -> Result<Note, DbError> {
        let tables = self.tables.read().await;
        tables
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("note", id))
    }

    async fn create_note(&self, note: NewNote) -> Result<Note, DbError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let note = Note {
            id: next_id(&mut tables.note_seq),
            title: note.title,
            content: note.content,
            content_type: note.content_type,
            tags: note.tags,
            is_pinned: note.is_pinned,
            is_archived: note.is_archived,
            created_at: now,
            updated_at: now,
        };
        tables.notes.push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: i64, patch: NotePatch) -> Result<Note, DbError> {
        let mut tables = self.tables.write().await;
        let note = tables
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DbError::not_found("note", id))?;
        patch.apply(note);
        Ok(note.clone())
    }

    async fn delete_note(&self, id: i64) -> Result<(), DbError> {
        self.tables.write().await.notes.retain(|n| n.id != id);
        Ok(())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, DbError> {
        Ok(self.tables.read().await.tags.clone())
    }

    async fn create_tag(&self, tag: NewTag) -> Result<Tag, DbError> {
        let mut tables = self.tables.write().await;
        if tables.tags.iter().any(|t| t.name == tag.name) {
            return Err(DbError::Conflict {
                resource: "tag",
                key: tag.name,
            });
        }
        let tag = Tag {
            id: next_id(&mut tables.tag_seq),
            name: tag.name,
            color: tag.color,
            created_at: Utc::now(),
        };
        tables.tags.push(tag.clone());
        Ok(tag)
    }

    async fn delete_tag(&self, id: i64) -> Result<(), DbError> {
        self.tables.write().await.tags.retain(|t| t.id != id);
        Ok(())
    }

    async fn list_timelines(&self) -> Result<Vec<Timeline>, DbError> {
        let mut timelines = self.tables.read().await.timelines.clone();
        timelines.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(timelines)
    }

    async fn get_timeline(&self, id: i64) -> Result<Timeline, DbError> {
        let tables = self.tables.read().await;
        tables
            .timelines
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found("timeline", id))
    }

    async fn create_timeline(&self, timeline: NewTimeline) -> Result<Timeline, DbError> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let timeline = Timeline {
            id: next_id(&mut tables.timeline_seq),
            title: timeline.title,
            description: timeline.description,
            milestones: timeline.milestones,
            created_at: now,
            updated_at: now,
        };
        tables.timelines.push(timeline.clone());
        Ok(timeline)
    }

    async fn update_timeline(
        &self,
        id: i64,
        patch: TimelinePatch,
    ) -> Result<Timeline, DbError> {
        let mut tables = self.tables.write().await;
        let timeline = tables
            .timelines
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| DbError::not_found("timeline", id))?;
        patch.apply(timeline);
        Ok(timeline.clone())
    }

    async fn delete_timeline(&self, id: i64) -> Result<(), DbError> {
        self.tables.write().await.timelines.retain(|t| t.id != id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_note(title: &str, tags: &str) -> NewNote {
        NewNote {
            title: title.into(),
            content: String::new(),
            content_type: "markdown".into(),
            tags: tags.into(),
            is_pinned: false,
            is_archived: false,
        }
    }

    #[tokio::test]
    async fn ids_increase_and_survive_deletes() {
        let store = MemoryStore::new();
        let a = store.create_note(new_note("A", "[]")).await.unwrap();
        store.delete_note(a.id).await.unwrap();
        let b = store.create_note(new_note("B", "[]")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn notes_listed_newest_first() {
        let store = MemoryStore::new();
        for title in ["first", "second", "third"] {
            store.create_note(new_note(title, "[]")).await.unwrap();
        }

        let notes = store.list_notes(&NoteFilter::default()).await.unwrap();
        let titles: Vec<_> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["third", "second", "first"]);
        assert!(notes.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn duplicate_tag_conflicts() {
        let store = MemoryStore::new();
        let tag = NewTag {
            name: "work".into(),
            color: "#3b82f6".into(),
        };
        store.create_tag(tag.clone()).await.unwrap();
        let err = store.create_tag(tag).await.unwrap_err();

        assert!(matches!(err, DbError::Conflict { resource: "tag", .. }));
        assert_eq!(store.list_tags().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_missing_note() {
        let store = MemoryStore::new();
        let err = store
            .update_note(9999, NotePatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "note", .. }));
    }

    #[tokio::test]
    async fn update_keeps_created_at() {
        let store = MemoryStore::new();
        let created = store
            .create_timeline(NewTimeline {
                title: "T".into(),
                description: String::new(),
                milestones: "[]".into(),
            })
            .await
            .unwrap();

        let patch = TimelinePatch {
            title: Some("T2".into()),
            ..Default::default()
        };
        let updated = store.update_timeline(created.id, patch).await.unwrap();

        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(store.get_timeline(created.id).await.unwrap(), updated);
    }
}
