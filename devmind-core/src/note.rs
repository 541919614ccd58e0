//! Notes - user-authored documents with pin/archive flags

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::EMPTY_JSON_ARRAY;

/// Title stored when the client leaves it blank.
pub const UNTITLED_NOTE: &str = "Untitled Note";

/// Content type stored when the client leaves it blank.
pub const DEFAULT_CONTENT_TYPE: &str = "markdown";

/// A stored note.
///
/// `tags` is a JSON-encoded array of tag names. It is stored and returned
/// verbatim and only ever inspected as a substring by the list filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub tags: String,
    pub is_pinned: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/notes`. Every field is optional; server-owned fields
/// (`id`, timestamps) are ignored if the client sends them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub content_type: Option<String>,
    pub tags: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_archived: Option<bool>,
}

/// A note ready to insert, with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub content_type: String,
    pub tags: String,
    pub is_pinned: bool,
    pub is_archived: bool,
}

impl From<CreateNoteRequest> for NewNote {
    fn from(req: CreateNoteRequest) -> Self {
        Self {
            title: non_blank(req.title).unwrap_or_else(|| UNTITLED_NOTE.to_owned()),
            content: req.content.unwrap_or_default(),
            content_type: non_blank(req.content_type)
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_owned()),
            tags: req.tags.unwrap_or_else(|| EMPTY_JSON_ARRAY.to_owned()),
            is_pinned: req.is_pinned.unwrap_or(false),
            is_archived: req.is_archived.unwrap_or(false),
        }
    }
}

/// Body of `PUT /api/notes/{id}`.
///
/// A field that is present replaces the stored value, including explicit
/// `false` and `""`. Absent and `null` fields are left untouched. A blank
/// `title` or `contentType` is ignored so the stored values stay non-empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub content_type: Option<String>,
    pub tags: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_archived: Option<bool>,
}

impl NotePatch {
    /// Drop values that would break the non-empty invariants.
    pub fn normalized(self) -> Self {
        Self {
            title: non_blank(self.title),
            content_type: non_blank(self.content_type),
            ..self
        }
    }

    /// Apply present fields to `note` and refresh `updated_at`.
    pub fn apply(self, note: &mut Note) {
        let patch = self.normalized();
        if let Some(title) = patch.title {
            note.title = title;
        }
        if let Some(content) = patch.content {
            note.content = content;
        }
        if let Some(content_type) = patch.content_type {
            note.content_type = content_type;
        }
        if let Some(tags) = patch.tags {
            note.tags = tags;
        }
        if let Some(is_pinned) = patch.is_pinned {
            note.is_pinned = is_pinned;
        }
        if let Some(is_archived) = patch.is_archived {
            note.is_archived = is_archived;
        }
        note.updated_at = crate::next_updated_at(note.updated_at);
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
