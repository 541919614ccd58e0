//! devmind-core: domain records for the devmind knowledge API
//!
//! Three independent entities are persisted by the server:
//! - notes: markdown documents with pin/archive flags and an opaque tag blob
//! - tags: named, colored labels (names are unique)
//! - timelines: titled containers of opaque milestone JSON
//!
//! This crate holds the wire shapes (camelCase JSON), the defaults applied
//! on create, the partial-update rules, and the note list filter. It knows
//! nothing about HTTP or SQL.

pub mod error;
pub mod filter;
pub mod note;
pub mod tag;
pub mod timeline;
pub mod timestamps;

pub use error::ValidationError;
pub use filter::{NoteFilter, NoteQuery};
pub use note::{CreateNoteRequest, NewNote, Note, NotePatch, DEFAULT_CONTENT_TYPE, UNTITLED_NOTE};
pub use tag::{CreateTagRequest, NewTag, Tag, DEFAULT_TAG_COLOR};
pub use timeline::{CreateTimelineRequest, NewTimeline, Timeline, TimelinePatch};
pub use timestamps::next_updated_at;

/// Empty JSON array, used for opaque list blobs the client omitted.
pub const EMPTY_JSON_ARRAY: &str = "[]";
