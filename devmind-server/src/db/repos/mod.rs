//! Repository implementations for database access
//!
//! One repository per table, each borrowing the pool:
//! - notes: filtered list, create, partial update, delete
//! - tags: list, create (unique name), delete
//! - timelines: list, create, partial update, delete

pub mod notes;
pub mod tags;
pub mod timelines;

pub use notes::NoteRepo;
pub use tags::TagRepo;
pub use timelines::TimelineRepo;
