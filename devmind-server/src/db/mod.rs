//! Database layer - connection pool, schema and stores
//!
//! # Design Principles
//!
//! - Connection pool shared by all handlers, no process-wide handle
//! - Handlers talk to a `Store` trait object so tests can swap in `MemoryStore`
//! - Rely on DB constraints (tag name uniqueness), no check-then-insert

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use repos::{NoteRepo, TagRepo, TimelineRepo};
pub use store::{PgStore, Store};
