//! Repository layer
//!
//! Maps snippet operations onto the SQLite schema

pub mod sqlite_repo;

pub use sqlite_repo::{escape_like, SnippetStore};
