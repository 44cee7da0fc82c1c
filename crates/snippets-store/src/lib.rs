//! Snippets Store - SQLite persistence for named text snippets
//!
//! Provides:
//! - Connection management with pragmas for concurrent writers
//! - Embedded schema bootstrap
//! - `SnippetStore`, owning the single connection and exposing put/get/catalog/search

pub mod db;
pub mod errors;
pub mod repo;
pub mod schema;

// Re-export key types
pub use errors::Result;
pub use repo::SnippetStore;
