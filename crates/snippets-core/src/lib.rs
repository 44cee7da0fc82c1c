//! Snippets Core - domain model and ambient facilities
//!
//! This crate provides the pieces shared by the store and the CLI:
//! - The `Snippet` model
//! - The structured error facility (`ExError`, `ExErrorKind`, `SnippetError`)
//! - The structured logging facility with `log_op_*` macros
//! - Canonical field and event names for log output

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod schema;

// Used by the logging macros so callers need no direct tracing dependency
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, SnippetError};
pub use model::Snippet;
