//! Error handling for snippets-store
//!
//! Wraps snippets-core ExError with store-specific helpers

use rusqlite::ErrorCode;
use snippets_core::errors::{ExError, ExErrorKind, SnippetError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Classify a rusqlite error raised by the named store operation
///
/// Busy and locked failures classify as `Concurrency`; everything else is a
/// `SnippetError::Storage`, surfacing as `Persistence`.
pub fn storage_error(op: &str, err: rusqlite::Error) -> ExError {
    match err.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => {
            ExError::new(ExErrorKind::Concurrency)
                .with_op(op.to_string())
                .with_message(err.to_string())
        }
        _ => SnippetError::Storage {
            op: op.to_string(),
            reason: err.to_string(),
        }
        .into(),
    }
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    storage_error("sqlite", err)
}

/// Map a rusqlite error raised while running the named store operation
pub fn in_op(op: &'static str) -> impl Fn(rusqlite::Error) -> ExError {
    move |err| storage_error(op, err)
}

/// Create a schema bootstrap error
pub fn schema_error(reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("ensure_schema")
        .with_message(format!("Schema bootstrap failed: {}", reason))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
