//! Embedded schema bootstrap
//!
//! The DDL is embedded at compile time and applied idempotently on every open.

use crate::errors::{schema_error, Result};
use rusqlite::Connection;

const SNIPPETS_SQL: &str = include_str!("../schema/snippets.sql");

/// Create the snippets table if it does not exist
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SNIPPETS_SQL)
        .map_err(|e| schema_error(&e.to_string()))
}
