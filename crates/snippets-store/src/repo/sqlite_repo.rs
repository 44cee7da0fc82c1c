//! SQLite snippet repository
//!
//! `SnippetStore` owns the process's single backend connection and maps each
//! snippet operation onto one SQL statement.

use crate::db;
use crate::errors::{from_rusqlite, in_op, Result};
use crate::schema::ensure_schema;
use rusqlite::{Connection, OptionalExtension, TransactionBehavior};
use snippets_core::errors::SnippetError;
use snippets_core::model::Snippet;
use snippets_core::{log_op_end, log_op_error, log_op_start};
use std::path::Path;
use std::time::Instant;

const UPSERT_SQL: &str = "INSERT INTO snippets (keyword, message, hidden)
     VALUES (?1, ?2, ?3)
     ON CONFLICT(keyword) DO UPDATE SET
        message = excluded.message";

const GET_VISIBLE_SQL: &str = "SELECT message FROM snippets WHERE keyword = ?1 AND hidden = 0";

const GET_ROW_SQL: &str = "SELECT keyword, message, hidden FROM snippets WHERE keyword = ?1";

const CATALOG_SQL: &str = "SELECT keyword FROM snippets ORDER BY keyword";

const SEARCH_SQL: &str = r"SELECT message FROM snippets
     WHERE message LIKE '%' || ?1 || '%' ESCAPE '\'
     ORDER BY keyword";

/// Escape `LIKE` metacharacters so `word` matches literally
///
/// The escape character is `\`, matching the `ESCAPE` clause of the search query.
pub fn escape_like(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn validate_keyword(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(SnippetError::EmptyKeyword.into());
    }
    Ok(())
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// SQLite-backed snippet store
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Open (or create) the database file at `path`
    ///
    /// Configures the connection and ensures the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let start = Instant::now();
        log_op_start!("connect", path = %path.display());

        let result = db::open(path).and_then(Self::from_connection);
        match &result {
            Ok(_) => log_op_end!("connect", duration_ms = elapsed_ms(start)),
            Err(e) => log_op_error!("connect", e.clone(), duration_ms = elapsed_ms(start)),
        }
        result
    }

    /// Open a private in-memory store (for testing)
    pub fn in_memory() -> Result<Self> {
        db::open_in_memory().and_then(Self::from_connection)
    }

    /// Wrap an already-open connection, configuring it and ensuring the schema
    pub fn from_connection(conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection, surfacing any error from closing it
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| from_rusqlite(e))
    }

    /// Store `snippet` under `name`
    ///
    /// Inserts a new row, or replaces the message of an existing row with the
    /// same keyword. The hidden flag is only written on insert. The whole
    /// upsert runs in one IMMEDIATE transaction and is committed before
    /// returning.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an empty keyword; `Persistence` or `Concurrency` for
    /// backend failures.
    pub fn put(&mut self, name: &str, snippet: &str, hide: bool) -> Result<(String, String)> {
        let start = Instant::now();
        log_op_start!("put", keyword = name, hidden = hide);

        let result = self.put_inner(name, snippet, hide);
        match &result {
            Ok(_) => log_op_end!("put", duration_ms = elapsed_ms(start), keyword = name),
            Err(e) => log_op_error!(
                "put",
                e.clone(),
                duration_ms = elapsed_ms(start),
                keyword = name
            ),
        }
        result
    }

    fn put_inner(&mut self, name: &str, snippet: &str, hide: bool) -> Result<(String, String)> {
        validate_keyword(name).map_err(|e| e.with_op("put"))?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(in_op("put"))?;
        let changed = tx
            .execute(UPSERT_SQL, rusqlite::params![name, snippet, hide])
            .map_err(|e| in_op("put")(e).with_keyword(name))?;
        tx.commit().map_err(in_op("put"))?;

        tracing::debug!(
            keyword = name,
            rows = changed,
            bytes = snippet.len(),
            "Upserted snippet"
        );

        Ok((name.to_string(), snippet.to_string()))
    }

    /// Retrieve the message stored under `name`
    ///
    /// Returns `None` when no row exists or the row is hidden; the two cases
    /// are indistinguishable to the caller.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        let start = Instant::now();
        log_op_start!("get", keyword = name);

        let result = self
            .conn
            .query_row(GET_VISIBLE_SQL, [name], |row| row.get::<_, String>(0))
            .optional()
            .map_err(|e| in_op("get")(e).with_keyword(name));
        match &result {
            Ok(found) => log_op_end!(
                "get",
                duration_ms = elapsed_ms(start),
                keyword = name,
                found = found.is_some()
            ),
            Err(e) => log_op_error!(
                "get",
                e.clone(),
                duration_ms = elapsed_ms(start),
                keyword = name
            ),
        }
        result
    }

    /// Fetch the raw row for `name`, hidden or not
    pub fn get_snippet(&self, name: &str) -> Result<Option<Snippet>> {
        self.conn
            .query_row(GET_ROW_SQL, [name], |row| {
                let keyword: String = row.get(0)?;
                let message: String = row.get(1)?;
                Ok(Snippet::new(keyword, message).with_hidden(row.get(2)?))
            })
            .optional()
            .map_err(|e| in_op("get_snippet")(e).with_keyword(name))
    }

    /// List every keyword in the table, hidden rows included, sorted by keyword
    pub fn catalog(&self) -> Result<Vec<String>> {
        let start = Instant::now();
        log_op_start!("catalog");

        let result = self.collect_strings("catalog", CATALOG_SQL, []);
        match &result {
            Ok(keywords) => log_op_end!(
                "catalog",
                duration_ms = elapsed_ms(start),
                row_count = keywords.len()
            ),
            Err(e) => log_op_error!("catalog", e.clone(), duration_ms = elapsed_ms(start)),
        }
        result
    }

    /// List messages containing `word` as a literal substring, sorted by keyword
    ///
    /// Hidden rows are not filtered out. This is deliberate and matches
    /// [`SnippetStore::catalog`]; only [`SnippetStore::get`] honours the hidden
    /// flag. Whether search should also skip hidden rows is an open question,
    /// and changing it is a behavior change for existing databases.
    pub fn search(&self, word: &str) -> Result<Vec<String>> {
        let start = Instant::now();
        log_op_start!("search", word = word);

        let pattern = escape_like(word);
        let result = self.collect_strings("search", SEARCH_SQL, [pattern.as_str()]);
        match &result {
            Ok(messages) => log_op_end!(
                "search",
                duration_ms = elapsed_ms(start),
                row_count = messages.len()
            ),
            Err(e) => log_op_error!("search", e.clone(), duration_ms = elapsed_ms(start)),
        }
        result
    }

    fn collect_strings<P: rusqlite::Params>(
        &self,
        op: &'static str,
        sql: &str,
        params: P,
    ) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(sql).map_err(in_op(op))?;
        let rows = stmt
            .query_map(params, |row| row.get::<_, String>(0))
            .map_err(in_op(op))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(in_op(op))?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%"), r"50\%");
        assert_eq!(escape_like("a_b"), r"a\_b");
        assert_eq!(escape_like(r"c:\tmp"), r"c:\\tmp");
    }

    #[test]
    fn test_validate_keyword() {
        assert!(validate_keyword("a").is_ok());
        assert!(validate_keyword("").is_err());
        assert!(validate_keyword("   ").is_err());
    }

    #[test]
    fn test_put_then_get() {
        let mut store = SnippetStore::in_memory().unwrap();
        let (name, snippet) = store.put("a", "hello", false).unwrap();

        assert_eq!(name, "a");
        assert_eq!(snippet, "hello");
        assert_eq!(store.get("a").unwrap().as_deref(), Some("hello"));
    }
}
