//! Catalog command
//!
//! Usage: snippets catalog

use snippets_core::errors::ExError;
use snippets_store::SnippetStore;

use super::one_line;

/// Execute catalog, printing one keyword per line, escaped as in search output
pub fn execute(store: &SnippetStore) -> Result<(), ExError> {
    for keyword in store.catalog()? {
        println!("{}", one_line(&keyword));
    }
    Ok(())
}
