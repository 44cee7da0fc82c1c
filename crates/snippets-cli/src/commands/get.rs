//! Get command
//!
//! Usage: snippets get <NAME>

use clap::Args;
use snippets_core::errors::ExError;
use snippets_store::SnippetStore;

/// Shown in place of the snippet text when nothing visible is stored under the name
pub const NOT_FOUND: &str = "404: Snippet Not Found";

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Name of the snippet
    pub name: String,
}

/// Execute get
pub fn execute(store: &SnippetStore, args: GetArgs) -> Result<(), ExError> {
    let message = store.get(&args.name)?;
    println!(
        "Retrieved snippet: '{}'",
        message.as_deref().unwrap_or(NOT_FOUND)
    );
    Ok(())
}
