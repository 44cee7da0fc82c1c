//! Put command
//!
//! Usage: snippets put <NAME> <SNIPPET> [--hide]

use clap::Args;
use snippets_core::errors::ExError;
use snippets_store::SnippetStore;

#[derive(Debug, Args)]
pub struct PutArgs {
    /// Name of the snippet
    pub name: String,

    /// Snippet text
    pub snippet: String,

    /// Exclude the snippet from lookups by name
    #[arg(long)]
    pub hide: bool,
}

/// Execute put
pub fn execute(store: &mut SnippetStore, args: PutArgs) -> Result<(), ExError> {
    let (name, snippet) = store.put(&args.name, &args.snippet, args.hide)?;
    println!("Stored '{}' as '{}'", snippet, name);
    Ok(())
}
