//! Search command
//!
//! Usage: snippets search <WORD>

use clap::Args;
use snippets_core::errors::ExError;
use snippets_store::SnippetStore;

use super::one_line;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for inside snippet bodies
    pub word: String,
}

/// Execute search, printing one matching message per line
///
/// Line breaks inside a message are escaped so each match stays on one line.
pub fn execute(store: &SnippetStore, args: SearchArgs) -> Result<(), ExError> {
    for message in store.search(&args.word)? {
        println!("{}", one_line(&message));
    }
    Ok(())
}
