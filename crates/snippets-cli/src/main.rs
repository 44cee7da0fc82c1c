//! Snippets CLI
//!
//! Command-line interface for storing and retrieving named text snippets
//!
//! Exit codes: 0 on success, 1 on storage failure, 2 on usage errors.

use clap::{Parser, Subcommand};
use snippets_core::errors::ExError;
use snippets_store::SnippetStore;

mod commands;
mod config;

/// Exit code for storage failures
const EXIT_FAILURE: i32 = 1;
/// Exit code for usage errors; matches clap's own parse-failure code
const EXIT_USAGE: i32 = 2;

#[derive(Debug, Parser)]
#[command(name = "snippets")]
#[command(about = "Store and retrieve snippets of text", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: config::GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Store a snippet
    Put(commands::put::PutArgs),
    /// Retrieve a snippet by name
    Get(commands::get::GetArgs),
    /// List all snippet names
    Catalog,
    /// Find snippets whose text contains a word
    Search(commands::search::SearchArgs),
}

fn run(cli: Cli) -> Result<(), ExError> {
    cli.config.init_logging();

    let mut store = SnippetStore::open(&cli.config.db)?;
    let result = match cli.command {
        Commands::Put(args) => commands::put::execute(&mut store, args),
        Commands::Get(args) => commands::get::execute(&store, args),
        Commands::Catalog => commands::catalog::execute(&store),
        Commands::Search(args) => commands::search::execute(&store, args),
    };
    let closed = store.close();

    result.and(closed)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let code = if e.kind().is_usage() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        };
        std::process::exit(code);
    }
}
