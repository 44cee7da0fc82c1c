//! Global options shared by every subcommand
//!
//! Each option falls back to an environment variable, then to a default
//! relative to the working directory.

use clap::{Args, ValueEnum};
use snippets_core::logging_facility::{init, init_with_writer, Profile};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn profile(self) -> Profile {
        match self {
            LogFormat::Text => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "SNIPPETS_DB", default_value = "snippets.db")]
    pub db: PathBuf,

    /// File that diagnostic log lines are appended to
    #[arg(long, global = true, env = "SNIPPETS_LOG", default_value = "snippets.log")]
    pub log_file: PathBuf,

    /// Format of the diagnostic log lines
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl GlobalArgs {
    /// Route diagnostic logging to the configured log file
    ///
    /// Logging never blocks a command: if the file cannot be opened, a warning
    /// goes to stderr and log lines follow it there.
    pub fn init_logging(&self) {
        let profile = self.log_format.profile();
        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
        {
            Ok(file) => init_with_writer(profile, file),
            Err(e) => {
                eprintln!(
                    "Warning: cannot open log file {}: {}; logging to stderr",
                    self.log_file.display(),
                    e
                );
                init(profile);
            }
        }
    }
}
