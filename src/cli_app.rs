//! Top-level CLI definition and dispatch.

use std::io::{self, IsTerminal};

use clap::Parser;
use colored::control;
use thiserror::Error;

use zone_sweep::core::config::SweepConfig;
use zone_sweep::core::errors::ZsError;
use zone_sweep::logger::console::ConsoleLogger;
use zone_sweep::scanner::sweep::Sweeper;

/// Delete Windows Zone.Identifier marker files under the current directory.
#[derive(Debug, Parser)]
#[command(
    name = "zsweep",
    author,
    version,
    about = "Delete Zone.Identifier marker files under the current directory",
    long_about = "Recursively walks the current working directory, deepest directories first, \
                  and permanently deletes every file whose name ends with ':Zone.Identifier' \
                  or contains '.Zone.Identifier'. Prints one line per deletion attempt and \
                  the total number of files deleted."
)]
pub struct Cli {}

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment/runtime failure.
    #[error("{0}")]
    Runtime(String),
    /// Internal bug or invariant violation.
    #[error("{0}")]
    Internal(String),
    /// Output write failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// Process exit code contract for the CLI.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Runtime(_) | Self::Io(_) => 2,
            Self::Internal(_) => 3,
        }
    }
}

impl From<ZsError> for CliError {
    fn from(err: ZsError) -> Self {
        match err {
            ZsError::Output { source } => Self::Io(source),
            ZsError::InvalidConfig { .. } => Self::Internal(err.to_string()),
            ZsError::RootNotFound { .. }
            | ZsError::RootNotDirectory { .. }
            | ZsError::UnreadableDirectory { .. }
            | ZsError::Io { .. } => Self::Runtime(err.to_string()),
        }
    }
}

/// Run one sweep of the current working directory.
pub fn run(_cli: &Cli) -> Result<(), CliError> {
    let color = io::stdout().is_terminal();
    if !color {
        control::set_override(false);
    }

    let config = SweepConfig::from_current_dir()?;
    let mut logger = ConsoleLogger::stdio(color);
    Sweeper::new(&config).run(&mut logger)?;
    Ok(())
}
