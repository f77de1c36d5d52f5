//! Human console rendering of activity events.
//!
//! stdout carries the report contract, one line per deletion attempt and the
//! final total:
//!
//! ```text
//! Deleted: /abs/path/a.txt:Zone.Identifier
//! Error deleting /abs/path/locked.Zone.Identifier: Permission denied (os error 13)
//!
//! Total files deleted: 1
//! ```
//!
//! Diagnostics (skipped directories, the partial-run summary) go to stderr with
//! a bracketed component prefix so they never mix with the report.

use std::io::{self, Write};

use colored::Colorize;

use crate::logger::events::{ActivityEvent, ActivitySink, SweepSummary};

/// Writes the report to `out` and diagnostics to `err`.
pub struct ConsoleLogger<O: Write, E: Write> {
    out: O,
    err: E,
    color: bool,
}

impl ConsoleLogger<io::Stdout, io::Stderr> {
    /// Logger bound to the process stdout/stderr.
    #[must_use]
    pub fn stdio(color: bool) -> Self {
        Self::new(io::stdout(), io::stderr(), color)
    }
}

impl<O: Write, E: Write> ConsoleLogger<O, E> {
    /// `color` only adds ANSI styling to line prefixes; the text is unchanged.
    pub fn new(out: O, err: E, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Give back the underlying writers.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn deleted_prefix(&self) -> String {
        if self.color {
            "Deleted:".green().to_string()
        } else {
            "Deleted:".to_string()
        }
    }

    fn failed_prefix(&self) -> String {
        if self.color {
            "Error deleting".red().bold().to_string()
        } else {
            "Error deleting".to_string()
        }
    }

    fn write_summary(&mut self, summary: &SweepSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Total files deleted: {}", summary.deleted)?;
        self.out.flush()?;

        if summary.is_partial() {
            writeln!(
                self.err,
                "[ZSW-SWEEP] scanned {} files in {} directories in {}ms ({} failed, {} directories skipped)",
                summary.files_scanned,
                summary.dirs_visited,
                summary.elapsed.as_millis(),
                summary.failed,
                summary.dirs_skipped,
            )?;
        }
        Ok(())
    }
}

impl<O: Write, E: Write> ActivitySink for ConsoleLogger<O, E> {
    fn record(&mut self, event: ActivityEvent) -> io::Result<()> {
        match event {
            ActivityEvent::ArtifactDeleted { path, .. } => {
                let prefix = self.deleted_prefix();
                writeln!(self.out, "{prefix} {}", path.display())
            }
            ActivityEvent::ArtifactDeletionFailed { path, error, .. } => {
                let prefix = self.failed_prefix();
                writeln!(self.out, "{prefix} {}: {error}", path.display())
            }
            ActivityEvent::DirectorySkipped { path, error } => writeln!(
                self.err,
                "[ZSW-WALK] skipped unreadable directory {}: {error}",
                path.display()
            ),
            ActivityEvent::SweepCompleted { summary } => self.write_summary(&summary),
        }
    }
}
