//! Deletion executor: one removal attempt per matched file, never aborting the run.
//!
//! Each attempt produces a [`DeletionOutcome`]; failures carry the underlying
//! IO error and are left for the caller to log and count. There are no retries
//! and no pre-flight checks: a file that vanished between listing and removal
//! is an ordinary failure.

#![allow(missing_docs)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scanner::matcher::MatchRule;

// ──────────────────── removal seam ────────────────────

/// Filesystem removal primitive used by the executor.
pub trait Remover {
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// Production remover: permanent, immediate `unlink`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

// ──────────────────── outcomes ────────────────────

/// Result of one deletion attempt.
#[derive(Debug)]
pub enum DeletionOutcome {
    Deleted {
        path: PathBuf,
        rule: MatchRule,
    },
    Failed {
        path: PathBuf,
        rule: MatchRule,
        error: io::Error,
    },
}

impl DeletionOutcome {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Deleted { path, .. } | Self::Failed { path, .. } => path,
        }
    }

    #[must_use]
    pub const fn rule(&self) -> MatchRule {
        match self {
            Self::Deleted { rule, .. } | Self::Failed { rule, .. } => *rule,
        }
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

// ──────────────────── executor ────────────────────

/// Deletes matched files through a [`Remover`].
#[derive(Debug, Default)]
pub struct DeletionExecutor<R = FsRemover> {
    remover: R,
}

impl DeletionExecutor<FsRemover> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            remover: FsRemover,
        }
    }
}

impl<R: Remover> DeletionExecutor<R> {
    pub fn with_remover(remover: R) -> Self {
        Self { remover }
    }

    /// Attempt one removal. Never returns early on failure; the error is
    /// captured in the outcome.
    pub fn delete(&self, path: PathBuf, rule: MatchRule) -> DeletionOutcome {
        match self.remover.remove_file(&path) {
            Ok(()) => DeletionOutcome::Deleted { path, rule },
            Err(error) => DeletionOutcome::Failed { path, rule, error },
        }
    }
}

// ──────────────────── tests ────────────────────
