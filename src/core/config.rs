//! Run configuration: the sweep root and traversal policy, with fixed defaults.
//!
//! Nothing here is read from files or the environment. The marker patterns are
//! hardcoded in [`crate::scanner::matcher`]; this struct only pins down the
//! per-run facts (where to start, what to do with unreadable subdirectories).

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use crate::core::errors::{Result, ZsError};
use crate::core::paths;

/// What the walker does when a subdirectory cannot be listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreadablePolicy {
    /// Report the directory as skipped and keep walking.
    #[default]
    Skip,
    /// Stop the walk and surface the error as a traversal failure.
    Abort,
}

/// Effective configuration for one sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    /// Absolute root of the walk.
    pub root: PathBuf,
    pub unreadable_dirs: UnreadablePolicy,
}

impl SweepConfig {
    /// Configuration rooted at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cfg = Self {
            root: paths::current_root()?,
            unreadable_dirs: UnreadablePolicy::default(),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Configuration rooted at an explicit path (resolved against the working
    /// directory when relative). Not validated; call [`Self::validate`].
    pub fn for_root(root: impl AsRef<Path>) -> Result<Self> {
        let cwd = paths::current_root()?;
        Ok(Self {
            root: paths::resolve_against(&cwd, root.as_ref()),
            unreadable_dirs: UnreadablePolicy::default(),
        })
    }

    #[must_use]
    pub fn with_unreadable_policy(mut self, policy: UnreadablePolicy) -> Self {
        self.unreadable_dirs = policy;
        self
    }

    /// Check the root invariants: absolute, exists, is a directory.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_absolute() {
            return Err(ZsError::InvalidConfig {
                details: format!("sweep root must be absolute: {}", self.root.display()),
            });
        }
        match std::fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ZsError::RootNotDirectory {
                path: self.root.clone(),
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Err(ZsError::RootNotFound {
                path: self.root.clone(),
            }),
            Err(err) => Err(ZsError::io(&self.root, err)),
        }
    }
}
