//! ZSW-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, ZsError>;

/// Top-level error type for zone_sweep.
#[derive(Debug, Error)]
pub enum ZsError {
    #[error("[ZSW-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[ZSW-2001] sweep root does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("[ZSW-2002] sweep root is not a directory: {path}")]
    RootNotDirectory { path: PathBuf },

    #[error("[ZSW-2003] unreadable directory {path}: {source}")]
    UnreadableDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[ZSW-3001] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[ZSW-3002] failed to write report output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl ZsError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "ZSW-1001",
            Self::RootNotFound { .. } => "ZSW-2001",
            Self::RootNotDirectory { .. } => "ZSW-2002",
            Self::UnreadableDirectory { .. } => "ZSW-2003",
            Self::Io { .. } => "ZSW-3001",
            Self::Output { .. } => "ZSW-3002",
        }
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_err() -> std::io::Error {
        std::io::Error::other("test")
    }

    #[test]
    fn error_codes_are_unique() {
        let errors: Vec<ZsError> = vec![
            ZsError::InvalidConfig {
                details: String::new(),
            },
            ZsError::RootNotFound {
                path: PathBuf::new(),
            },
            ZsError::RootNotDirectory {
                path: PathBuf::new(),
            },
            ZsError::UnreadableDirectory {
                path: PathBuf::new(),
                source: io_err(),
            },
            ZsError::Io {
                path: PathBuf::new(),
                source: io_err(),
            },
            ZsError::Output { source: io_err() },
        ];

        let codes: Vec<&str> = errors.iter().map(ZsError::code).collect();
        let unique: std::collections::HashSet<&&str> = codes.iter().collect();
        assert_eq!(
            codes.len(),
            unique.len(),
            "error codes must be unique: {codes:?}"
        );
        for code in &codes {
            assert!(code.starts_with("ZSW-"), "code {code} must start with ZSW-");
        }
    }

    #[test]
    fn error_display_includes_code_and_path() {
        let err = ZsError::RootNotFound {
            path: PathBuf::from("/nowhere/at/all"),
        };
        let msg = err.to_string();
        assert!(msg.contains("ZSW-2001"), "display should contain code: {msg}");
        assert!(
            msg.contains("/nowhere/at/all"),
            "display should contain path: {msg}"
        );
    }

    #[test]
    fn io_convenience_constructor() {
        let err = ZsError::io(
            "/tmp/test.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.code(), "ZSW-3001");
        assert!(err.to_string().contains("/tmp/test.txt"));
    }
}
