//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use zone_sweep::prelude::*;
//! ```

// Core
pub use crate::core::config::{SweepConfig, UnreadablePolicy};
pub use crate::core::errors::{Result, ZsError};

// Logger
pub use crate::logger::console::ConsoleLogger;
pub use crate::logger::events::{ActivityEvent, ActivitySink, SweepSummary};

// Scanner
pub use crate::scanner::deletion::{DeletionExecutor, DeletionOutcome, FsRemover, Remover};
pub use crate::scanner::matcher::{MatchRule, classify, is_zone_identifier};
pub use crate::scanner::sweep::Sweeper;
pub use crate::scanner::walker::{DirectoryWalker, VisitRecord, WalkEvent, WalkerConfig};
