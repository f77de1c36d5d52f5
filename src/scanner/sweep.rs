//! The sweep: walk -> match -> delete -> report, in one synchronous pass.

use std::time::Instant;

use crate::core::config::SweepConfig;
use crate::core::errors::{Result, ZsError};
use crate::logger::events::{ActivityEvent, ActivitySink, SweepSummary};
use crate::scanner::deletion::{DeletionExecutor, DeletionOutcome, FsRemover, Remover};
use crate::scanner::matcher;
use crate::scanner::walker::{DirectoryWalker, WalkEvent, WalkerConfig};

/// Runs one sweep over a configured root.
#[derive(Debug)]
pub struct Sweeper<R = FsRemover> {
    walker_config: WalkerConfig,
    executor: DeletionExecutor<R>,
}

impl Sweeper<FsRemover> {
    /// Sweeper that really deletes files.
    #[must_use]
    pub fn new(config: &SweepConfig) -> Self {
        Self::with_remover(config, FsRemover)
    }
}

impl<R: Remover> Sweeper<R> {
    /// Sweeper with a custom removal primitive.
    pub fn with_remover(config: &SweepConfig, remover: R) -> Self {
        Self {
            walker_config: WalkerConfig::from(config),
            executor: DeletionExecutor::with_remover(remover),
        }
    }

    /// Walk the tree, delete every Zone.Identifier artifact, and report.
    ///
    /// Per-file failures are recorded and counted but never stop the walk.
    /// Returns an error only for traversal failures (bad root, or an
    /// unreadable subdirectory under `UnreadablePolicy::Abort`) and for sink
    /// write failures. The completion event is recorded only on success.
    pub fn run(&self, sink: &mut dyn ActivitySink) -> Result<SweepSummary> {
        let start = Instant::now();
        let mut walker = DirectoryWalker::new(self.walker_config.clone())?;
        let mut summary = SweepSummary::default();

        for item in walker.by_ref() {
            match item? {
                WalkEvent::File(record) => {
                    let Some(rule) = matcher::classify(&record.name) else {
                        continue;
                    };
                    match self.executor.delete(record.path(), rule) {
                        DeletionOutcome::Deleted { path, rule } => {
                            summary.deleted += 1;
                            emit(sink, ActivityEvent::ArtifactDeleted { path, rule })?;
                        }
                        DeletionOutcome::Failed { path, rule, error } => {
                            summary.failed += 1;
                            emit(
                                sink,
                                ActivityEvent::ArtifactDeletionFailed { path, rule, error },
                            )?;
                        }
                    }
                }
                WalkEvent::Skipped { dir, source } => {
                    emit(
                        sink,
                        ActivityEvent::DirectorySkipped {
                            path: dir,
                            error: source,
                        },
                    )?;
                }
            }
        }

        let stats = walker.stats();
        summary.files_scanned = stats.files_seen;
        summary.dirs_visited = stats.dirs_visited;
        summary.dirs_skipped = stats.dirs_skipped;
        summary.elapsed = start.elapsed();

        emit(sink, ActivityEvent::SweepCompleted { summary })?;
        Ok(summary)
    }
}

fn emit(sink: &mut dyn ActivitySink, event: ActivityEvent) -> Result<()> {
    sink.record(event).map_err(|source| ZsError::Output { source })
}
