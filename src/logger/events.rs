//! Activity events emitted by a sweep, and the sink trait that receives them.

#![allow(missing_docs)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::scanner::matcher::MatchRule;

/// Final tallies of one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Successful deletions. This is the reported total.
    pub deleted: usize,
    pub failed: usize,
    pub files_scanned: usize,
    pub dirs_visited: usize,
    pub dirs_skipped: usize,
    pub elapsed: Duration,
}

impl SweepSummary {
    /// True when the run had per-file failures or skipped directories.
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        self.failed > 0 || self.dirs_skipped > 0
    }
}

/// Something worth telling the operator about.
#[derive(Debug)]
pub enum ActivityEvent {
    ArtifactDeleted {
        path: PathBuf,
        rule: MatchRule,
    },
    ArtifactDeletionFailed {
        path: PathBuf,
        rule: MatchRule,
        error: io::Error,
    },
    DirectorySkipped {
        path: PathBuf,
        error: io::Error,
    },
    SweepCompleted {
        summary: SweepSummary,
    },
}

/// Destination for activity events.
pub trait ActivitySink {
    fn record(&mut self, event: ActivityEvent) -> io::Result<()>;
}

/// Collects events in memory.
impl ActivitySink for Vec<ActivityEvent> {
    fn record(&mut self, event: ActivityEvent) -> io::Result<()> {
        self.push(event);
        Ok(())
    }
}

impl<S: ActivitySink + ?Sized> ActivitySink for &mut S {
    fn record(&mut self, event: ActivityEvent) -> io::Result<()> {
        (**self).record(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_is_partial_only_with_failures_or_skips() {
        let clean = SweepSummary {
            deleted: 4,
            files_scanned: 10,
            dirs_visited: 2,
            ..SweepSummary::default()
        };
        assert!(!clean.is_partial());
        assert!(
            SweepSummary {
                failed: 1,
                ..clean
            }
            .is_partial()
        );
        assert!(
            SweepSummary {
                dirs_skipped: 1,
                ..clean
            }
            .is_partial()
        );
    }

    #[test]
    fn vec_sink_keeps_events_in_order() {
        let mut sink: Vec<ActivityEvent> = Vec::new();
        sink.record(ActivityEvent::ArtifactDeleted {
            path: PathBuf::from("/a"),
            rule: MatchRule::StreamSuffix,
        })
        .unwrap();
        sink.record(ActivityEvent::SweepCompleted {
            summary: SweepSummary::default(),
        })
        .unwrap();

        assert_eq!(sink.len(), 2);
        assert!(matches!(sink[0], ActivityEvent::ArtifactDeleted { .. }));
        assert!(matches!(sink[1], ActivityEvent::SweepCompleted { .. }));
    }
}
