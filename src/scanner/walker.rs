//! Bottom-up directory walker.
//!
//! Yields one [`VisitRecord`] per non-directory entry under the root, deepest
//! directories first: every subdirectory of a directory is fully walked before
//! that directory's own files come out. Entries are sorted by name within each
//! directory so a walk over an unchanged tree is deterministic.
//!
//! Symlinks are never followed. A link whose target is a directory counts as a
//! directory entry (neither descended nor yielded); any other link is yielded
//! as a file, so the link itself (not its target) is what gets matched.

#![allow(missing_docs)]

use std::ffi::OsString;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::core::config::{SweepConfig, UnreadablePolicy};
use crate::core::errors::{Result, ZsError};

/// Walker configuration derived from `SweepConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    pub root: PathBuf,
    pub unreadable_dirs: UnreadablePolicy,
}

impl From<&SweepConfig> for WalkerConfig {
    fn from(cfg: &SweepConfig) -> Self {
        Self {
            root: cfg.root.clone(),
            unreadable_dirs: cfg.unreadable_dirs,
        }
    }
}

/// One (directory, filename) pair produced by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub dir: PathBuf,
    pub name: OsString,
}

impl VisitRecord {
    /// Full path of the visited file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Item yielded by the walker.
#[derive(Debug)]
pub enum WalkEvent {
    File(VisitRecord),
    /// A subdirectory could not be listed and was skipped (`UnreadablePolicy::Skip`).
    Skipped { dir: PathBuf, source: io::Error },
}

/// Counters kept while walking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Directories listed, root included.
    pub dirs_visited: usize,
    pub dirs_skipped: usize,
    pub files_seen: usize,
}

/// A listed directory whose children are still pending.
///
/// Both vectors are stored in reverse order so `pop` yields names ascending.
#[derive(Debug)]
struct Frame {
    dir: PathBuf,
    subdirs: Vec<PathBuf>,
    files: Vec<OsString>,
}

/// Single-threaded bottom-up walker over one root.
///
/// The root is listed eagerly in [`DirectoryWalker::new`], so a missing or
/// unreadable root fails before any entry is produced.
#[derive(Debug)]
pub struct DirectoryWalker {
    config: WalkerConfig,
    stack: Vec<Frame>,
    stats: WalkStats,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let root = &config.root;
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(ZsError::RootNotDirectory { path: root.clone() }),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ZsError::RootNotFound { path: root.clone() });
            }
            Err(err) => return Err(ZsError::io(root, err)),
        }

        let frame = list_directory(root).map_err(|source| ZsError::UnreadableDirectory {
            path: root.clone(),
            source,
        })?;

        Ok(Self {
            config,
            stack: vec![frame],
            stats: WalkStats {
                dirs_visited: 1,
                ..WalkStats::default()
            },
        })
    }

    #[must_use]
    pub const fn stats(&self) -> WalkStats {
        self.stats
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<WalkEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;

            if let Some(subdir) = frame.subdirs.pop() {
                match list_directory(&subdir) {
                    Ok(child) => {
                        self.stats.dirs_visited += 1;
                        self.stack.push(child);
                        continue;
                    }
                    Err(source) => match self.config.unreadable_dirs {
                        UnreadablePolicy::Skip => {
                            self.stats.dirs_skipped += 1;
                            return Some(Ok(WalkEvent::Skipped {
                                dir: subdir,
                                source,
                            }));
                        }
                        UnreadablePolicy::Abort => {
                            // Nothing more is yielded once the walk has failed.
                            self.stack.clear();
                            return Some(Err(ZsError::UnreadableDirectory {
                                path: subdir,
                                source,
                            }));
                        }
                    },
                }
            }

            if let Some(name) = frame.files.pop() {
                self.stats.files_seen += 1;
                return Some(Ok(WalkEvent::File(VisitRecord {
                    dir: frame.dir.clone(),
                    name,
                })));
            }

            self.stack.pop();
        }
    }
}

/// Kind of a child entry, decided without following symlinks for descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Dir,
    /// Symlink (or other special entry) that resolves to a directory.
    LinkedDir,
    File,
}

fn classify_child(entry: &fs::DirEntry) -> ChildKind {
    let Ok(ft) = entry.file_type() else {
        return ChildKind::File;
    };
    if ft.is_dir() {
        return ChildKind::Dir;
    }
    if ft.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()) {
        return ChildKind::LinkedDir;
    }
    ChildKind::File
}

/// List one directory into a pending frame. Entries that fail mid-listing are
/// dropped.
fn list_directory(dir: &Path) -> io::Result<Frame> {
    let mut subdirs = Vec::new();
    let mut files = Vec::new();

    for entry_result in fs::read_dir(dir)? {
        let Ok(entry) = entry_result else {
            continue;
        };
        match classify_child(&entry) {
            ChildKind::Dir => subdirs.push(entry.file_name()),
            ChildKind::LinkedDir => {}
            ChildKind::File => files.push(entry.file_name()),
        }
    }

    subdirs.sort_unstable_by(|a, b| b.cmp(a));
    files.sort_unstable_by(|a, b| b.cmp(a));

    Ok(Frame {
        dir: dir.to_path_buf(),
        subdirs: subdirs.into_iter().map(|name| dir.join(name)).collect(),
        files,
    })
}
