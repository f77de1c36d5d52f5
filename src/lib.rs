#![forbid(unsafe_code)]

//! zone_sweep: delete Windows `Zone.Identifier` marker files from a directory tree.
//!
//! Files copied off NTFS often drag their "mark of the web" stream along as a
//! sibling file, either `name.ext:Zone.Identifier` or `name.ext.Zone.Identifier`.
//! A sweep walks the tree bottom-up from one root, removes every such file, and
//! reports each attempt plus a final count.
//!
//! # Library usage
//!
//! ```rust,no_run
//! use zone_sweep::prelude::*;
//!
//! let config = SweepConfig::from_current_dir()?;
//! let mut logger = ConsoleLogger::stdio(false);
//! let summary = Sweeper::new(&config).run(&mut logger)?;
//! assert!(summary.failed <= summary.files_scanned);
//! # Ok::<(), ZsError>(())
//! ```

pub mod prelude;

pub mod core;
pub mod logger;
pub mod scanner;
