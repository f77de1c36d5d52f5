//! Sweep-root path resolution.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::core::errors::{Result, ZsError};

/// The process working directory, resolved to an absolute path.
pub fn current_root() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|source| ZsError::io(".", source))?;
    Ok(resolve_against(&cwd, &cwd))
}

/// Resolve `path` relative to `base` into an absolute path.
///
/// Existing paths are canonicalized so the reported deletion paths match what
/// the filesystem calls them. Paths that do not exist are normalized
/// syntactically, which lets root validation report the path the caller meant.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    if let Ok(canonical) = std::fs::canonicalize(&absolute) {
        return canonical;
    }

    normalize_syntactic(&absolute)
}

fn normalize_syntactic(path: &Path) -> PathBuf {
    let mut components = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir | Component::Normal(_) => {
                components.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if let Some(Component::Normal(_)) = components.last() {
                    components.pop();
                }
            }
        }
    }
    components.into_iter().collect()
}
