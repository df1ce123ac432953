//! Locating the styling document in a project root.

use crate::error::{Result, StyleError};
use std::path::{Path, PathBuf};

/// Well-known document filenames, in precedence order.
pub const CONFIG_FILENAMES: &[&str] = &["stylecfg.yaml", "stylecfg.yml", "stylecfg.json"];

/// Return every well-known document present in `root`, in precedence order.
pub fn find_candidates(root: &Path) -> Vec<PathBuf> {
    CONFIG_FILENAMES
        .iter()
        .map(|name| root.join(name))
        .filter(|path| path.is_file())
        .collect()
}

/// Find the document to load for the project at `root`.
///
/// The first existing well-known file wins. If several exist, the others are
/// reported with a warning.
pub fn discover(root: &Path) -> Result<PathBuf> {
    let mut candidates = find_candidates(root).into_iter();

    let Some(found) = candidates.next() else {
        return Err(StyleError::UserError(format!(
            "no styling config found in '{}' (looked for {}).\n\
             Fix: run `stylecfg init` or pass --config <path>.",
            root.display(),
            CONFIG_FILENAMES.join(", ")
        )));
    };

    for ignored in candidates {
        tracing::warn!(
            using = %found.display(),
            ignored = %ignored.display(),
            "multiple styling configs found"
        );
    }

    tracing::debug!(path = %found.display(), "discovered styling config");
    Ok(found)
}

/// Use `explicit` when given, otherwise discover a document in `root`.
///
/// A relative explicit path is taken relative to `root`.
pub fn resolve_config_path(root: &Path, explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.is_absolute() => Ok(path.to_path_buf()),
        Some(path) => Ok(root.join(path)),
        None => discover(root),
    }
}
