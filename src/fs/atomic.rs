//! Atomic file writes.
//!
//! Content goes to a temporary file next to the target, is synced, and then
//! renamed over the target, so a config file is never left half-written.
//! On crash a `.{filename}.tmp` file may remain.

use crate::error::{Result, StyleError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to `path`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            StyleError::UserError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    // rename() replaces an existing target on every supported platform
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StyleError::UserError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            StyleError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(target.with_file_name(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let cleanup = |message: String| {
        let _ = fs::remove_file(path);
        StyleError::UserError(message)
    };

    let mut file = File::create(path).map_err(|e| {
        StyleError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;
    file.write_all(content)
        .map_err(|e| cleanup(format!("failed to write temporary file: {}", e)))?;
    file.sync_all()
        .map_err(|e| cleanup(format!("failed to sync temporary file: {}", e)))
}
