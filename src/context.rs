//! Project context resolution for stylecfg.
//!
//! Every command works against a project root plus an optional explicit config
//! path. This module turns those into the document path and the loaded,
//! validated document.

use crate::config::{LoadedConfig, StyleConfig, resolve_config_path};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Resolved inputs for a command.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root; content globs are resolved relative to it.
    pub root: PathBuf,

    /// Config path given on the command line, if any.
    pub explicit_config: Option<PathBuf>,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>, explicit_config: Option<PathBuf>) -> Self {
        Self {
            root: root.into(),
            explicit_config,
        }
    }

    /// Path of the document to load (explicit or discovered).
    pub fn config_path(&self) -> Result<PathBuf> {
        resolve_config_path(&self.root, self.explicit_config.as_deref())
    }

    /// Load and validate the project's document.
    ///
    /// Warnings are returned in the `LoadedConfig`; callers decide whether
    /// to log or print them.
    pub fn load(&self) -> Result<LoadedConfig> {
        let path = self.config_path()?;
        StyleConfig::load(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
