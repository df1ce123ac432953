//! Content source discovery.
//!
//! Compiles the document's content globs and walks a project tree to find the
//! files the styling compiler would scan for class names.
//!
//! - Leading `./` is stripped; such patterns are relative to the project root
//! - Patterns starting with `/` are matched against absolute paths
//! - Patterns starting with `!` exclude files the other patterns selected
//! - `.git` and `node_modules` directories are never descended into

use crate::error::{Result, StyleError};
use crate::validate::{ContentGlob, validate_glob};
use globset::{GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

#[cfg(test)]
mod tests;

/// Directory names skipped while walking.
const SKIPPED_DIRS: &[&str] = &[".git", "node_modules"];

/// A file selected by at least one content glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    /// Root-relative path with forward slashes.
    pub relative: String,
    /// Absolute path below the canonicalized project root.
    pub absolute: PathBuf,
    /// Indices into the matcher's patterns that selected this file.
    pub matched_by: Vec<usize>,
}

/// Globs split by the kind of path they match, with their content indices.
struct PatternSet {
    relative: GlobSet,
    relative_index: Vec<usize>,
    absolute: GlobSet,
    absolute_index: Vec<usize>,
}

impl PatternSet {
    fn build(entries: &[(usize, ContentGlob)]) -> Result<Self> {
        let mut relative = GlobSetBuilder::new();
        let mut relative_index = Vec::new();
        let mut absolute = GlobSetBuilder::new();
        let mut absolute_index = Vec::new();

        for (i, entry) in entries {
            if entry.absolute {
                absolute.add(entry.glob.clone());
                absolute_index.push(*i);
            } else {
                relative.add(entry.glob.clone());
                relative_index.push(*i);
            }
        }

        let build = |builder: GlobSetBuilder| {
            builder
                .build()
                .map_err(|e| StyleError::UserError(format!("failed to compile content globs: {}", e)))
        };

        Ok(Self {
            relative: build(relative)?,
            relative_index,
            absolute: build(absolute)?,
            absolute_index,
        })
    }

    fn matches(&self, relative: &str, absolute: &str) -> Vec<usize> {
        let mut hits: Vec<usize> = self
            .relative
            .matches(relative)
            .into_iter()
            .map(|m| self.relative_index[m])
            .collect();
        hits.extend(
            self.absolute
                .matches(absolute)
                .into_iter()
                .map(|m| self.absolute_index[m]),
        );
        hits.sort_unstable();
        hits
    }
}

/// Compiled content globs.
pub struct ContentMatcher {
    patterns: Vec<String>,
    include: PatternSet,
    exclude: PatternSet,
}

impl std::fmt::Debug for ContentMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentMatcher")
            .field("patterns", &self.patterns)
            .finish()
    }
}

impl ContentMatcher {
    /// Compile `patterns` (as found in `content`).
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for (i, pattern) in patterns.iter().enumerate() {
            let entry = validate_glob(&format!("content[{}]", i), pattern)?;
            if entry.negated {
                exclude.push((i, entry));
            } else {
                include.push((i, entry));
            }
        }

        Ok(Self {
            patterns: patterns.to_vec(),
            include: PatternSet::build(&include)?,
            exclude: PatternSet::build(&exclude)?,
        })
    }

    /// Indices of the patterns selecting a file, empty when none does or an
    /// exclusion matches.
    ///
    /// `relative` uses forward slashes; `absolute` is the full path.
    pub fn matching_patterns(&self, relative: &str, absolute: &Path) -> Vec<usize> {
        let absolute = normalize_path(&absolute.to_string_lossy());

        if !self.exclude.matches(relative, &absolute).is_empty() {
            return Vec::new();
        }
        self.include.matches(relative, &absolute)
    }

    /// Walk `root` and return every matching file, sorted by path.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<ContentFile>> {
        let root = root.canonicalize().map_err(|e| {
            StyleError::UserError(format!(
                "failed to resolve project root '{}': {}",
                root.display(),
                e
            ))
        })?;

        let mut files = Vec::new();
        let walker = WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_skipped_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&root) else {
                continue;
            };
            let relative = normalize_path(&relative.to_string_lossy());

            let matched_by = self.matching_patterns(&relative, entry.path());
            if !matched_by.is_empty() {
                files.push(ContentFile {
                    relative,
                    absolute: entry.into_path(),
                    matched_by,
                });
            }
        }

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        tracing::debug!(root = %root.display(), count = files.len(), "collected content files");
        Ok(files)
    }

    /// Inclusion patterns that selected none of `files`.
    pub fn unmatched_patterns(&self, files: &[ContentFile]) -> Vec<&str> {
        self.patterns
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.starts_with('!'))
            .filter(|(i, _)| !files.iter().any(|f| f.matched_by.contains(i)))
            .map(|(_, p)| p.as_str())
            .collect()
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

/// Normalize a file path to use forward slashes.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
