//! Starter document and file creation for the init command.

use crate::config::{CONFIG_FILENAMES, DocumentFormat, StyleConfig, discovery::find_candidates};
use crate::context::ProjectContext;
use crate::error::{Result, StyleError};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

/// Starter document written by `stylecfg init`.
pub(super) const STARTER_YAML: &str = r##"# Files scanned for utility class names.
content:
  - "/**/*.html"
  - "./**/*.templ"
  - "./**/*.go"

# Classes kept even when no scanned file uses them.
safelist: []

theme:
  extend:
    colors:
      gray:
        700: "#374151" # dark mode sidebar background
        800: "#1f2937" # dark mode body background
      blue:
        400: "#60a5fa" # dark mode accent
        600: "#2563eb" # light mode accent
"##;

/// Where the new document goes.
pub(super) fn target_path(ctx: &ProjectContext, format: DocumentFormat) -> PathBuf {
    match &ctx.explicit_config {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => ctx.root.join(path),
        None => ctx.root.join(default_filename(format)),
    }
}

fn default_filename(format: DocumentFormat) -> &'static str {
    match format {
        DocumentFormat::Yaml => CONFIG_FILENAMES[0],
        DocumentFormat::Json => CONFIG_FILENAMES[2],
    }
}

/// Fail if the target or any other well-known config already exists.
pub(super) fn ensure_no_existing_config(
    ctx: &ProjectContext,
    target: &Path,
    force: bool,
) -> Result<()> {
    if force {
        return Ok(());
    }

    let mut existing = find_candidates(&ctx.root);
    if target.is_file() && !existing.iter().any(|p| p == target) {
        existing.insert(0, target.to_path_buf());
    }

    if let Some(path) = existing.first() {
        return Err(StyleError::UserError(format!(
            "config already exists at '{}'.\n\
             Fix: edit it directly, or re-run with --force to overwrite.",
            path.display()
        )));
    }

    Ok(())
}

/// Render the starter document in `format`.
pub(super) fn starter_document(format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Yaml => Ok(STARTER_YAML.to_string()),
        DocumentFormat::Json => StyleConfig::from_yaml(STARTER_YAML)?.config.to_json(),
    }
}

/// Write the starter document to `target`.
pub(super) fn write_starter(target: &Path, format: DocumentFormat) -> Result<()> {
    let content = starter_document(format)?;
    atomic_write_file(target, &content)?;
    tracing::info!(path = %target.display(), ?format, "wrote starter config");
    Ok(())
}
