//! Non-fatal findings reported while loading a document.

use std::fmt;

/// A problem that does not stop the document from being used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Key outside the known schema; kept for forward compatibility.
    UnknownKey { path: String },
    /// Numeric shade outside the known scale; the entry is kept.
    UnknownShade { family: String, shade: u64 },
    /// The same content glob listed more than once.
    DuplicateGlob { pattern: String },
    /// The same safelist class listed more than once.
    DuplicateSafelist { class: String },
    /// `content` is present but lists no patterns.
    EmptyContent,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::UnknownKey { path } => {
                write!(f, "unknown key '{}' is ignored", path)
            }
            ConfigWarning::UnknownShade { family, shade } => write!(
                f,
                "shade {} of '{}' is not on the standard scale (50-950)",
                shade, family
            ),
            ConfigWarning::DuplicateGlob { pattern } => {
                write!(f, "content glob '{}' is listed more than once", pattern)
            }
            ConfigWarning::DuplicateSafelist { class } => {
                write!(f, "safelist class '{}' is listed more than once", class)
            }
            ConfigWarning::EmptyContent => {
                write!(f, "content is empty; no source files will be scanned")
            }
        }
    }
}
