//! Validated document types.

use crate::error::{Result, StyleError};
use crate::validate::is_hex_color;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use super::warnings::ConfigWarning;

/// Color overrides keyed by family name, then shade.
pub type ColorOverrides = BTreeMap<String, BTreeMap<Shade, HexColor>>;

/// A numeric shade key such as `50`, `400` or `950`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Shade(pub u64);

impl Shade {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `#RRGGBB` color string.
///
/// The original casing is kept so that serializing a loaded document
/// reproduces the author's values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parse a color value found at `path`.
    pub fn parse(path: &str, value: &str) -> Result<Self> {
        if is_hex_color(value) {
            Ok(HexColor(value.to_string()))
        } else {
            Err(StyleError::validation(
                path,
                format!("expected a #RRGGBB hex color (found '{}')", value),
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated styling document.
///
/// Serializes back into the file shape:
/// `{ content, safelist, theme: { extend: { colors } } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleConfig {
    /// Glob patterns of files scanned for class names.
    pub content: Vec<String>,

    /// Class names kept regardless of detected usage.
    pub safelist: Vec<String>,

    /// `theme.extend.colors` overrides.
    pub colors: ColorOverrides,
}

#[derive(Serialize)]
struct DocumentView<'a> {
    content: &'a [String],
    safelist: &'a [String],
    theme: ThemeView<'a>,
}

#[derive(Serialize)]
struct ThemeView<'a> {
    extend: ExtendView<'a>,
}

#[derive(Serialize)]
struct ExtendView<'a> {
    colors: &'a ColorOverrides,
}

impl Serialize for StyleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        DocumentView {
            content: &self.content,
            safelist: &self.safelist,
            theme: ThemeView {
                extend: ExtendView {
                    colors: &self.colors,
                },
            },
        }
        .serialize(serializer)
    }
}

/// Result of load-and-validate: the document plus non-fatal findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: StyleConfig,
    pub warnings: Vec<ConfigWarning>,
    /// File the document was read from, if any.
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Emit every warning through `tracing`.
    pub fn log_warnings(&self) {
        let origin = self
            .source
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());
        for warning in &self.warnings {
            tracing::warn!(source = %origin, "{}", warning);
        }
    }
}
