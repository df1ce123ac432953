//! Shade key parsing and the known shade scale.

use crate::error::{Result, StyleError};
use serde_yaml::Value;

/// Shade keys the consuming styling compiler defines for every color family.
pub const SHADE_SCALE: &[u64] = &[50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Whether `shade` is part of the known scale.
pub fn is_known_shade(shade: u64) -> bool {
    SHADE_SCALE.contains(&shade)
}

/// Parse a shade key from a document mapping key.
///
/// YAML keys such as `700` arrive as integers, JSON keys as strings; both are
/// accepted as long as they are a plain non-negative integer. Whether the
/// shade is on the known scale is checked separately.
pub fn parse_shade_key(path: &str, key: &Value) -> Result<u64> {
    match key {
        Value::Number(n) => n.as_u64().ok_or_else(|| {
            StyleError::validation(
                path,
                format!("shade key must be a non-negative integer (found {})", n),
            )
        }),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<u64>().map_err(|_| {
                StyleError::validation(path, format!("shade key {} is out of range", s))
            })
        }
        _ => Err(StyleError::validation(
            path,
            format!("shade key must be numeric (found {})", describe_key(key)),
        )),
    }
}

/// Render a mapping key for use in paths and messages.
pub(crate) fn describe_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => "<complex key>".to_string(),
    }
}
