//! Hex color validation.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern every color override value must match.
pub const HEX_COLOR_PATTERN: &str = r"^#[0-9A-Fa-f]{6}$";

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("hex color pattern compiles"));

/// Check whether `value` is a `#RRGGBB` color string.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}
