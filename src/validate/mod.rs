//! Field-level validation rules for the styling document.
//!
//! Each rule checks a single value and reports a `ValidationError` naming the
//! document path it was given:
//! - Content globs: non-empty, balanced brackets, accepted by the glob compiler
//! - Color values: `#RRGGBB` hex strings
//! - Shade keys: numeric, checked against the known shade scale

pub mod glob;
pub mod hex;
pub mod shade;

pub use glob::{ContentGlob, validate_glob};
pub use hex::{HEX_COLOR_PATTERN, is_hex_color};
pub use shade::{SHADE_SCALE, is_known_shade, parse_shade_key};
