//! Styling configuration document.
//!
//! This module defines the validated `StyleConfig` and the load-and-validate
//! operation that produces it from `stylecfg.yaml` / `stylecfg.json`. Unknown
//! keys are tolerated for forward compatibility and reported as warnings.

pub mod discovery;
mod format;
mod model;
mod operations;
mod parse;
mod warnings;


pub use discovery::{CONFIG_FILENAMES, discover, resolve_config_path};
pub use format::DocumentFormat;
pub use model::{ColorOverrides, HexColor, LoadedConfig, Shade, StyleConfig};
pub use warnings::ConfigWarning;
