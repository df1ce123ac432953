//! Walk a parsed document tree and build a validated `StyleConfig`.
//!
//! The document is first decoded into `serde_yaml::Value` (JSON input is
//! converted), then checked field by field so every error can name the exact
//! path that caused it.

use super::model::{ColorOverrides, HexColor, LoadedConfig, Shade, StyleConfig};
use super::warnings::ConfigWarning;
use crate::error::{Result, StyleError};
use crate::validate::shade::describe_key;
use crate::validate::{is_known_shade, parse_shade_key, validate_glob};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::collections::{BTreeMap, HashSet};

const COLORS_PATH: &str = "theme.extend.colors";

/// Top level of the document. Unknown keys land in `extra`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    content: Option<Value>,
    safelist: Option<Value>,
    theme: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawTheme {
    extend: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawExtend {
    colors: Option<Value>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Validate a decoded document tree.
pub(crate) fn parse_document(root: Value) -> Result<LoadedConfig> {
    let mut warnings = Vec::new();

    let raw: RawDocument = decode_mapping("document root", root)?;
    warn_unknown_keys(&mut warnings, "", &raw.extra);

    let content = match raw.content {
        Some(value) => string_list("content", value)?,
        None => {
            return Err(StyleError::SchemaError(
                "missing required key 'content'".to_string(),
            ));
        }
    };
    check_content(&content, &mut warnings)?;

    let safelist = match raw.safelist {
        Some(value) => string_list("safelist", value)?,
        None => Vec::new(),
    };
    check_safelist(&safelist, &mut warnings)?;

    let colors = match raw.theme {
        Some(theme) => parse_theme(theme, &mut warnings)?,
        None => ColorOverrides::new(),
    };

    Ok(LoadedConfig {
        config: StyleConfig {
            content,
            safelist,
            colors,
        },
        warnings,
        source: None,
    })
}

/// Decode a mapping node into one of the raw structs.
fn decode_mapping<T>(path: &str, value: Value) -> Result<T>
where
    T: Default + DeserializeOwned,
{
    match value {
        Value::Null => Ok(T::default()),
        Value::Mapping(_) => serde_yaml::from_value(value)
            .map_err(|e| StyleError::SchemaError(format!("'{}': {}", path, e))),
        other => Err(StyleError::SchemaError(format!(
            "'{}' must be a mapping (found {})",
            path,
            type_name(&other)
        ))),
    }
}

fn warn_unknown_keys(
    warnings: &mut Vec<ConfigWarning>,
    prefix: &str,
    extra: &BTreeMap<String, Value>,
) {
    for key in extra.keys() {
        warnings.push(ConfigWarning::UnknownKey {
            path: format!("{}{}", prefix, key),
        });
    }
}

fn string_list(path: &str, value: Value) -> Result<Vec<String>> {
    let Value::Sequence(items) = value else {
        return Err(StyleError::SchemaError(format!(
            "'{}' must be a sequence of strings (found {})",
            path,
            type_name(&value)
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(StyleError::SchemaError(format!(
                "'{}[{}]' must be a string (found {})",
                path,
                i,
                type_name(&other)
            ))),
        })
        .collect()
}

fn check_content(content: &[String], warnings: &mut Vec<ConfigWarning>) -> Result<()> {
    if content.is_empty() {
        warnings.push(ConfigWarning::EmptyContent);
    }

    let mut seen = HashSet::new();
    for (i, pattern) in content.iter().enumerate() {
        validate_glob(&format!("content[{}]", i), pattern)?;
        if !seen.insert(pattern.as_str()) {
            warnings.push(ConfigWarning::DuplicateGlob {
                pattern: pattern.clone(),
            });
        }
    }
    Ok(())
}

fn check_safelist(safelist: &[String], warnings: &mut Vec<ConfigWarning>) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, class) in safelist.iter().enumerate() {
        if class.trim().is_empty() {
            return Err(StyleError::validation(
                format!("safelist[{}]", i),
                "class name must be non-empty",
            ));
        }
        if !seen.insert(class.as_str()) {
            warnings.push(ConfigWarning::DuplicateSafelist {
                class: class.clone(),
            });
        }
    }
    Ok(())
}

fn parse_theme(theme: Value, warnings: &mut Vec<ConfigWarning>) -> Result<ColorOverrides> {
    let theme: RawTheme = decode_mapping("theme", theme)?;
    warn_unknown_keys(warnings, "theme.", &theme.extra);

    let Some(extend) = theme.extend else {
        return Ok(ColorOverrides::new());
    };
    let extend: RawExtend = decode_mapping("theme.extend", extend)?;
    warn_unknown_keys(warnings, "theme.extend.", &extend.extra);

    match extend.colors {
        Some(colors) => parse_colors(colors, warnings),
        None => Ok(ColorOverrides::new()),
    }
}

fn parse_colors(colors: Value, warnings: &mut Vec<ConfigWarning>) -> Result<ColorOverrides> {
    let families = match colors {
        Value::Null => return Ok(ColorOverrides::new()),
        Value::Mapping(m) => m,
        other => {
            return Err(StyleError::SchemaError(format!(
                "'{}' must be a mapping (found {})",
                COLORS_PATH,
                type_name(&other)
            )));
        }
    };

    let mut overrides = ColorOverrides::new();
    for (key, scale) in families {
        let Value::String(family) = key else {
            return Err(StyleError::SchemaError(format!(
                "color family names under '{}' must be strings (found {})",
                COLORS_PATH,
                describe_key(&key)
            )));
        };
        if family.trim().is_empty() {
            return Err(StyleError::validation(
                COLORS_PATH,
                "color family name must be non-empty",
            ));
        }

        let family_path = format!("{}.{}", COLORS_PATH, family);
        let Value::Mapping(scale) = scale else {
            return Err(StyleError::SchemaError(format!(
                "'{}' must be a mapping of shade to color (found {})",
                family_path,
                type_name(&scale)
            )));
        };

        let shades = parse_scale(&family, &family_path, scale, warnings)?;
        overrides.insert(family, shades);
    }

    Ok(overrides)
}

fn parse_scale(
    family: &str,
    family_path: &str,
    scale: Mapping,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<BTreeMap<Shade, HexColor>> {
    let mut shades = BTreeMap::new();

    for (key, value) in scale {
        let entry_path = format!("{}.{}", family_path, describe_key(&key));
        let shade = Shade(parse_shade_key(&entry_path, &key)?);

        let Value::String(raw_hex) = value else {
            return Err(StyleError::SchemaError(format!(
                "'{}' must be a color string (found {})",
                entry_path,
                type_name(&value)
            )));
        };
        let hex = HexColor::parse(&entry_path, &raw_hex)?;

        if !is_known_shade(shade.value()) {
            warnings.push(ConfigWarning::UnknownShade {
                family: family.to_string(),
                shade: shade.value(),
            });
        }

        if shades.insert(shade, hex).is_some() {
            return Err(StyleError::validation(
                entry_path,
                format!("shade {} is defined more than once", shade),
            ));
        }
    }

    Ok(shades)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
