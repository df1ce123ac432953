//! Color resolution with document overrides layered over a base palette.
//!
//! An override for a family/shade pair shadows the base entry; every other
//! pair falls back to the base palette. Families that exist only in the
//! document are resolvable through the override layer alone.

mod builtin;


use crate::config::{ColorOverrides, HexColor, Shade};
use std::collections::BTreeMap;
use std::fmt;

pub use builtin::builtin_palette;

/// Where a resolved color came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSource {
    /// Defined in the document's `theme.extend.colors`.
    Override,
    /// Taken from the base palette.
    Builtin,
}

impl fmt::Display for ColorSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSource::Override => f.write_str("override"),
            ColorSource::Builtin => f.write_str("builtin"),
        }
    }
}

/// A color value together with the layer that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    pub hex: HexColor,
    pub source: ColorSource,
}

/// Layered palette: base colors plus document overrides.
#[derive(Debug, Clone)]
pub struct Palette<'a> {
    base: &'a ColorOverrides,
    overrides: Option<&'a ColorOverrides>,
}

impl<'a> Palette<'a> {
    /// A palette over `base` with no overrides applied.
    pub fn new(base: &'a ColorOverrides) -> Self {
        Self {
            base,
            overrides: None,
        }
    }

    /// The standard base palette.
    pub fn builtin() -> Palette<'static> {
        Palette::new(builtin_palette())
    }

    /// Layer `overrides` over this palette.
    pub fn with_overrides(mut self, overrides: &'a ColorOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Resolve a single family/shade pair.
    pub fn resolve(&self, family: &str, shade: Shade) -> Option<ResolvedColor> {
        if let Some(hex) = self
            .overrides
            .and_then(|o| o.get(family))
            .and_then(|scale| scale.get(&shade))
        {
            return Some(ResolvedColor {
                hex: hex.clone(),
                source: ColorSource::Override,
            });
        }

        self.base
            .get(family)
            .and_then(|scale| scale.get(&shade))
            .map(|hex| ResolvedColor {
                hex: hex.clone(),
                source: ColorSource::Builtin,
            })
    }

    /// Every shade of `family` from both layers, ordered by shade.
    pub fn family_scale(&self, family: &str) -> Vec<(Shade, ResolvedColor)> {
        let mut merged: BTreeMap<Shade, ResolvedColor> = BTreeMap::new();

        if let Some(scale) = self.base.get(family) {
            for (shade, hex) in scale {
                merged.insert(
                    *shade,
                    ResolvedColor {
                        hex: hex.clone(),
                        source: ColorSource::Builtin,
                    },
                );
            }
        }

        if let Some(scale) = self.overrides.and_then(|o| o.get(family)) {
            for (shade, hex) in scale {
                merged.insert(
                    *shade,
                    ResolvedColor {
                        hex: hex.clone(),
                        source: ColorSource::Override,
                    },
                );
            }
        }

        merged.into_iter().collect()
    }

    /// Whether either layer defines `family`.
    pub fn has_family(&self, family: &str) -> bool {
        self.base.contains_key(family) || self.overrides.is_some_and(|o| o.contains_key(family))
    }

    /// Family names from both layers, sorted and deduplicated.
    pub fn families(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.base.keys().map(String::as_str).collect();
        if let Some(overrides) = self.overrides {
            names.extend(overrides.keys().map(String::as_str));
        }
        names.sort_unstable();
        names.dedup();
        names
    }
}
