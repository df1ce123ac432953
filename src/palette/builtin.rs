//! Base palette the document's overrides are layered over.

use crate::config::{ColorOverrides, HexColor, Shade};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const SHADES: [u64; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

const GRAY: [&str; 11] = [
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827", "#030712",
];

const BLUE: [&str; 11] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a", "#172554",
];

const RED: [&str; 11] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d", "#450a0a",
];

const GREEN: [&str; 11] = [
    "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e", "#16a34a", "#15803d",
    "#166534", "#14532d", "#052e16",
];

static BUILTIN: LazyLock<ColorOverrides> = LazyLock::new(|| {
    [("gray", GRAY), ("blue", BLUE), ("red", RED), ("green", GREEN)]
        .into_iter()
        .map(|(family, values)| {
            let scale: BTreeMap<Shade, HexColor> = SHADES
                .iter()
                .zip(values)
                .filter_map(|(shade, value)| {
                    HexColor::parse(family, value)
                        .ok()
                        .map(|hex| (Shade(*shade), hex))
                })
                .collect();
            (family.to_string(), scale)
        })
        .collect()
});

/// The base palette: `gray`, `blue`, `red` and `green` across 50-950.
pub fn builtin_palette() -> &'static ColorOverrides {
    &BUILTIN
}
