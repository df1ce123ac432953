//! Implementation of the `stylecfg resolve` command.
//!
//! Looks colors up with the document's overrides layered over the base
//! palette and reports which layer supplied each value.

use crate::cli::ResolveArgs;
use crate::config::Shade;
use crate::context::ProjectContext;
use crate::error::{Result, StyleError};
use crate::palette::{Palette, ResolvedColor};

/// Execute the `stylecfg resolve` command.
pub fn cmd_resolve(ctx: &ProjectContext, args: ResolveArgs) -> Result<()> {
    let loaded = ctx.load()?;
    loaded.log_warnings();

    let palette = Palette::builtin().with_overrides(&loaded.config.colors);
    print!("{}", render_resolve(&palette, &args.family, args.shade.map(Shade))?);
    Ok(())
}

pub(super) fn render_resolve(
    palette: &Palette<'_>,
    family: &str,
    shade: Option<Shade>,
) -> Result<String> {
    if !palette.has_family(family) {
        return Err(StyleError::UserError(format!(
            "unknown color family '{}'. Known families: {}",
            family,
            palette.families().join(", ")
        )));
    }

    match shade {
        Some(shade) => {
            let color = palette.resolve(family, shade).ok_or_else(|| {
                StyleError::UserError(format!(
                    "no color defined for {}-{} in the config or the base palette",
                    family, shade
                ))
            })?;
            Ok(format_line(family, shade, &color))
        }
        None => Ok(palette
            .family_scale(family)
            .iter()
            .map(|(shade, color)| format_line(family, *shade, color))
            .collect()),
    }
}

fn format_line(family: &str, shade: Shade, color: &ResolvedColor) -> String {
    let (r, g, b) = color.hex.rgb();
    format!(
        "{}-{}  {}  rgb({}, {}, {})  ({})\n",
        family, shade, color.hex, r, g, b, color.source
    )
}
