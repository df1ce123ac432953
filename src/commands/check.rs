//! Implementation of the `stylecfg check` command.

use crate::config::LoadedConfig;
use crate::context::ProjectContext;
use crate::error::Result;

/// Execute the `stylecfg check` command.
///
/// Any schema or validation error aborts with the mapped exit code before
/// anything is printed.
pub fn cmd_check(ctx: &ProjectContext) -> Result<()> {
    let loaded = ctx.load()?;
    print!("{}", render_check(&loaded));
    Ok(())
}

pub(super) fn render_check(loaded: &LoadedConfig) -> String {
    let source = loaded
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<input>".to_string());

    let config = &loaded.config;
    let shade_count: usize = config.colors.values().map(|scale| scale.len()).sum();

    let mut out = format!("OK: {}\n", source);
    out.push_str(&format!(
        "  {} content glob(s), {} safelisted class(es), {} color override(s) in {} famil{}\n",
        config.content.len(),
        config.safelist.len(),
        shade_count,
        config.colors.len(),
        if config.colors.len() == 1 { "y" } else { "ies" }
    ));

    for warning in &loaded.warnings {
        out.push_str(&format!("warning: {}\n", warning));
    }
    out.push_str(&format!("{} warning(s)\n", loaded.warnings.len()));

    out
}
