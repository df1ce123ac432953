//! Implementation of the `stylecfg init` command.
//!
//! Writes a starter document at the well-known filename in the project root
//! (or at `--config` when given). The starter lists content globs for
//! html/templ/go sources and overrides a few gray and blue shades.

mod scaffolding;

#[cfg(test)]
mod tests;

use crate::cli::InitArgs;
use crate::context::ProjectContext;
use crate::error::Result;

use scaffolding::*;

/// Execute the `stylecfg init` command.
///
/// Refuses to overwrite an existing config unless `--force` is given.
pub fn cmd_init(ctx: &ProjectContext, args: InitArgs) -> Result<()> {
    let target = target_path(ctx, args.format);

    ensure_no_existing_config(ctx, &target, args.force)?;
    write_starter(&target, args.format)?;

    println!("Created {}", target.display());
    println!();
    println!("Edit `content` to point at your templates, then run `stylecfg check`.");

    Ok(())
}
