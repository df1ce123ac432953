//! Implementation of the `stylecfg print` command.

use crate::cli::PrintArgs;
use crate::context::ProjectContext;
use crate::error::Result;

/// Execute the `stylecfg print` command.
///
/// Prints the validated document in the requested format. Unknown keys are
/// not carried into the output.
pub fn cmd_print(ctx: &ProjectContext, args: PrintArgs) -> Result<()> {
    let loaded = ctx.load()?;
    loaded.log_warnings();

    print!("{}", loaded.config.render(args.format)?);
    Ok(())
}
