//! Command implementations for stylecfg.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command builds its output as a string first so it
//! can be tested without capturing stdout.

mod check;
mod files;
mod init;
mod print;
mod resolve;

use crate::cli::{Cli, Command};
use crate::context::ProjectContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ProjectContext::new(cli.dir, cli.config);

    match cli.command {
        Command::Check => check::cmd_check(&ctx),
        Command::Print(args) => print::cmd_print(&ctx, args),
        Command::Resolve(args) => resolve::cmd_resolve(&ctx, args),
        Command::Files(args) => files::cmd_files(&ctx, args),
        Command::Init(args) => init::cmd_init(&ctx, args),
    }
}
