//! CLI argument parsing for stylecfg.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::DocumentFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// stylecfg: load, validate and inspect a utility-first styling config.
///
/// The document lists content globs to scan for class names, a safelist,
/// and color overrides under `theme.extend.colors`.
#[derive(Parser, Debug)]
#[command(name = "stylecfg")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root (where the config is discovered and globs are resolved).
    #[arg(short = 'C', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Explicit config file instead of discovering stylecfg.{yaml,yml,json}.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for stylecfg.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load and validate the config.
    ///
    /// Exits non-zero on schema or validation errors; warnings are listed
    /// but do not fail the check.
    Check,

    /// Print the validated, normalized config.
    Print(PrintArgs),

    /// Resolve a color family (and optionally a shade).
    ///
    /// Overrides from the config take precedence over the base palette.
    Resolve(ResolveArgs),

    /// List project files selected by the content globs.
    Files(FilesArgs),

    /// Write a starter config into the project root.
    Init(InitArgs),
}

/// Arguments for the `print` command.
#[derive(Parser, Debug)]
pub struct PrintArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: DocumentFormat,
}

/// Arguments for the `resolve` command.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Color family name (e.g. gray).
    pub family: String,

    /// Shade key (e.g. 800). Omit to list the whole scale.
    pub shade: Option<u64>,
}

/// Arguments for the `files` command.
#[derive(Parser, Debug)]
pub struct FilesArgs {
    /// Print absolute paths instead of root-relative ones.
    #[arg(long)]
    pub absolute: bool,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Format of the file to create.
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: DocumentFormat,

    /// Overwrite an existing config.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
