//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - generate: Generate command arguments
//! - sync: Sync command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;
pub mod sync;

pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use sync::SyncArgs;

/// tscaffold - TypeScript package scaffolding generator
#[derive(Parser, Debug)]
#[command(
    name = "tscaffold",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffolding generator for TypeScript/webpack/npm library packages",
    long_about = "Scaffolding generator for TypeScript/webpack/npm library packages.\n\n\
                  tscaffold assembles a declarative template configuration (package identity, \
                  dependencies, bundle entry points) and emits the files derived from it, \
                  optionally syncing boilerplate from a local .template directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  tscaffold generate                 \x1b[90m# Generate from tscaffold.yaml\x1b[0m\n   \
                  tscaffold generate --dry-run       \x1b[90m# Show what would be written\x1b[0m\n   \
                  tscaffold sync                     \x1b[90m# Re-read package.json and copy boilerplate\x1b[0m\n   \
                  tscaffold sync -d ./my-package     \x1b[90m# Sync a package in another directory\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'd', global = true, env = "TSCAFFOLD_DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate package files from tscaffold.yaml
    Generate(GenerateArgs),

    /// Sync identity from package.json and copy boilerplate from .template/
    Sync(SyncArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
