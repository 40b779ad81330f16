//! tscaffold - TypeScript package scaffolding generator
//!
//! A command line tool that assembles a declarative template configuration
//! for a TypeScript/webpack/npm library package and emits the files derived
//! from it, optionally syncing boilerplate from a local .template directory.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod generator;
mod progress;
mod scaffold;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(cli.dir, cli.verbose, args),
        Commands::Sync(args) => commands::sync::run(cli.dir, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
