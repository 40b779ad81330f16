use clap::Parser;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Generate in the current directory:\n    tscaffold generate\n\n\
                   Generate another project:\n    tscaffold generate --dir ./my-package\n\n\
                   Preview without writing:\n    tscaffold generate --dry-run")]
pub struct GenerateArgs {
    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,
}
