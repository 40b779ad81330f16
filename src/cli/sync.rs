use clap::Parser;

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Sync the current directory:\n    tscaffold sync\n\n\
                   Preview without writing:\n    tscaffold sync --dry-run")]
pub struct SyncArgs {
    /// Show what would be written and copied without touching anything
    #[arg(long)]
    pub dry_run: bool,
}
