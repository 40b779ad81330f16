//! Sync command implementation
//!
//! Order matters: the package descriptor is read first so a missing
//! package.json fails before anything is generated or copied.

use std::path::PathBuf;

use console::Style;

use crate::cli::SyncArgs;
use crate::config::{PackageDescriptor, Template};
use crate::error::Result;
use crate::generator::{Pipeline, WebpackNpmPipeline};
use crate::progress::CopyProgress;
use crate::scaffold;

/// Run the sync command
pub fn run(dir: Option<PathBuf>, verbose: bool, args: SyncArgs) -> Result<()> {
    let project_dir = super::resolve_project_dir(dir)?;

    let descriptor = PackageDescriptor::load(&project_dir)?;
    let template = Template::load(&project_dir)?.with_descriptor(&descriptor);
    let pipeline = WebpackNpmPipeline;

    if verbose {
        let inventory = scaffold::template_inventory(&project_dir);
        println!("Template directory holds {} files", inventory.len());
        for path in &inventory {
            println!("  {}", path.display());
        }
    }

    if args.dry_run {
        println!(
            "Would sync {}:",
            Style::new().bold().yellow().apply_to(&template.name)
        );
        for file in pipeline.planned_files() {
            println!("  {file}");
        }
        for name in scaffold::BOILERPLATE_FILES {
            println!("  {name}  (from {}/)", scaffold::TEMPLATE_DIR);
        }
        return Ok(());
    }

    let written = pipeline.generate(&template, &project_dir)?;

    let progress = CopyProgress::new(scaffold::BOILERPLATE_FILES.len() as u64);
    let copied = match scaffold::copy_boilerplate(&project_dir, Some(&progress)) {
        Ok(copied) => {
            progress.finish();
            copied
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    println!(
        "Synced {}: {} generated, {} copied",
        Style::new()
            .bold()
            .yellow()
            .apply_to(format!("{}@{}", template.name, template.version)),
        written.len(),
        copied.len()
    );
    if verbose {
        for path in written.iter().chain(copied.iter()) {
            println!("  {}", path.display());
        }
    }

    Ok(())
}
