//! Generate command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::GenerateArgs;
use crate::config::Template;
use crate::error::Result;
use crate::generator::{Pipeline, WebpackNpmPipeline};

/// Run the generate command
pub fn run(dir: Option<PathBuf>, verbose: bool, args: GenerateArgs) -> Result<()> {
    let project_dir = super::resolve_project_dir(dir)?;
    let template = Template::load(&project_dir)?;
    let pipeline = WebpackNpmPipeline;

    if args.dry_run {
        println!(
            "Would generate for {}:",
            Style::new().bold().yellow().apply_to(&template.name)
        );
        for file in pipeline.planned_files() {
            println!("  {file}");
        }
        return Ok(());
    }

    let written = pipeline.generate(&template, &project_dir)?;

    println!(
        "Generated {} for {}",
        Style::new().bold().apply_to(format!("{} files", written.len())),
        Style::new()
            .bold()
            .yellow()
            .apply_to(format!("{}@{}", template.name, template.version))
    );
    if verbose {
        for path in &written {
            println!("  {}", path.display());
        }
    }

    Ok(())
}
