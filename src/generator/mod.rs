//! Generation pipeline for TypeScript/webpack/npm packages
//!
//! The pipeline consumes an assembled [`Template`] and emits the files that
//! are fully determined by it. Emission is plain serialization of the
//! configuration; there is no template language and no substitution grammar.

pub mod package_json;
pub mod setup;

use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::config::Template;
use crate::error::Result;

/// Path of the generated setup module, relative to the project root
pub const AUTO_GENERATED_FILE: &str = "src/auto-generated.ts";

/// A generation pipeline emitting files derived from a template configuration
pub trait Pipeline {
    /// Files this pipeline emits, relative to the project root
    fn planned_files(&self) -> Vec<&'static str>;

    /// Emit all derived files into the project directory
    fn generate(&self, template: &Template, project_dir: &Path) -> Result<Vec<PathBuf>>;
}

/// Production pipeline for webpack/npm library packages
#[derive(Debug, Default)]
pub struct WebpackNpmPipeline;

impl Pipeline for WebpackNpmPipeline {
    fn planned_files(&self) -> Vec<&'static str> {
        vec![AUTO_GENERATED_FILE, package_json::PACKAGE_JSON_FILE]
    }

    fn generate(&self, template: &Template, project_dir: &Path) -> Result<Vec<PathBuf>> {
        let artifact = setup::render(template)?;
        let auto_path = project_dir.join(AUTO_GENERATED_FILE);
        fs::write(&auto_path, &artifact)?;

        let pkg_path = package_json::write(template, project_dir)?;

        Ok(vec![auto_path, pkg_path])
    }
}
