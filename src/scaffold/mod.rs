//! Boilerplate copy step
//!
//! Copies a fixed list of boilerplate files from the project's `.template/`
//! directory into the project root, overwriting destinations
//! unconditionally. Copies run sequentially in list order; the first
//! failure aborts the remainder and already-copied files stay in place.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::common::fs;
use crate::error::{Result, ScaffoldError};
use crate::progress::CopyProgress;

/// Directory holding the boilerplate sources, relative to the project root
pub const TEMPLATE_DIR: &str = ".template";

/// Boilerplate files copied from the template directory, in copy order
pub const BOILERPLATE_FILES: &[&str] = &[
    ".gitignore",
    ".npmignore",
    ".prettierignore",
    "LICENSE",
    "jest.config.ts",
    "tsconfig.json",
    "typedoc.js",
    "webpack.config.ts",
];

/// Copy all boilerplate files into the project root
///
/// Returns the destination paths in copy order.
pub fn copy_boilerplate(project_dir: &Path, progress: Option<&CopyProgress>) -> Result<Vec<PathBuf>> {
    let template_dir = project_dir.join(TEMPLATE_DIR);
    if !template_dir.is_dir() {
        return Err(ScaffoldError::TemplateDirNotFound {
            path: template_dir.display().to_string(),
        });
    }

    let mut copied = Vec::with_capacity(BOILERPLATE_FILES.len());
    for name in BOILERPLATE_FILES {
        let source = template_dir.join(name);
        if !source.is_file() {
            return Err(ScaffoldError::BoilerplateMissing {
                path: source.display().to_string(),
            });
        }

        let target = project_dir.join(name);
        fs::copy_file(&source, &target)?;
        if let Some(p) = progress {
            p.file_copied(name);
        }
        copied.push(target);
    }

    Ok(copied)
}

/// List every file present under the template directory
///
/// Used for verbose output; the copy itself only touches the fixed list.
pub fn template_inventory(project_dir: &Path) -> Vec<PathBuf> {
    let template_dir = project_dir.join(TEMPLATE_DIR);
    WalkDir::new(&template_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            e.path()
                .strip_prefix(&template_dir)
                .ok()
                .map(Path::to_path_buf)
        })
        .collect()
}
