//! package.json merge
//!
//! The pipeline owns the identity fields and the dependency tables of
//! package.json; every other field (scripts, main, files, ...) belongs to
//! the project and is preserved as-is. Identity written here equals the
//! identity read by sync, so repeated runs are byte-stable.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};

use crate::common::fs;
use crate::config::Template;
use crate::error::{Result, ScaffoldError};

/// File name of the npm package manifest
pub const PACKAGE_JSON_FILE: &str = "package.json";

/// Merge the template into an existing package.json body
pub fn merge(template: &Template, existing: Option<&str>, path: &str) -> Result<String> {
    let mut root: Map<String, Value> = match existing {
        Some(text) => {
            serde_json::from_str(text).map_err(|e| ScaffoldError::DescriptorParseFailed {
                path: path.to_string(),
                reason: e.to_string(),
            })?
        }
        None => Map::new(),
    };

    root.insert("name".to_string(), json!(template.name));
    root.insert("version".to_string(), json!(template.version));
    root.insert("description".to_string(), json!(template.short_description));
    root.insert("author".to_string(), json!(template.author));

    let dependencies: Map<String, Value> = template
        .dependencies
        .run_time_entries()
        .map(|(name, range)| (name.clone(), json!(range)))
        .collect();
    root.insert("dependencies".to_string(), Value::Object(dependencies));

    // Owned by the configuration like `dependencies`: an empty table clears
    // any stale devDependencies block in the existing file
    root.insert(
        "devDependencies".to_string(),
        json!(template.dependencies.dev_time),
    );

    let mut body = serde_json::to_string_pretty(&Value::Object(root))?;
    body.push('\n');
    Ok(body)
}

/// Write the merged package.json into the project directory
pub fn write(template: &Template, project_dir: &Path) -> Result<PathBuf> {
    let path = project_dir.join(PACKAGE_JSON_FILE);
    let existing = if path.is_file() {
        Some(fs::read_to_string(&path)?)
    } else {
        None
    };

    let body = merge(template, existing.as_deref(), &path.display().to_string())?;
    fs::write(&path, &body)?;
    Ok(path)
}
