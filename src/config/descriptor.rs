//! On-disk package descriptor (package.json)
//!
//! `tscaffold sync` reads the package identity from the project's
//! package.json instead of from tscaffold.yaml, so the descriptor stays the
//! single source of truth for published metadata.

use std::path::Path;

use serde::Deserialize;

use crate::common::fs;
use crate::error::{Result, ScaffoldError};

/// File name of the package descriptor
pub const DESCRIPTOR_FILE: &str = "package.json";

/// Package identity parsed from package.json
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

#[derive(Deserialize)]
struct RawDescriptor {
    name: Option<String>,
    version: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

impl PackageDescriptor {
    /// Load the descriptor from `<project_dir>/package.json`
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(DESCRIPTOR_FILE);
        if !path.is_file() {
            return Err(ScaffoldError::DescriptorNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        Self::from_json(&contents, &path.display().to_string())
    }

    /// Parse the descriptor from a JSON string
    pub fn from_json(json: &str, path: &str) -> Result<Self> {
        let raw: RawDescriptor =
            serde_json::from_str(json).map_err(|e| ScaffoldError::DescriptorParseFailed {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let required = |field: &str, value: Option<String>| {
            value
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ScaffoldError::DescriptorFieldMissing {
                    field: field.to_string(),
                    path: path.to_string(),
                })
        };

        Ok(Self {
            name: required("name", raw.name)?,
            version: required("version", raw.version)?,
            description: raw.description.unwrap_or_default(),
            author: raw.author.unwrap_or_default(),
        })
    }
}
