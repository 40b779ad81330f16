//! Template configuration (tscaffold.yaml)
//!
//! The template configuration is the immutable record handed to the
//! generation pipeline: package identity, dependency tables and the bundle
//! entry point. It is assembled once per run and never mutated afterwards.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::fs;
use crate::config::{Bundle, Dependencies, PackageDescriptor, api_key};
use crate::error::{Result, ScaffoldError};

/// File name of the project configuration
pub const CONFIG_FILE: &str = "tscaffold.yaml";

/// Kind of package being scaffolded
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PackageKind {
    #[default]
    Library,
    Application,
}

/// Template configuration from tscaffold.yaml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Package name, e.g. "@scope/name"
    pub name: String,

    /// Package version
    pub version: String,

    /// One-line package description
    #[serde(default)]
    pub short_description: String,

    /// Package author
    #[serde(default)]
    pub author: String,

    /// Package kind
    #[serde(default, rename = "type")]
    pub kind: PackageKind,

    /// Dependency tables
    #[serde(default)]
    pub dependencies: Dependencies,

    /// Bundle entry point
    #[serde(default)]
    pub bundle: Bundle,
}

impl Template {
    /// Load and validate the configuration from `<project_dir>/tscaffold.yaml`
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Err(ScaffoldError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        let template: Self =
            serde_yaml::from_str(&contents).map_err(|e| ScaffoldError::ConfigParseFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        template.validate()?;
        Ok(template)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let template: Self = serde_yaml::from_str(yaml)?;
        template.validate()?;
        Ok(template)
    }

    /// Overlay package identity from an on-disk descriptor
    ///
    /// Used by sync: name, version, description and author come from
    /// package.json, everything else from tscaffold.yaml.
    pub fn with_descriptor(mut self, descriptor: &PackageDescriptor) -> Self {
        self.name = descriptor.name.clone();
        self.version = descriptor.version.clone();
        self.short_description = descriptor.description.clone();
        self.author = descriptor.author.clone();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ScaffoldError::ConfigInvalid {
                message: "package name cannot be empty".to_string(),
            });
        }
        if self.version.is_empty() {
            return Err(ScaffoldError::ConfigInvalid {
                message: "package version cannot be empty".to_string(),
            });
        }

        // Every loaded dependency must be declared in the run-time load table
        for dep in &self.bundle.load_dependencies {
            if !self.dependencies.run_time.load.contains_key(dep) {
                return Err(ScaffoldError::ConfigInvalid {
                    message: format!(
                        "bundle loads '{dep}' but it is not declared under dependencies.runTime.load"
                    ),
                });
            }
        }

        // Version ranges must carry a derivable API key
        for (name, range) in self.dependencies.run_time_entries() {
            api_key(name, range)?;
        }

        Ok(())
    }

    /// API version of the package itself, derived from its version
    pub fn api_version(&self) -> Result<String> {
        api_key(&self.name, &self.version)
    }
}
