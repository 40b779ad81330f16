//! Error types and handling for tscaffold
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tscaffold operations
#[derive(Error, Diagnostic, Debug)]
pub enum ScaffoldError {
    // Project errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(tscaffold::project::dir_not_found),
        help("Pass an existing directory with --dir or run from the project root")
    )]
    ProjectDirNotFound { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(tscaffold::config::not_found),
        help("Create a tscaffold.yaml describing the package in the project root")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(tscaffold::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(tscaffold::config::invalid))]
    ConfigInvalid { message: String },

    // Package descriptor errors
    #[error("Package descriptor not found: {path}")]
    #[diagnostic(
        code(tscaffold::descriptor::not_found),
        help("'tscaffold sync' reads name, version, description and author from package.json")
    )]
    DescriptorNotFound { path: String },

    #[error("Failed to parse package descriptor: {path}")]
    #[diagnostic(code(tscaffold::descriptor::parse_failed))]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Package descriptor {path} is missing required field '{field}'")]
    #[diagnostic(code(tscaffold::descriptor::field_missing))]
    DescriptorFieldMissing { field: String, path: String },

    // Dependency errors
    #[error("Invalid version range '{range}' for dependency '{name}'")]
    #[diagnostic(
        code(tscaffold::deps::invalid_range),
        help("Version ranges must carry a numeric major version, e.g. ^1.2.3 or ~0.1.0")
    )]
    InvalidVersionRange { name: String, range: String },

    // Boilerplate errors
    #[error("Template directory not found: {path}")]
    #[diagnostic(
        code(tscaffold::scaffold::template_dir_not_found),
        help("'tscaffold sync' copies boilerplate from a .template directory in the project root")
    )]
    TemplateDirNotFound { path: String },

    #[error("Boilerplate file missing from template directory: {path}")]
    #[diagnostic(code(tscaffold::scaffold::boilerplate_missing))]
    BoilerplateMissing { path: String },

    // Serialization errors
    #[error("Serialization failed: {reason}")]
    #[diagnostic(code(tscaffold::serialize::failed))]
    SerializationFailed { reason: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(tscaffold::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(tscaffold::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tscaffold::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        ScaffoldError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ScaffoldError {
    fn from(err: serde_yaml::Error) -> Self {
        ScaffoldError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

// Reached only from serde_json emission (no file path exists yet); parse
// failures of on-disk JSON are mapped explicitly at their call sites.
impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        ScaffoldError::SerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ScaffoldError>;
