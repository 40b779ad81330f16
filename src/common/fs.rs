//! Common file system operations with unified error handling

use std::path::Path;

use crate::error::{Result, ScaffoldError};

pub fn read_error(path: &Path, e: std::io::Error) -> ScaffoldError {
    ScaffoldError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

pub fn write_error(path: &Path, e: std::io::Error) -> ScaffoldError {
    ScaffoldError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }
    Ok(())
}

/// Read a file to string
pub fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| read_error(path, e))
}

/// Write a file, creating parent directories as needed
pub fn write(path: &Path, contents: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, contents).map_err(|e| write_error(path, e))
}

/// Copy a single file, overwriting the destination
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    ensure_parent_dir(target)?;
    std::fs::copy(source, target)
        .map_err(|e| write_error(target, e))
        .map(|_| ())
}
