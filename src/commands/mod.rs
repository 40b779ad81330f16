//! Command implementations for the tscaffold CLI

pub mod completions;
pub mod generate;
pub mod sync;
pub mod version;

use std::path::PathBuf;

use crate::error::{Result, ScaffoldError};

/// Resolve the project directory from the global --dir option
pub fn resolve_project_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };

    if !dir.is_dir() {
        return Err(ScaffoldError::ProjectDirNotFound {
            path: dir.display().to_string(),
        });
    }

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_project_dir_existing() {
        let temp = TempDir::new().unwrap();
        let dir = resolve_project_dir(Some(temp.path().to_path_buf())).unwrap();
        assert_eq!(dir, temp.path());
    }

    #[test]
    fn test_resolve_project_dir_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("absent");
        let err = resolve_project_dir(Some(missing)).unwrap_err();
        assert!(matches!(err, ScaffoldError::ProjectDirNotFound { .. }));
    }

    #[test]
    fn test_resolve_project_dir_defaults_to_cwd() {
        let dir = resolve_project_dir(None).unwrap();
        assert!(dir.is_dir());
    }
}
