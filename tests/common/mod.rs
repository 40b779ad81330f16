//! Common test utilities for tscaffold integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Boilerplate files the sync command copies, in copy order
#[allow(dead_code)]
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

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write a minimal tscaffold.yaml
    pub fn seed_config(&self) {
        self.write_file(
            "tscaffold.yaml",
            r#"
name: "@acme/widgets"
version: 0.1.2
shortDescription: Widget library
author: dev@acme.com
dependencies:
  runTime:
    load:
      rxjs: ^6.5.5
      uuid: ^8.3.2
  devTime:
    typescript: ^4.7.4
bundle:
  entryFile: ./lib/index.ts
  loadDependencies: [rxjs, uuid]
"#,
        );
    }

    /// Write a package.json descriptor
    pub fn seed_descriptor(&self) {
        self.write_file(
            "package.json",
            r#"{
  "name": "@x/y",
  "version": "1.2.3",
  "description": "d",
  "author": "a"
}"#,
        );
    }

    /// Seed the .template directory with every boilerplate file
    pub fn seed_template_dir(&self) {
        for name in BOILERPLATE_FILES {
            self.write_file(
                &format!(".template/{name}"),
                &format!("boilerplate {name}\n"),
            );
        }
    }
}
