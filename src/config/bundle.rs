//! Bundle entry point declaration
//!
//! Describes the root module handed to the packager: the entry file, the
//! run-time dependencies it loads, and the aliases it exposes.

use serde::{Deserialize, Serialize};

fn default_entry_file() -> String {
    "./lib/index.ts".to_string()
}

/// Bundle entry point of a template configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Bundle {
    /// Source file designated as the root module for packaging
    #[serde(default = "default_entry_file")]
    pub entry_file: String,

    /// Ordered list of dependency names the entry loads
    pub load_dependencies: Vec<String>,

    /// Aliases the bundle exposes
    pub aliases: Vec<String>,
}

impl Default for Bundle {
    fn default() -> Self {
        Self {
            entry_file: default_entry_file(),
            load_dependencies: Vec::new(),
            aliases: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entry_file() {
        let bundle = Bundle::default();
        assert_eq!(bundle.entry_file, "./lib/index.ts");
        assert!(bundle.load_dependencies.is_empty());
        assert!(bundle.aliases.is_empty());
    }

    #[test]
    fn test_deserialize_partial() {
        let bundle: Bundle = serde_yaml::from_str("loadDependencies: [rxjs, uuid]\n").unwrap();
        assert_eq!(bundle.entry_file, "./lib/index.ts");
        assert_eq!(bundle.load_dependencies, vec!["rxjs", "uuid"]);
    }

    #[test]
    fn test_deserialize_full() {
        let yaml = r#"
entryFile: ./lib/main.ts
loadDependencies: [rxjs]
aliases: [widgets]
"#;
        let bundle: Bundle = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(bundle.entry_file, "./lib/main.ts");
        assert_eq!(bundle.aliases, vec!["widgets"]);
    }
}
