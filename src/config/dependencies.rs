//! Dependency tables of the template configuration
//!
//! Dependencies are split into run-time (needed when the generated bundle
//! executes) and dev-time (needed only while developing it). Run-time
//! dependencies further split into those fetched at load time and those
//! compiled into the bundle. All tables map package name to a
//! semantic-version range.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Dependency declarations of a template configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Dependencies {
    /// Dependencies of the generated artifact at execution time
    pub run_time: RunTimeDeps,

    /// Development-time-only dependencies
    pub dev_time: BTreeMap<String, String>,
}

/// Run-time dependency tables
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RunTimeDeps {
    /// Dependencies fetched at load time, kept external to the bundle
    pub load: BTreeMap<String, String>,

    /// Dependencies compiled into the bundle
    pub included_in_bundle: BTreeMap<String, String>,
}

impl Dependencies {
    /// All run-time entries, load-time and bundled alike
    pub fn run_time_entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.run_time
            .load
            .iter()
            .chain(self.run_time.included_in_bundle.iter())
    }
}

/// Derive the API key of a dependency from its version range.
///
/// The API key is the major version component (`^6.5.5` -> `"6"`); packages
/// still on a 0.x line key on the minor component instead (`^0.1.3` -> `"01"`),
/// since every 0.x minor is a breaking API line under semver.
pub fn api_key(name: &str, range: &str) -> Result<String> {
    let invalid = || ScaffoldError::InvalidVersionRange {
        name: name.to_string(),
        range: range.to_string(),
    };

    let version = range
        .trim()
        .trim_start_matches(['^', '~', '=', '>', '<'])
        .trim_start();

    let mut parts = version.split('.');
    let major: u64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(invalid)?;

    if major > 0 {
        return Ok(major.to_string());
    }

    let minor: u64 = match parts.next() {
        Some(p) => p
            .split(['-', '+'])
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(invalid)?,
        None => 0,
    };
    Ok(format!("0{minor}"))
}
