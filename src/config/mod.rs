//! Configuration handling for tscaffold
//!
//! This module contains data structures for:
//! - `tscaffold.yaml` - Declarative template configuration
//! - `package.json` - On-disk package descriptor (sync input)

pub mod bundle;
pub mod dependencies;
pub mod descriptor;
pub mod template;

// Re-export commonly used types
pub use bundle::Bundle;
pub use dependencies::{Dependencies, RunTimeDeps, api_key};
pub use descriptor::PackageDescriptor;
pub use template::{PackageKind, Template};
