//! Shared utilities for tscaffold

pub mod fs;
