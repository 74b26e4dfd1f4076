// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! This module contains the concrete loaders behind the `ConfigSource` port:
//! one for the process environment and one for dotenv files. Both feed the
//! same dotenv parser, so the same quoting and escaping rules apply to each.

pub mod dotenv_file;
pub mod env;

// Re-export adapters
pub use dotenv_file::DotenvFileSource;
pub use env::EnvSource;

use crate::domain::{ConfigError, ConfigStore, Result};

/// Drains a dotenv entry iterator into a store, failing on the first
/// unparseable entry so no partial store escapes.
pub(crate) fn collect_entries(
    source_name: &str,
    entries: impl Iterator<Item = std::result::Result<(String, String), dotenvy::Error>>,
) -> Result<ConfigStore> {
    let mut pairs = Vec::new();
    for entry in entries {
        let (key, value) = entry.map_err(|e| {
            ConfigError::source_error(source_name, "could not parse key=value entries", e)
        })?;
        pairs.push((key, value));
    }
    Ok(pairs.into_iter().collect())
}
