// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotenv file configuration source adapter.
//!
//! This module provides an adapter that reads configuration values from a
//! dotenv-formatted file: `KEY=VALUE` lines, blank lines and `#` comments
//! ignored, double-quoted values with escape sequences, single-quoted and
//! unquoted values taken literally.

use crate::adapters::collect_entries;
use crate::domain::{ConfigError, ConfigStore, Result};
use crate::ports::ConfigSource;
use std::env;
use std::path::{Path, PathBuf};

/// File name probed by [`DotenvFileSource::discover`].
const DEFAULT_ENV_FILE: &str = ".env";

/// Configuration source adapter for dotenv files.
///
/// The path is resolved to an absolute path at construction time; an empty
/// path is rejected immediately. Reading and parsing happen on
/// [`load`](ConfigSource::load), and any I/O or parse failure surfaces as a
/// [`ConfigError::SourceError`] wrapping the underlying cause.
///
/// # Examples
///
/// ```rust,no_run
/// use envcfg::adapters::DotenvFileSource;
/// use envcfg::ports::ConfigSource;
///
/// let source = DotenvFileSource::new("/etc/myapp/.env").unwrap();
/// let store = source.load().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotenvFileSource {
    /// Absolute path to the dotenv file
    file_path: PathBuf,
}

impl DotenvFileSource {
    /// Creates a dotenv file adapter from a path.
    ///
    /// Fails if the path cannot be resolved to an absolute path, e.g. for an
    /// empty path. The file itself is not touched until `load`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = path.as_ref();
        let file_path = std::path::absolute(raw).map_err(|e| {
            ConfigError::source_error(
                "dotenv-file",
                format!("could not resolve an absolute path for '{}'", raw.display()),
                e,
            )
        })?;

        Ok(DotenvFileSource { file_path })
    }

    /// Creates an adapter for the nearest `.env` file, walking up from the
    /// current directory through its ancestors.
    ///
    /// Fails if no `.env` file exists anywhere along that chain.
    pub fn discover() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            ConfigError::source_error(
                "dotenv-file",
                "could not determine the current directory",
                e,
            )
        })?;

        cwd.ancestors()
            .map(|dir| dir.join(DEFAULT_ENV_FILE))
            .find(|candidate| candidate.is_file())
            .map(|file_path| DotenvFileSource { file_path })
            .ok_or_else(|| ConfigError::SourceError {
                source_name: "dotenv-file".to_string(),
                message: format!(
                    "no {} file found in '{}' or its ancestors",
                    DEFAULT_ENV_FILE,
                    cwd.display()
                ),
                source: None,
            })
    }

    /// Returns the resolved absolute path this adapter reads from.
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigSource for DotenvFileSource {
    fn name(&self) -> &str {
        "dotenv-file"
    }

    fn load(&self) -> Result<ConfigStore> {
        let entries = dotenvy::from_path_iter(&self.file_path).map_err(|e| {
            ConfigError::source_error(
                self.name(),
                format!("could not read '{}'", self.file_path.display()),
                e,
            )
        })?;

        let store = collect_entries(self.name(), entries)?;

        tracing::debug!(
            "Loaded {} entries from dotenv file '{}'",
            store.len(),
            self.file_path.display()
        );

        Ok(store)
    }
}
