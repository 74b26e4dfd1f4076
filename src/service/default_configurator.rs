// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default typed accessor implementation.
//!
//! This module provides the default implementation of the `Configurator`
//! trait: a thin wrapper around the immutable store a source produced, plus
//! the factory functions for the two supported sources.

use crate::adapters::{DotenvFileSource, EnvSource};
use crate::domain::{ConfigError, ConfigStore, Configurator, RawValue, Result};
use crate::ports::ConfigSource;
use std::path::Path;

/// Default implementation of the typed accessor.
///
/// A `DefaultConfigurator` owns the [`ConfigStore`] its source produced at
/// construction time and answers every getter from it. The store is never
/// mutated after construction, so a configurator can be shared across
/// threads freely; each lookup is independent and side-effect-free.
///
/// # Examples
///
/// ```rust,no_run
/// use envcfg::prelude::*;
///
/// # fn main() -> envcfg::domain::Result<()> {
/// // From the process environment
/// let config = DefaultConfigurator::from_environment()?;
///
/// // Or from a dotenv file
/// let config = DefaultConfigurator::from_file(".env.production")?;
///
/// let level = config.get_string("LOG_LEVEL", "info");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DefaultConfigurator {
    /// The store built at construction time
    store: ConfigStore,
}

impl DefaultConfigurator {
    /// Builds a configurator from the calling process's environment.
    ///
    /// Every variable currently set is captured in one snapshot. Fails with
    /// [`ConfigError::SourceError`] only if the environment text cannot be
    /// parsed as key=value entries.
    pub fn from_environment() -> Result<Self> {
        Self::from_source(&EnvSource::new())
    }

    /// Builds a configurator from a dotenv file at `path`.
    ///
    /// The path is resolved to an absolute path first; an empty path is an
    /// immediate error. Fails with [`ConfigError::SourceError`] wrapping the
    /// underlying cause if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_source(&DotenvFileSource::new(path)?)
    }

    /// Builds a configurator from the nearest `.env` file, walking up from
    /// the current directory.
    ///
    /// Fails if no `.env` file is found or if the file cannot be parsed.
    pub fn from_dotenv() -> Result<Self> {
        Self::from_source(&DotenvFileSource::discover()?)
    }

    /// Builds a configurator from any [`ConfigSource`] implementation.
    ///
    /// This is the seam the environment and file factories go through, and
    /// the way to plug in a custom source.
    ///
    /// # Examples
    ///
    /// ```
    /// use envcfg::domain::{ConfigStore, Configurator, Result};
    /// use envcfg::ports::ConfigSource;
    /// use envcfg::service::DefaultConfigurator;
    ///
    /// struct FixtureSource;
    ///
    /// impl ConfigSource for FixtureSource {
    ///     fn name(&self) -> &str {
    ///         "fixture"
    ///     }
    ///
    ///     fn load(&self) -> Result<ConfigStore> {
    ///         Ok([("PORT".to_string(), "9000".to_string())]
    ///             .into_iter()
    ///             .collect())
    ///     }
    /// }
    ///
    /// let config = DefaultConfigurator::from_source(&FixtureSource).unwrap();
    /// assert_eq!(config.require_i64("PORT").unwrap(), 9000);
    /// ```
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self> {
        let store = source.load()?;

        tracing::debug!(
            "Built configurator from source '{}' with {} entries",
            source.name(),
            store.len()
        );

        Ok(DefaultConfigurator { store })
    }

    /// Wraps an already-built store.
    ///
    /// Useful for tests and for embedding the accessor behind custom
    /// construction logic.
    pub fn from_store(store: ConfigStore) -> Self {
        DefaultConfigurator { store }
    }

    /// Returns a read-only view of the wrapped store.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    fn lookup(&self, key: &str) -> Result<&RawValue> {
        self.store.get(key).ok_or_else(|| ConfigError::KeyNotFound {
            key: key.to_string(),
        })
    }
}

impl Configurator for DefaultConfigurator {
    fn require_string(&self, key: &str) -> Result<String> {
        self.lookup(key).map(RawValue::as_string)
    }

    fn require_bool(&self, key: &str) -> Result<bool> {
        self.lookup(key)?.as_bool(key)
    }

    fn require_i64(&self, key: &str) -> Result<i64> {
        self.lookup(key)?.as_i64(key)
    }

    fn has(&self, key: &str) -> bool {
        self.store.contains(key)
    }
}
