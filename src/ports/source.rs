// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port any configuration
//! loader (process environment, dotenv file, test fixtures) must implement.

use crate::domain::{ConfigStore, Result};

/// A trait for configuration sources.
///
/// A source produces a fully populated [`ConfigStore`] in a single load.
/// Loading is all-or-nothing: implementations must return either a complete
/// store or an error, never a partially populated one. The name is used for
/// logging and error messages.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded
/// contexts.
///
/// # Examples
///
/// ```rust
/// use envcfg::ports::ConfigSource;
/// use envcfg::domain::{ConfigStore, Result};
///
/// struct FixtureSource;
///
/// impl ConfigSource for FixtureSource {
///     fn name(&self) -> &str {
///         "fixture"
///     }
///
///     fn load(&self) -> Result<ConfigStore> {
///         Ok([("APP_NAME".to_string(), "demo".to_string())]
///             .into_iter()
///             .collect())
///     }
/// }
///
/// let store = FixtureSource.load().unwrap();
/// assert!(store.contains("APP_NAME"));
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// This name is used for logging and error messages. It should be a
    /// short, descriptive identifier like "env" or "dotenv-file".
    fn name(&self) -> &str;

    /// Reads the underlying source and builds a complete store from it.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigStore)` - Every key=value entry the source holds
    /// * `Err(ConfigError)` - The source could not be read or parsed; no
    ///   store is produced
    fn load(&self) -> Result<ConfigStore>;
}
