// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed accessor trait definition.
//!
//! This module defines the `Configurator` trait, the capability interface
//! callers depend on instead of a concrete accessor type. It exposes the two
//! getter families: required getters that fail, and optional getters that
//! fall back to a default.

use crate::domain::Result;

/// Typed access to an immutable configuration store.
///
/// Each supported type has a *required* getter returning `Result<T>` and an
/// *optional* getter taking a default and never failing. The optional family
/// is defined in terms of the required one: call the required getter and, on
/// any error, return the caller-supplied default. The two failure kinds
/// (absent key, invalid value) are deliberately not distinguishable through
/// the optional family; it exists for soft settings where not failing the
/// process matters more than knowing why the value fell back.
///
/// Every lookup is a pure function of the store and its inputs; the accessor
/// holds no per-call state.
///
/// # Examples
///
/// ```
/// use envcfg::domain::{ConfigStore, Configurator};
/// use envcfg::service::DefaultConfigurator;
///
/// let store: ConfigStore = [
///     ("APP_NAME".to_string(), "demo".to_string()),
///     ("DEBUG".to_string(), "true".to_string()),
/// ]
/// .into_iter()
/// .collect();
/// let config = DefaultConfigurator::from_store(store);
///
/// assert_eq!(config.require_string("APP_NAME").unwrap(), "demo");
/// assert_eq!(config.require_bool("DEBUG").unwrap(), true);
/// assert_eq!(config.get_i64("PORT", 8080), 8080);
/// ```
pub trait Configurator {
    /// Returns the raw string stored for `key`, verbatim.
    ///
    /// Fails with [`ConfigError::KeyNotFound`] if the key is absent. A key
    /// present with an empty value is found and yields `""`; once the key is
    /// found this getter never fails.
    ///
    /// [`ConfigError::KeyNotFound`]: crate::domain::ConfigError::KeyNotFound
    fn require_string(&self, key: &str) -> Result<String>;

    /// Returns the boolean stored for `key`.
    ///
    /// Fails with [`ConfigError::KeyNotFound`] if the key is absent, or with
    /// [`ConfigError::InvalidValue`] if the raw value is anything other than
    /// the exact literal `"true"` or `"false"`.
    ///
    /// [`ConfigError::KeyNotFound`]: crate::domain::ConfigError::KeyNotFound
    /// [`ConfigError::InvalidValue`]: crate::domain::ConfigError::InvalidValue
    fn require_bool(&self, key: &str) -> Result<bool>;

    /// Returns the base-10 signed 64-bit integer stored for `key`.
    ///
    /// Fails with [`ConfigError::KeyNotFound`] if the key is absent, or with
    /// [`ConfigError::InvalidValue`] (carrying the parse failure) if the raw
    /// value does not parse as an `i64`.
    ///
    /// [`ConfigError::KeyNotFound`]: crate::domain::ConfigError::KeyNotFound
    /// [`ConfigError::InvalidValue`]: crate::domain::ConfigError::InvalidValue
    fn require_i64(&self, key: &str) -> Result<i64>;

    /// Returns `true` if `key` is present in the store.
    fn has(&self, key: &str) -> bool;

    /// Returns the string stored for `key`, or `default` if the lookup fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use envcfg::domain::{ConfigStore, Configurator};
    /// use envcfg::service::DefaultConfigurator;
    ///
    /// let config = DefaultConfigurator::from_store(ConfigStore::default());
    /// assert_eq!(config.get_string("MISSING", "fallback"), "fallback");
    /// ```
    fn get_string(&self, key: &str, default: &str) -> String {
        self.require_string(key)
            .unwrap_or_else(|_| default.to_string())
    }

    /// Returns the boolean stored for `key`, or `default` if the lookup fails
    /// for any reason, including an invalid value.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.require_bool(key).unwrap_or(default)
    }

    /// Returns the integer stored for `key`, or `default` if the lookup fails
    /// for any reason, including an invalid value.
    fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.require_i64(key).unwrap_or(default)
    }
}
