// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw configuration value type with strict type coercions.
//!
//! This module provides the `RawValue` type, which wraps the unmodified
//! string stored for a key and provides the coercion methods that define the
//! crate's typed getter contract.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The unmodified string stored for a configuration key.
///
/// `RawValue` keeps the value exactly as the source supplied it and exposes
/// strict coercions to the supported types. String access is verbatim; no
/// trimming or case changes are ever applied, so `" true"` and `"TRUE"` are
/// both invalid booleans.
///
/// # Examples
///
/// ```
/// use envcfg::domain::RawValue;
///
/// let value = RawValue::from("42");
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.as_i64("WORKER_COUNT").unwrap(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValue(String);

impl RawValue {
    /// Creates a new `RawValue` from a `String`.
    pub fn new(value: String) -> Self {
        RawValue(value)
    }

    /// Returns the value as a string slice, verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use envcfg::domain::RawValue;
    ///
    /// let value = RawValue::from("  spaces kept  ");
    /// assert_eq!(value.as_str(), "  spaces kept  ");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into an owned `String`, verbatim.
    pub fn as_string(&self) -> String {
        self.0.clone()
    }

    /// Coerces the value to a boolean.
    ///
    /// Only the exact literals `"true"` and `"false"` are accepted,
    /// case-sensitive and without trimming. Every other value, including
    /// `"1"`, `"TRUE"`, `" true"`, and the empty string, is rejected.
    ///
    /// # Arguments
    ///
    /// * `key` - The key the value was stored under, used in the error
    ///
    /// # Examples
    ///
    /// ```
    /// use envcfg::domain::RawValue;
    ///
    /// assert_eq!(RawValue::from("true").as_bool("FLAG").unwrap(), true);
    /// assert_eq!(RawValue::from("false").as_bool("FLAG").unwrap(), false);
    /// assert!(RawValue::from("TRUE").as_bool("FLAG").is_err());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConfigError::invalid_bool(key, &self.0)),
        }
    }

    /// Coerces the value to a base-10 signed 64-bit integer.
    ///
    /// Any value `str::parse::<i64>` rejects fails here: the empty string,
    /// floats, hex notation, surrounding whitespace, stray characters, and
    /// values outside the 64-bit range. The underlying parse error is kept
    /// as the error source.
    ///
    /// # Arguments
    ///
    /// * `key` - The key the value was stored under, used in the error
    ///
    /// # Examples
    ///
    /// ```
    /// use envcfg::domain::RawValue;
    ///
    /// assert_eq!(RawValue::from("-7").as_i64("OFFSET").unwrap(), -7);
    /// assert!(RawValue::from("3.14").as_i64("OFFSET").is_err());
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ConfigError::invalid_int(key, &self.0, e))
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue(s.to_string())
    }
}

impl From<RawValue> for String {
    fn from(value: RawValue) -> Self {
        value.0
    }
}

impl AsRef<str> for RawValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
