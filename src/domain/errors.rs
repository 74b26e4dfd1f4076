// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when loading a
//! configuration source or reading typed values from it. All errors use
//! `thiserror` for proper error handling and conversion.

use std::num::ParseIntError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// `SourceError` is raised only while constructing an accessor; `KeyNotFound`
/// and `InvalidValue` are raised only by the required getters. The enum is
/// marked `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use envcfg::domain::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "DATABASE_URL".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested configuration key was not found in the store.
    #[error("configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// A key is present but its raw value cannot be coerced to the requested type.
    #[error("key '{key}' has an invalid {target_type} value '{raw}'")]
    InvalidValue {
        /// The key being coerced
        key: String,
        /// The raw value that failed to coerce
        raw: String,
        /// The target type name ("boolean" or "integer")
        target_type: String,
        /// The underlying parse error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The underlying source could not be loaded or parsed.
    #[error("configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates an `InvalidValue` error for a value that is not a boolean literal.
    ///
    /// Boolean coercion accepts only the exact literals `"true"` and
    /// `"false"`, so there is no underlying parser error to attach.
    pub fn invalid_bool(key: &str, raw: &str) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            raw: raw.to_string(),
            target_type: "boolean".to_string(),
            source: None,
        }
    }

    /// Creates an `InvalidValue` error from a failed integer parse.
    pub fn invalid_int(key: &str, raw: &str, err: ParseIntError) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            raw: raw.to_string(),
            target_type: "integer".to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `SourceError` wrapping an underlying cause.
    pub fn source_error(
        source_name: &str,
        message: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            key: "TEST_KEY".to_string(),
        };
        assert_eq!(error.to_string(), "configuration key not found: TEST_KEY");
    }

    #[test]
    fn test_invalid_bool_error() {
        let error = ConfigError::invalid_bool("FLAG", "yes");
        assert_eq!(error.to_string(), "key 'FLAG' has an invalid boolean value 'yes'");
        assert!(matches!(
            error,
            ConfigError::InvalidValue { source: None, .. }
        ));
    }

    #[test]
    fn test_invalid_int_error() {
        let parse_err = "not_a_number".parse::<i64>().unwrap_err();
        let error = ConfigError::invalid_int("COUNT", "not_a_number", parse_err);
        assert!(error.to_string().contains("COUNT"));
        assert!(error.to_string().contains("integer"));
        assert!(matches!(
            error,
            ConfigError::InvalidValue {
                source: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_int_carries_parse_failure() {
        use std::error::Error;

        let parse_err = "".parse::<i64>().unwrap_err();
        let error = ConfigError::invalid_int("COUNT", "", parse_err);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "env".to_string(),
            message: "could not parse key=value entries".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "configuration source 'env' error: could not parse key=value entries"
        );
    }

    #[test]
    fn test_source_error_wraps_cause() {
        use std::error::Error;

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::source_error("dotenv-file", "could not read file", io_error);
        assert!(error.source().is_some());
    }
}
