// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the typed accessor over real sources.
//!
//! These tests build configurators from dotenv files on disk and from the
//! process environment and verify the getter contract end to end.

use envcfg::domain::{ConfigError, Configurator};
use envcfg::service::DefaultConfigurator;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

// Helper to set and clean up environment variables
struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn write_env_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_round_trip() {
    init_tracing();
    let file = write_env_file("FOO=\"var\"\n");
    let config = DefaultConfigurator::from_file(file.path()).unwrap();

    assert_eq!(config.require_string("FOO").unwrap(), "var");
}

#[test]
fn test_file_with_string_and_boolean() {
    let file = write_env_file("FOO=\"var\"\nBOOL=\"true\"\n");
    let config = DefaultConfigurator::from_file(file.path()).unwrap();

    assert_eq!(config.require_string("FOO").unwrap(), "var");
    assert_eq!(config.require_bool("BOOL").unwrap(), true);
}

#[test]
fn test_file_typed_getters() {
    let file = write_env_file(
        "# service settings\n\
         NAME=demo\n\
         DEBUG=false\n\
         WORKERS=4\n\
         \n\
         # empty on purpose\n\
         EMPTY=\n",
    );
    let config = DefaultConfigurator::from_file(file.path()).unwrap();

    assert_eq!(config.require_string("NAME").unwrap(), "demo");
    assert!(!config.require_bool("DEBUG").unwrap());
    assert_eq!(config.require_i64("WORKERS").unwrap(), 4);

    // An empty value is found but coerces to neither bool nor integer
    assert_eq!(config.require_string("EMPTY").unwrap(), "");
    assert!(matches!(
        config.require_bool("EMPTY").unwrap_err(),
        ConfigError::InvalidValue { .. }
    ));
    assert!(matches!(
        config.require_i64("EMPTY").unwrap_err(),
        ConfigError::InvalidValue { .. }
    ));
}

#[test]
fn test_empty_path_fails_construction() {
    let result = DefaultConfigurator::from_file("");
    assert!(matches!(result, Err(ConfigError::SourceError { .. })));
}

#[test]
fn test_missing_file_fails_construction() {
    let result = DefaultConfigurator::from_file("/nonexistent/dir/.env");
    assert!(matches!(result, Err(ConfigError::SourceError { .. })));
}

#[test]
fn test_malformed_file_yields_no_configurator() {
    let file = write_env_file("OK=1\n=missing_key\n");
    let result = DefaultConfigurator::from_file(file.path());
    assert!(result.is_err());
}

#[test]
fn test_environment_invalid_boolean() {
    init_tracing();
    let mut guard = EnvGuard::new();
    guard.set("INVALID_BOOLEAN", "obladi");

    let config = DefaultConfigurator::from_environment().unwrap();

    assert!(config.require_bool("INVALID_BOOLEAN").is_err());
    assert!(config.get_bool("INVALID_BOOLEAN", true));
    assert!(!config.get_bool("INVALID_BOOLEAN", false));
}

#[test]
fn test_environment_required_integer() {
    let mut guard = EnvGuard::new();
    guard.set("REQUIRED_INT", "1");

    let config = DefaultConfigurator::from_environment().unwrap();

    assert_eq!(config.require_i64("REQUIRED_INT").unwrap(), 1);
    assert!(matches!(
        config.require_i64("REQUIRED_INT_MISSING").unwrap_err(),
        ConfigError::KeyNotFound { .. }
    ));
}

#[test]
fn test_environment_string_getters() {
    let mut guard = EnvGuard::new();
    guard.set("ENVCFG_IT_NAME", "from the environment");

    let config = DefaultConfigurator::from_environment().unwrap();

    assert_eq!(
        config.require_string("ENVCFG_IT_NAME").unwrap(),
        "from the environment"
    );
    assert_eq!(
        config.get_string("ENVCFG_IT_NAME_MISSING", "fallback"),
        "fallback"
    );
}

#[test]
fn test_environment_snapshot_ignores_later_changes() {
    let mut guard = EnvGuard::new();
    guard.set("ENVCFG_IT_SNAPSHOT", "before");

    let config = DefaultConfigurator::from_environment().unwrap();
    guard.set("ENVCFG_IT_SNAPSHOT", "after");

    // The store was built once at construction time
    assert_eq!(config.require_string("ENVCFG_IT_SNAPSHOT").unwrap(), "before");
}

#[test]
fn test_optional_family_never_fails_across_types() {
    let file = write_env_file("STR=text\nBOOL=true\nINT=-3\nJUNK=%%%\n");
    let config = DefaultConfigurator::from_file(file.path()).unwrap();

    // Present and valid: stored values win
    assert_eq!(config.get_string("STR", "d"), "text");
    assert!(config.get_bool("BOOL", false));
    assert_eq!(config.get_i64("INT", 0), -3);

    // Present but invalid for the requested type: defaults win
    assert!(config.get_bool("JUNK", true));
    assert_eq!(config.get_i64("JUNK", 11), 11);

    // Absent: defaults win
    assert_eq!(config.get_string("NOPE", "d"), "d");
    assert!(!config.get_bool("NOPE", false));
    assert_eq!(config.get_i64("NOPE", 42), 42);
}

#[test]
fn test_has_reflects_store_membership() {
    let file = write_env_file("PRESENT=\n");
    let config = DefaultConfigurator::from_file(file.path()).unwrap();

    assert!(config.has("PRESENT"));
    assert!(!config.has("ABSENT"));
}

#[test]
fn test_accessor_is_shareable_across_threads() {
    let file = write_env_file("SHARED=1\n");
    let config = DefaultConfigurator::from_file(file.path()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(config.require_i64("SHARED").unwrap(), 1);
            });
        }
    });
}
