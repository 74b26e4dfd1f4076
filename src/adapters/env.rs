// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment configuration source adapter.
//!
//! This module provides an adapter that reads every variable set in the
//! calling process's environment. The entries are serialized back into
//! `KEY=VALUE` text and run through the same dotenv parser the file adapter
//! uses, so both sources share a single set of parsing rules.

use crate::adapters::collect_entries;
use crate::domain::{ConfigStore, Result};
use crate::ports::ConfigSource;
use std::env;
use std::io::Cursor;

/// Configuration source adapter for the process environment.
///
/// Reads every environment variable visible to the process in one snapshot.
/// Loading fails only if the serialized environment text cannot be parsed as
/// key=value entries, which a real OS environment rarely triggers.
///
/// # Examples
///
/// ```rust,no_run
/// use envcfg::adapters::EnvSource;
/// use envcfg::ports::ConfigSource;
///
/// let store = EnvSource::new().load().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvSource;

impl EnvSource {
    /// Creates a new process environment adapter.
    pub fn new() -> Self {
        EnvSource
    }
}

/// Serializes a raw value as a double-quoted dotenv token so the parser
/// returns it byte-for-byte. Backslashes, quotes, `$`, and newlines are the
/// characters the dotenv format gives meaning to.
fn quote_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl ConfigSource for EnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn load(&self) -> Result<ConfigStore> {
        let text = env::vars()
            .map(|(key, value)| format!("{}={}", key, quote_value(&value)))
            .collect::<Vec<_>>()
            .join("\n");

        let store = collect_entries(self.name(), dotenvy::from_read_iter(Cursor::new(text.into_bytes())))?;

        tracing::debug!("Loaded {} variables from the process environment", store.len());

        Ok(store)
    }
}
