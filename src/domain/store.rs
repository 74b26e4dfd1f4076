// SPDX-License-Identifier: MIT OR Apache-2.0

//! The immutable key-to-value store built by configuration sources.

use crate::domain::RawValue;
use std::collections::HashMap;

/// An immutable mapping from configuration key to raw string value.
///
/// A `ConfigStore` is built exactly once, by a [`ConfigSource`] at accessor
/// construction time, and is never mutated afterwards. Construction is
/// all-or-nothing: a source either returns a fully populated store or an
/// error, never a partial one. Because there is no mutation path after
/// construction, a store can be shared across threads without locking.
///
/// [`ConfigSource`]: crate::ports::ConfigSource
///
/// # Examples
///
/// ```
/// use envcfg::domain::ConfigStore;
///
/// let store: ConfigStore = [("PORT".to_string(), "8080".to_string())]
///     .into_iter()
///     .collect();
///
/// assert!(store.contains("PORT"));
/// assert_eq!(store.get("PORT").unwrap().as_str(), "8080");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigStore {
    values: HashMap<String, RawValue>,
}

impl ConfigStore {
    /// Returns the raw value stored for `key`, if present.
    ///
    /// A key stored with an empty value (`KEY=`) is present and yields an
    /// empty `RawValue`.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.values.get(key)
    }

    /// Returns `true` if `key` is present in the store.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns an iterator over the keys in the store, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for ConfigStore {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        ConfigStore {
            values: iter
                .into_iter()
                .map(|(key, value)| (key, RawValue::from(value)))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for ConfigStore {
    fn from(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }
}
