// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and coercion logic.
//!
//! This module contains the core domain types for the configuration crate:
//! the immutable store, the raw value wrapper with its coercion rules, the
//! accessor trait, and the error taxonomy. It is independent of any external
//! concerns such as files or the process environment.

pub mod configurator;
pub mod errors;
pub mod raw_value;
pub mod store;

// Re-export commonly used types
pub use configurator::Configurator;
pub use errors::{ConfigError, Result};
pub use raw_value::RawValue;
pub use store::ConfigStore;
