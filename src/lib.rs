// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed accessor layer over environment and dotenv configuration sources.
//!
//! This crate turns an untyped mapping of string keys to string values, read
//! from the OS process environment or a dotenv-formatted file, into
//! strongly-typed lookups with two access modes: *required* getters that fail
//! when a key is absent or its value cannot be coerced, and *optional*
//! getters that never fail and fall back to a caller-supplied default.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and coercion rules (`ConfigStore`,
//!   `RawValue`, the `Configurator` trait, errors)
//! - **Ports**: The `ConfigSource` trait that any loader must implement
//! - **Adapters**: Loaders for the process environment and dotenv files
//! - **Service**: `DefaultConfigurator`, the accessor callers construct
//!
//! # Coercion Rules
//!
//! - **Strings** are returned verbatim, with no trimming or case changes.
//! - **Booleans** accept exactly the literals `"true"` and `"false"`,
//!   case-sensitive. No other tokens (`1`, `yes`, `TRUE`) are recognized.
//! - **Integers** are parsed as base-10 signed 64-bit values.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use envcfg::prelude::*;
//!
//! # fn main() -> envcfg::domain::Result<()> {
//! let config = DefaultConfigurator::from_environment()?;
//!
//! let database_url = config.require_string("DATABASE_URL")?;
//! let verbose = config.get_bool("VERBOSE", false);
//! let port = config.get_i64("PORT", 8080);
//! # Ok(())
//! # }
//! ```
//!
//! Loading from a dotenv file instead:
//!
//! ```rust,no_run
//! use envcfg::prelude::*;
//!
//! # fn main() -> envcfg::domain::Result<()> {
//! let config = DefaultConfigurator::from_file("/etc/myapp/.env")?;
//! let workers = config.require_i64("WORKER_COUNT")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{DotenvFileSource, EnvSource};
    pub use crate::domain::{ConfigError, ConfigStore, Configurator, RawValue, Result};
    pub use crate::ports::ConfigSource;
    pub use crate::service::DefaultConfigurator;
}
