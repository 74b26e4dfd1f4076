// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the typed accessor implementation.
//!
//! This module contains the concrete implementation of the `Configurator`
//! trait along with the construction surface callers use to build one.

pub mod default_configurator;

// Re-export commonly used types
pub use default_configurator::DefaultConfigurator;
