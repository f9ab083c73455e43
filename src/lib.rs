// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture crate for flattening nested configuration.
//!
//! This crate takes a nested configuration tree, optionally narrows it to a
//! section addressed by a dotted key path, flattens it into a map of composite
//! keys to scalar values, and hands the result to an options consumer.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and logic (`RawConfig`, `FlatConfig`, `KeyPath`,
//!   `locate_section`, `flatten`, errors)
//! - **Ports**: Trait definitions at the edges (`ConfigParser`, `OptionsConsumer`)
//! - **Adapters**: YAML and JSON parsers, a file loader, an in-memory consumer
//! - **Service**: The `Flattener`, which owns a consumer and runs a full pass
//!
//! # Rules
//!
//! - Nested mappings are descended into, joining keys with the delimiter (`.`)
//! - Strings, numbers and booleans are stored under their composite key
//! - Anything else (null, tagged nodes) is skipped
//! - Nesting deeper than [`MAX_DEPTH`](domain::MAX_DEPTH) levels is an error
//! - The consumer sees nothing unless the whole pass succeeds
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser (default)
//! - `json`: Enable the JSON parser (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use nestcfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let raw = ConfigMap::new()
//!     .with("app", ConfigMap::new().with("name", "demo").with("debug", true))
//!     .with("port", 8080);
//!
//! let flattener = Flattener::new(InMemoryOptions::new());
//! let options = flattener.apply(&raw, "")?;
//!
//! assert_eq!(options.get("app.name"), Some(&ConfigValue::from("demo")));
//! assert_eq!(options.get("app.debug"), Some(&ConfigValue::from(true)));
//! assert_eq!(options.get("port"), Some(&ConfigValue::from(8080)));
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
    pub use crate::adapters::InMemoryOptions;
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigMap, ConfigValue, FlatConfig, KeyPath, RawConfig, Result,
    };
    pub use crate::ports::{ConfigParser, OptionsConsumer};
    pub use crate::service::{Flattener, FlattenerBuilder};

    // Re-export adapters based on feature flags
    #[cfg(any(feature = "yaml", feature = "json"))]
    pub use crate::adapters::ConfigFile;
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
