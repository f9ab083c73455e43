// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing parser and consumer implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: parsers that produce nested trees from YAML or JSON documents,
//! a file loader built on them, and an in-memory options consumer.

#[cfg(any(feature = "yaml", feature = "json"))]
pub mod file;
#[cfg(feature = "json")]
pub mod json;
pub mod memory;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
#[cfg(any(feature = "yaml", feature = "json"))]
pub use file::ConfigFile;
#[cfg(feature = "json")]
pub use json::JsonParser;
pub use memory::InMemoryOptions;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
