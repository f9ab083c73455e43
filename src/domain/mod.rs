// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the flattening logic.
//!
//! This module is independent of any input format or options consumer. It defines
//! the nested input tree, the flat output map, and the pure operations that turn
//! one into the other.

pub mod config_key;
pub mod config_value;
pub mod errors;
pub mod flat_config;
pub mod flatten;
pub mod key_path;
pub mod raw_config;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use flat_config::FlatConfig;
pub use flatten::{
    flatten, flatten_map, locate_section, locate_section_in, DEFAULT_DELIMITER, MAX_DEPTH,
};
pub use key_path::KeyPath;
pub use raw_config::{ConfigMap, RawConfig};
