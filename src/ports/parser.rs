// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns a configuration
//! document in some text format (YAML, JSON, ...) into a nested [`RawConfig`] tree.

use crate::domain::{RawConfig, Result};

/// A trait for parsing configuration documents into nested trees.
///
/// # Node Mapping
///
/// Parsers should produce:
/// - [`RawConfig::Mapping`] for maps, keeping the document order of keys;
/// - [`RawConfig::Mapping`] with keys `"0"`, `"1"`, ... for sequences;
/// - [`RawConfig::Scalar`] for strings, numbers and booleans;
/// - [`RawConfig::Other`] for anything else, such as null.
///
/// # Examples
///
/// ```rust
/// use nestcfg::domain::{ConfigMap, RawConfig, Result};
/// use nestcfg::ports::ConfigParser;
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<RawConfig> {
///         let map: ConfigMap = content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim(), v.trim()))
///             .collect();
///         Ok(RawConfig::Mapping(map))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let raw = KeyValueParser.parse("name = demo").unwrap();
/// assert!(raw.as_mapping().unwrap().contains_key("name"));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a nested tree.
    fn parse(&self, content: &str) -> Result<RawConfig>;

    /// Returns the file extensions (without the leading dot) supported by this parser.
    fn supported_extensions(&self) -> &[&str];
}
