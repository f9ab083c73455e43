// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration parser adapter.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, RawConfig, Result};
use crate::ports::ConfigParser;
use serde_yaml::Value;

/// YAML parser implementation.
///
/// This parser converts YAML documents into [`RawConfig`] trees. Mapping keys
/// keep their document order; sequences become mappings keyed by index.
///
/// # Examples
///
/// ```rust
/// use nestcfg::adapters::YamlParser;
/// use nestcfg::domain::{flatten_map, ConfigValue};
/// use nestcfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let raw = parser.parse("database:\n  host: localhost\n  port: 5432").unwrap();
/// let flat = flatten_map(raw.as_mapping().unwrap(), ".").unwrap();
/// assert_eq!(flat.get("database.port"), Some(&ConfigValue::Integer(5432)));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Converts a YAML value into a configuration node.
    fn to_raw(value: &Value) -> RawConfig {
        match value {
            Value::Mapping(map) => RawConfig::Mapping(
                map.iter()
                    .filter_map(|(key, val)| Self::key_name(key).map(|k| (k, Self::to_raw(val))))
                    .collect(),
            ),
            Value::Sequence(seq) => RawConfig::Mapping(
                seq.iter()
                    .enumerate()
                    .map(|(i, val)| (i.to_string(), Self::to_raw(val)))
                    .collect::<ConfigMap>(),
            ),
            Value::String(s) => RawConfig::Scalar(ConfigValue::String(s.clone())),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => RawConfig::Scalar(ConfigValue::Integer(i)),
                (None, Some(f)) => RawConfig::Scalar(ConfigValue::Float(f)),
                (None, None) => RawConfig::Scalar(ConfigValue::String(n.to_string())),
            },
            Value::Bool(b) => RawConfig::Scalar(ConfigValue::Bool(*b)),
            Value::Null | Value::Tagged(_) => RawConfig::Other,
        }
    }

    /// Returns the string form of a scalar mapping key.
    fn key_name(key: &Value) -> Option<String> {
        match key {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl From<&Value> for RawConfig {
    fn from(value: &Value) -> Self {
        YamlParser::to_raw(value)
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<RawConfig> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse YAML: {}", e),
            source: Some(Box::new(e)),
        })?;

        Ok(Self::to_raw(&value))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
