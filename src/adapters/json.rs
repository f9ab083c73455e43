// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON configuration parser adapter.

use crate::domain::{ConfigError, ConfigMap, ConfigValue, RawConfig, Result};
use crate::ports::ConfigParser;
use serde_json::Value;

/// JSON parser implementation.
///
/// Follows the same node mapping as [`YamlParser`](crate::adapters::YamlParser):
/// objects and arrays become mappings, `null` becomes [`RawConfig::Other`].
/// Object key order follows the document.
#[derive(Debug, Clone, Default)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    fn to_raw(value: &Value) -> RawConfig {
        match value {
            Value::Object(obj) => RawConfig::Mapping(
                obj.iter()
                    .map(|(key, val)| (key.as_str(), Self::to_raw(val)))
                    .collect(),
            ),
            Value::Array(items) => RawConfig::Mapping(
                items
                    .iter()
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
            Value::Null => RawConfig::Other,
        }
    }
}

impl From<&Value> for RawConfig {
    fn from(value: &Value) -> Self {
        JsonParser::to_raw(value)
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<RawConfig> {
        let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
            source: Some(Box::new(e)),
        })?;

        Ok(Self::to_raw(&value))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_parser_nested() {
        let raw = JsonParser::new()
            .parse(r#"{"a": {"b": {"x": 1, "y": 2}}}"#)
            .unwrap();
        let a = raw.as_mapping().and_then(|m| m.get("a")).unwrap();
        let b = a.as_mapping().and_then(|m| m.get("b")).unwrap();
        assert_eq!(b, &RawConfig::from(ConfigMap::new().with("x", 1).with("y", 2)));
    }

    #[test]
    fn test_json_parser_null_is_other() {
        let raw = JsonParser::new().parse(r#"{"a": null, "b": 3}"#).unwrap();
        let map = raw.as_mapping().unwrap();
        assert_eq!(map.get("a"), Some(&RawConfig::Other));
        assert_eq!(map.get("b"), Some(&RawConfig::from(3)));
    }

    #[test]
    fn test_json_parser_array() {
        let raw = RawConfig::from(&json!({"hosts": ["a", "b"]}));
        let hosts = raw
            .as_mapping()
            .and_then(|m| m.get("hosts"))
            .and_then(RawConfig::as_mapping)
            .unwrap();
        assert_eq!(hosts.get("1"), Some(&RawConfig::from("b")));
    }

    #[test]
    fn test_json_parser_large_unsigned_becomes_float() {
        let raw = RawConfig::from(&json!({"big": u64::MAX}));
        let big = raw.as_mapping().and_then(|m| m.get("big")).unwrap();
        assert!(matches!(big, RawConfig::Scalar(ConfigValue::Float(_))));
    }

    #[test]
    fn test_json_parser_wide_object() {
        let body: Vec<String> = (0..160_000)
            .map(|i| format!("\"k{}\": {}", i, i))
            .collect();
        let content = format!("{{{}}}", body.join(","));

        let raw = JsonParser::new().parse(&content).unwrap();
        let map = raw.as_mapping().unwrap();
        assert_eq!(map.len(), 160_000);
        assert_eq!(map.get("k159999"), Some(&RawConfig::from(159_999)));
        assert_eq!(map.iter().last().map(|(k, _)| k), Some("k159999"));
    }

    #[test]
    fn test_json_parser_invalid() {
        let result = JsonParser::new().parse("{not json");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_json_parser_supported_extensions() {
        assert_eq!(JsonParser::new().supported_extensions(), &["json"]);
    }
}
