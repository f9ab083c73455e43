// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar configuration values with type-safe conversions.
//!
//! This module provides the `ConfigValue` type, the only kind of value that can be
//! stored in a flattened configuration. Values keep the type they were written
//! with, and the accessors coerce where the conversion is lossless or textual.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scalar configuration leaf: string, number or boolean.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from(8080);
/// assert_eq!(value.as_i64("port").unwrap(), 8080);
/// assert_eq!(value.to_string(), "8080");
///
/// let value = ConfigValue::from("yes");
/// assert!(value.as_bool("debug").unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A boolean leaf.
    Bool(bool),
    /// A signed integer leaf.
    Integer(i64),
    /// A floating point leaf.
    Float(f64),
    /// A string leaf.
    String(String),
}

impl ConfigValue {
    /// Returns the kind of the value as a short name.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
        }
    }

    /// Returns the string slice if this is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts the value to a boolean.
    ///
    /// String leaves recognize the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// Integer leaves map `0` to `false` and `1` to `true`.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            ConfigValue::Bool(b) => Ok(*b),
            ConfigValue::Integer(0) => Ok(false),
            ConfigValue::Integer(1) => Ok(true),
            ConfigValue::String(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(true),
                "false" | "no" | "0" | "off" => Ok(false),
                _ => s
                    .parse::<bool>()
                    .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
            },
            other => Err(ConfigError::incompatible(
                key.to_string(),
                "boolean",
                other.kind(),
            )),
        }
    }

    /// Converts the value to an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("-42");
    /// assert_eq!(value.as_i64("test.key").unwrap(), -42);
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            ConfigValue::Integer(n) => Ok(*n),
            ConfigValue::String(s) => s
                .parse::<i64>()
                .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e)),
            other => Err(ConfigError::incompatible(
                key.to_string(),
                "integer",
                other.kind(),
            )),
        }
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        match self {
            ConfigValue::Integer(n) => u64::try_from(*n).map_err(|e| {
                ConfigError::TypeConversionError {
                    key: key.to_string(),
                    target_type: "unsigned integer".to_string(),
                    source: Box::new(e),
                }
            }),
            ConfigValue::String(s) => s
                .parse::<u64>()
                .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e)),
            other => Err(ConfigError::incompatible(
                key.to_string(),
                "unsigned integer",
                other.kind(),
            )),
        }
    }

    /// Converts the value to an `f64`. Integer leaves are widened.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            ConfigValue::Float(f) => Ok(*f),
            ConfigValue::Integer(n) => Ok(*n as f64),
            ConfigValue::String(s) => s
                .parse::<f64>()
                .map_err(|e| ConfigError::from_parse_float_error(key.to_string(), e)),
            other => Err(ConfigError::incompatible(
                key.to_string(),
                "float",
                other.kind(),
            )),
        }
    }

    /// Parses the textual form of the value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestcfg::domain::config_value::ConfigValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ConfigValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("server.bind").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.to_string()
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Integer(i64::from(n))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_kind() {
        assert_eq!(ConfigValue::from(true).kind(), "boolean");
        assert_eq!(ConfigValue::from(1).kind(), "integer");
        assert_eq!(ConfigValue::from(1.5).kind(), "float");
        assert_eq!(ConfigValue::from("x").kind(), "string");
    }

    #[test]
    fn test_as_str() {
        assert_eq!(ConfigValue::from("demo").as_str(), Some("demo"));
        assert_eq!(ConfigValue::from(3).as_str(), None);
    }

    #[test]
    fn test_as_bool_true_variants() {
        for val in ["true", "True", "TRUE", "yes", "YES", "1", "on", "On"] {
            let value = ConfigValue::from(val);
            assert!(value.as_bool("test.key").unwrap(), "Failed for value: {}", val);
        }
        assert!(ConfigValue::from(true).as_bool("k").unwrap());
        assert!(ConfigValue::from(1).as_bool("k").unwrap());
    }

    #[test]
    fn test_as_bool_false_variants() {
        for val in ["false", "False", "no", "NO", "0", "off", "OFF"] {
            let value = ConfigValue::from(val);
            assert!(!value.as_bool("test.key").unwrap(), "Failed for value: {}", val);
        }
        assert!(!ConfigValue::from(0).as_bool("k").unwrap());
    }

    #[test]
    fn test_as_bool_invalid() {
        assert!(ConfigValue::from("maybe").as_bool("test.key").is_err());
        assert!(ConfigValue::from(2).as_bool("test.key").is_err());
        assert!(ConfigValue::from(0.5).as_bool("test.key").is_err());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(ConfigValue::from(8080).as_i64("port").unwrap(), 8080);
        assert_eq!(ConfigValue::from("-42").as_i64("port").unwrap(), -42);
        assert!(ConfigValue::from("3.14").as_i64("port").is_err());
        assert!(ConfigValue::from(true).as_i64("port").is_err());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(ConfigValue::from(42).as_u64("k").unwrap(), 42);
        assert!(ConfigValue::from(-1).as_u64("k").is_err());
        assert_eq!(
            ConfigValue::from("18446744073709551615").as_u64("k").unwrap(),
            u64::MAX
        );
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(ConfigValue::from(2.5).as_f64("k").unwrap(), 2.5);
        assert_eq!(ConfigValue::from(3).as_f64("k").unwrap(), 3.0);
        assert_eq!(ConfigValue::from("-0.5").as_f64("k").unwrap(), -0.5);
        assert!(ConfigValue::from(false).as_f64("k").is_err());
    }

    #[test]
    fn test_parse_custom_type() {
        let value = ConfigValue::from("127.0.0.1");
        let ip: IpAddr = value.parse("test.key").unwrap();
        assert_eq!(ip.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_parse_from_integer() {
        let value = ConfigValue::from(443);
        let port: u16 = value.parse("port").unwrap();
        assert_eq!(port, 443);
    }

    #[test]
    fn test_parse_invalid() {
        let value = ConfigValue::from("not_an_ip");
        let result: Result<IpAddr> = value.parse("test.key");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ConfigValue::from(true).to_string(), "true");
        assert_eq!(ConfigValue::from(-7).to_string(), "-7");
        assert_eq!(ConfigValue::from("  spaces  ").to_string(), "  spaces  ");
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_serde_untagged() {
        let value: ConfigValue = serde_yaml::from_str("8080").unwrap();
        assert_eq!(value, ConfigValue::Integer(8080));

        let value: ConfigValue = serde_yaml::from_str("demo").unwrap();
        assert_eq!(value, ConfigValue::String("demo".to_string()));
    }
}
