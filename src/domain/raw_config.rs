// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nested, caller-supplied configuration trees.
//!
//! A [`RawConfig`] is a tree of mappings and scalar leaves. Anything that is
//! neither (a null, a tagged document node, ...) is kept as [`RawConfig::Other`]
//! so the flattener can decide what to do with it.

use crate::domain::ConfigValue;
use indexmap::IndexMap;

/// A node of a nested configuration tree.
#[derive(Clone, Debug, PartialEq)]
pub enum RawConfig {
    /// A scalar leaf.
    Scalar(ConfigValue),
    /// A nested mapping.
    Mapping(ConfigMap),
    /// Any other kind of node. Never stored when flattening.
    Other,
}

impl RawConfig {
    /// Returns the nested mapping if this node is one.
    pub fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            RawConfig::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the scalar if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&ConfigValue> {
        match self {
            RawConfig::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for [`RawConfig::Other`] nodes.
    pub fn is_other(&self) -> bool {
        matches!(self, RawConfig::Other)
    }
}

impl From<ConfigMap> for RawConfig {
    fn from(map: ConfigMap) -> Self {
        RawConfig::Mapping(map)
    }
}

impl From<ConfigValue> for RawConfig {
    fn from(value: ConfigValue) -> Self {
        RawConfig::Scalar(value)
    }
}

impl From<&str> for RawConfig {
    fn from(s: &str) -> Self {
        RawConfig::Scalar(s.into())
    }
}

impl From<String> for RawConfig {
    fn from(s: String) -> Self {
        RawConfig::Scalar(s.into())
    }
}

impl From<bool> for RawConfig {
    fn from(b: bool) -> Self {
        RawConfig::Scalar(b.into())
    }
}

impl From<i64> for RawConfig {
    fn from(n: i64) -> Self {
        RawConfig::Scalar(n.into())
    }
}

impl From<i32> for RawConfig {
    fn from(n: i32) -> Self {
        RawConfig::Scalar(n.into())
    }
}

impl From<f64> for RawConfig {
    fn from(f: f64) -> Self {
        RawConfig::Scalar(f.into())
    }
}

impl<T: Into<RawConfig>> From<Option<T>> for RawConfig {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawConfig::Other, Into::into)
    }
}

/// An insertion-ordered mapping from string keys to [`RawConfig`] nodes.
///
/// Entries are visited in the order they were first inserted; inserting an
/// existing key replaces its value in place.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{ConfigMap, RawConfig};
///
/// let config = ConfigMap::new()
///     .with("app", ConfigMap::new().with("name", "demo").with("debug", true))
///     .with("port", 8080);
///
/// assert_eq!(config.len(), 2);
/// assert!(config.get("app").and_then(RawConfig::as_mapping).is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigMap {
    entries: IndexMap<String, RawConfig>,
}

impl ConfigMap {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the previous value for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<RawConfig>,
    ) -> Option<RawConfig> {
        self.entries.insert(key.into(), value.into())
    }

    /// Inserts an entry and returns the mapping, for building trees inline.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<RawConfig>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the node stored under `key`.
    pub fn get(&self, key: &str) -> Option<&RawConfig> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawConfig)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<RawConfig>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
