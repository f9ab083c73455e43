// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattened option maps.

use crate::domain::{ConfigKey, ConfigValue};
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::{BTreeMap, HashMap};

/// A flat mapping from composite keys to scalar values.
///
/// Values are looked up by key; iteration order is unspecified. Use
/// [`FlatConfig::sorted`] when a stable order is needed.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{ConfigMap, FlatConfig, flatten_map};
///
/// let raw = ConfigMap::new()
///     .with("app", ConfigMap::new().with("name", "demo"))
///     .with("port", 8080);
/// let flat: FlatConfig = flatten_map(&raw, ".").unwrap();
///
/// assert_eq!(flat.get("app.name").and_then(|v| v.as_str()), Some("demo"));
/// assert_eq!(flat.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatConfig {
    values: HashMap<ConfigKey, ConfigValue>,
}

impl FlatConfig {
    /// Creates an empty flat configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: ConfigKey, value: ConfigValue) {
        self.values.insert(key, value);
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no options.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over all keys.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.values.keys()
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, ConfigKey, ConfigValue> {
        self.values.iter()
    }

    /// Returns the entries ordered by key.
    pub fn sorted(&self) -> BTreeMap<&str, &ConfigValue> {
        self.values.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }

    /// Consumes the configuration and returns the underlying map.
    pub fn into_inner(self) -> HashMap<ConfigKey, ConfigValue> {
        self.values
    }
}

impl<'a> IntoIterator for &'a FlatConfig {
    type Item = (&'a ConfigKey, &'a ConfigValue);
    type IntoIter = hash_map::Iter<'a, ConfigKey, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for FlatConfig {
    type Item = (ConfigKey, ConfigValue);
    type IntoIter = hash_map::IntoIter<ConfigKey, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for FlatConfig
where
    K: Into<ConfigKey>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
