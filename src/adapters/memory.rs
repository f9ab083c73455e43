// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory options consumer.
//!
//! Keeps the most recently delivered options in process memory. Useful as the
//! sink for applications that read options back by key, and in tests.

use crate::domain::{ConfigError, ConfigValue, FlatConfig, Result};
use crate::ports::OptionsConsumer;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// An [`OptionsConsumer`] that stores the last delivered options.
///
/// Each delivery replaces the stored options entirely.
///
/// # Examples
///
/// ```rust
/// use nestcfg::adapters::InMemoryOptions;
/// use nestcfg::domain::{ConfigMap, ConfigValue, KeyPath};
/// use nestcfg::service::Flattener;
///
/// let flattener = Flattener::new(InMemoryOptions::new());
/// let raw = ConfigMap::new().with("app", ConfigMap::new().with("debug", true));
/// flattener.apply(&raw, &KeyPath::root()).unwrap();
///
/// let options = flattener.consumer();
/// assert_eq!(options.get("app.debug"), Some(ConfigValue::Bool(true)));
/// assert_eq!(options.load_count(), 1);
/// ```
#[derive(Debug)]
pub struct InMemoryOptions {
    name: String,
    options: RwLock<FlatConfig>,
    loads: AtomicUsize,
}

impl InMemoryOptions {
    /// Creates an empty store named `memory`.
    pub fn new() -> Self {
        Self::named("memory")
    }

    /// Creates an empty store with a custom name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: RwLock::new(FlatConfig::new()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Returns the value currently stored under `key`.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        self.options
            .read()
            .ok()
            .and_then(|options| options.get(key).cloned())
    }

    /// Returns a copy of the stored options.
    pub fn snapshot(&self) -> FlatConfig {
        self.options
            .read()
            .map(|options| options.clone())
            .unwrap_or_default()
    }

    /// Returns how many times options have been delivered.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl Default for InMemoryOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsConsumer for InMemoryOptions {
    fn name(&self) -> &str {
        &self.name
    }

    fn load_options(&self, options: &FlatConfig) -> Result<()> {
        let mut stored = self
            .options
            .write()
            .map_err(|_| ConfigError::consumer(&self.name, "options store lock poisoned", None))?;
        *stored = options.clone();
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
