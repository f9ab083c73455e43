// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use nestcfg::domain::{ConfigError, ConfigMap, FlatConfig, Result};
use nestcfg::ports::OptionsConsumer;
use std::sync::Mutex;

/// A consumer that records every delivery.
#[derive(Default)]
pub struct RecordingConsumer {
    deliveries: Mutex<Vec<FlatConfig>>,
}

#[allow(dead_code)]
impl RecordingConsumer {
    /// Returns every delivery so far, oldest first.
    pub fn deliveries(&self) -> Vec<FlatConfig> {
        self.deliveries.lock().unwrap().clone()
    }

    /// Returns how many times the consumer was called.
    pub fn calls(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

impl OptionsConsumer for RecordingConsumer {
    fn name(&self) -> &str {
        "recording"
    }

    fn load_options(&self, options: &FlatConfig) -> Result<()> {
        self.deliveries.lock().unwrap().push(options.clone());
        Ok(())
    }
}

/// A consumer that rejects every delivery.
#[allow(dead_code)]
pub struct RejectingConsumer;

impl OptionsConsumer for RejectingConsumer {
    fn name(&self) -> &str {
        "rejecting"
    }

    fn load_options(&self, _options: &FlatConfig) -> Result<()> {
        Err(ConfigError::consumer(self.name(), "options refused", None))
    }
}

/// Builds `{level1: {level2: ... {leaf: 1}}}` with `levels` nested mappings.
#[allow(dead_code)]
pub fn nested(levels: usize) -> ConfigMap {
    (0..levels).fold(ConfigMap::new().with("leaf", 1), |inner, i| {
        ConfigMap::new().with(format!("level{}", levels - i), inner)
    })
}
