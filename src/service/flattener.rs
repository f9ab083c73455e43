// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flattener service.
//!
//! This module provides [`Flattener`], which ties the domain operations together:
//! it locates a section of a nested configuration, flattens it, and delivers the
//! result to the [`OptionsConsumer`] it was constructed with.

use crate::domain::{
    flatten_map, locate_section, locate_section_in, ConfigError, ConfigMap, FlatConfig, KeyPath,
    RawConfig, Result, DEFAULT_DELIMITER,
};
use crate::ports::{ConfigParser, OptionsConsumer};

/// Flattens nested configuration sections and hands them to a consumer.
///
/// The flattener holds no state between calls: every [`apply`](Flattener::apply)
/// builds a fresh [`FlatConfig`], delivers it, and returns it. A single instance
/// can be shared between threads whenever its consumer can.
///
/// # Examples
///
/// ```rust
/// use nestcfg::adapters::InMemoryOptions;
/// use nestcfg::domain::{ConfigMap, ConfigValue};
/// use nestcfg::service::Flattener;
///
/// # fn main() -> nestcfg::domain::Result<()> {
/// let raw = ConfigMap::new()
///     .with("app", ConfigMap::new().with("name", "demo").with("debug", true))
///     .with("port", 8080);
///
/// let flattener = Flattener::new(InMemoryOptions::new());
/// let flat = flattener.apply(&raw, "")?;
///
/// assert_eq!(flat.get("app.name"), Some(&ConfigValue::from("demo")));
/// assert_eq!(flat.get("port"), Some(&ConfigValue::from(8080)));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Flattener<C> {
    /// Sink receiving every successfully flattened section
    consumer: C,
    /// Separator placed between composite key segments
    delimiter: String,
}

impl<C: OptionsConsumer> Flattener<C> {
    /// Creates a flattener delivering to `consumer`, using `.` as delimiter.
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Creates a builder for a flattener delivering to `consumer`.
    pub fn builder(consumer: C) -> FlattenerBuilder<C> {
        FlattenerBuilder::new(consumer)
    }

    /// Returns the composite key delimiter.
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the consumer.
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Consumes the flattener and returns its consumer.
    pub fn into_consumer(self) -> C {
        self.consumer
    }

    /// Flattens a section without delivering it.
    pub fn flatten(&self, section: &ConfigMap) -> Result<FlatConfig> {
        flatten_map(section, &self.delimiter)
    }

    /// Locates the section at `path`, flattens it, and delivers it to the consumer.
    ///
    /// The consumer is called exactly once on success and never on failure.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::MissingSection`] if `path` does not resolve to a mapping
    /// * [`ConfigError::DepthExceeded`] if the section nests too deeply
    /// * whatever error the consumer returns
    pub fn apply(&self, raw: &ConfigMap, path: impl Into<KeyPath>) -> Result<FlatConfig> {
        let path = path.into();
        let section = locate_section(raw, &path)?;
        self.deliver(section, &path)
    }

    /// Like [`apply`](Flattener::apply), for a root node of unknown kind.
    ///
    /// A root that is not a mapping fails with [`ConfigError::MissingSection`].
    pub fn apply_raw(&self, raw: &RawConfig, path: impl Into<KeyPath>) -> Result<FlatConfig> {
        let path = path.into();
        let section = locate_section_in(raw, &path)?;
        self.deliver(section, &path)
    }

    /// Parses `content` with `parser`, then applies the section at `path`.
    pub fn apply_parsed(
        &self,
        parser: &dyn ConfigParser,
        content: &str,
        path: impl Into<KeyPath>,
    ) -> Result<FlatConfig> {
        let raw = parser.parse(content)?;
        self.apply_raw(&raw, path)
    }

    fn deliver(&self, section: &ConfigMap, path: &KeyPath) -> Result<FlatConfig> {
        let options = self.flatten(section)?;
        self.consumer
            .load_options(&options)
            .map_err(|e| match e {
                err @ ConfigError::ConsumerError { .. } => err,
                other => ConfigError::consumer(
                    self.consumer.name(),
                    format!("failed to load {} options", options.len()),
                    Some(Box::new(other)),
                ),
            })?;

        tracing::debug!(
            "Delivered {} options from section '{}' to consumer '{}'",
            options.len(),
            path,
            self.consumer.name()
        );

        Ok(options)
    }
}

/// Builder for constructing a [`Flattener`].
///
/// # Examples
///
/// ```rust
/// use nestcfg::adapters::InMemoryOptions;
/// use nestcfg::domain::ConfigMap;
/// use nestcfg::service::FlattenerBuilder;
///
/// # fn main() -> nestcfg::domain::Result<()> {
/// let flattener = FlattenerBuilder::new(InMemoryOptions::new())
///     .delimiter("__")
///     .build()?;
///
/// let raw = ConfigMap::new().with("db", ConfigMap::new().with("host", "localhost"));
/// let flat = flattener.apply(&raw, "")?;
/// assert!(flat.contains_key("db__host"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FlattenerBuilder<C> {
    consumer: C,
    delimiter: String,
}

impl<C: OptionsConsumer> FlattenerBuilder<C> {
    /// Creates a new builder.
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Sets the composite key delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Builds the flattener.
    ///
    /// Fails with [`ConfigError::InvalidSetting`] if the delimiter is empty.
    pub fn build(self) -> Result<Flattener<C>> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::InvalidSetting {
                setting: "delimiter".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(Flattener {
            consumer: self.consumer,
            delimiter: self.delimiter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryOptions;
    use crate::domain::ConfigValue;
    use std::sync::Arc;
    use std::sync::Mutex;

    /// Records every delivery so tests can inspect call counts and payloads.
    #[derive(Default)]
    struct RecordingConsumer {
        deliveries: Mutex<Vec<FlatConfig>>,
    }

    impl RecordingConsumer {
        fn deliveries(&self) -> Vec<FlatConfig> {
            self.deliveries.lock().unwrap().clone()
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

    struct FailingConsumer;

    impl OptionsConsumer for FailingConsumer {
        fn name(&self) -> &str {
            "failing"
        }

        fn load_options(&self, _options: &FlatConfig) -> Result<()> {
            Err(ConfigError::consumer("failing", "unknown option", None))
        }
    }

    struct StrictConsumer;

    impl OptionsConsumer for StrictConsumer {
        fn name(&self) -> &str {
            "strict"
        }

        fn load_options(&self, _options: &FlatConfig) -> Result<()> {
            Err(ConfigError::InvalidSetting {
                setting: "language".to_string(),
                message: "unsupported value".to_string(),
            })
        }
    }

    fn sample() -> ConfigMap {
        ConfigMap::new()
            .with(
                "app",
                ConfigMap::new()
                    .with("core", ConfigMap::new().with("language", "en").with("debug", false))
                    .with("js", ConfigMap::new().with("minify", true)),
            )
            .with("port", 8080)
    }

    #[test]
    fn test_apply_whole_input() {
        let flattener = Flattener::new(RecordingConsumer::default());
        let flat = flattener.apply(&sample(), "").unwrap();

        assert_eq!(flat.len(), 4);
        assert_eq!(flat.get("app.core.language"), Some(&ConfigValue::from("en")));
        assert_eq!(flat.get("app.js.minify"), Some(&ConfigValue::from(true)));
        assert_eq!(flattener.consumer().deliveries(), vec![flat]);
    }

    #[test]
    fn test_apply_section() {
        let flattener = Flattener::new(RecordingConsumer::default());
        let flat = flattener.apply(&sample(), "app.core").unwrap();

        assert_eq!(flat.len(), 2);
        assert_eq!(flat.get("language"), Some(&ConfigValue::from("en")));
        assert_eq!(flat.get("debug"), Some(&ConfigValue::from(false)));
    }

    #[test]
    fn test_apply_missing_section_skips_consumer() {
        let flattener = Flattener::new(RecordingConsumer::default());
        let err = flattener.apply(&sample(), "app.server").unwrap_err();

        assert!(matches!(err, ConfigError::MissingSection { ref path } if path == "app.server"));
        assert!(flattener.consumer().deliveries().is_empty());
    }

    #[test]
    fn test_apply_too_deep_skips_consumer() {
        let deep = (0..6).fold(ConfigMap::new().with("leaf", 1), |inner, i| {
            ConfigMap::new().with(format!("l{}", i), inner)
        });
        let raw = deep.with("shallow", "kept?");

        let flattener = Flattener::new(RecordingConsumer::default());
        let err = flattener.apply(&raw, KeyPath::root()).unwrap_err();

        assert!(matches!(err, ConfigError::DepthExceeded { depth: 6, .. }));
        assert!(flattener.consumer().deliveries().is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let flattener = Flattener::new(RecordingConsumer::default());
        let first = flattener.apply(&sample(), "app").unwrap();
        let second = flattener.apply(&sample(), "app").unwrap();

        assert_eq!(first, second);
        let deliveries = flattener.consumer().deliveries();
        assert_eq!(deliveries.len(), 2);
        assert_eq!(deliveries[0], deliveries[1]);
    }

    #[test]
    fn test_apply_does_not_accumulate() {
        let flattener = Flattener::new(InMemoryOptions::new());
        flattener.apply(&ConfigMap::new().with("a", 1), "").unwrap();
        let flat = flattener.apply(&ConfigMap::new().with("b", 2), "").unwrap();

        assert_eq!(flat.len(), 1);
        assert!(!flat.contains_key("a"));
        assert_eq!(flattener.consumer().get("a"), None);
    }

    #[test]
    fn test_apply_consumer_error_propagates() {
        let flattener = Flattener::new(FailingConsumer);
        let err = flattener.apply(&sample(), "").unwrap_err();
        assert!(matches!(err, ConfigError::ConsumerError { .. }));
    }

    #[test]
    fn test_apply_wraps_other_consumer_errors() {
        let flattener = Flattener::new(StrictConsumer);
        let err = flattener.apply(&sample(), "app.core").unwrap_err();

        match err {
            ConfigError::ConsumerError {
                consumer_name,
                source,
                ..
            } => {
                assert_eq!(consumer_name, "strict");
                let source = source.unwrap();
                assert!(matches!(
                    source.downcast_ref::<ConfigError>(),
                    Some(ConfigError::InvalidSetting { .. })
                ));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_apply_raw_non_mapping_root() {
        let flattener = Flattener::new(RecordingConsumer::default());
        let err = flattener.apply_raw(&RawConfig::Other, "").unwrap_err();

        assert!(matches!(err, ConfigError::MissingSection { .. }));
        assert!(flattener.consumer().deliveries().is_empty());
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_apply_parsed() {
        let parser = crate::adapters::YamlParser::new();
        let flattener = Flattener::new(RecordingConsumer::default());
        let flat = flattener
            .apply_parsed(&parser, "a:\n  b:\n    x: 1\n    y: 2\n", "a.b")
            .unwrap();

        assert_eq!(flat.get("x"), Some(&ConfigValue::from(1)));
        assert_eq!(flat.get("y"), Some(&ConfigValue::from(2)));
    }

    #[test]
    fn test_shared_consumer_through_arc() {
        let store = Arc::new(InMemoryOptions::new());
        let flattener = Flattener::new(Arc::clone(&store));
        flattener.apply(&sample(), "app.js").unwrap();

        assert_eq!(store.get("minify"), Some(ConfigValue::Bool(true)));
    }

    #[test]
    fn test_builder_custom_delimiter() {
        let flattener = Flattener::builder(RecordingConsumer::default())
            .delimiter("::")
            .build()
            .unwrap();
        let flat = flattener.apply(&sample(), "app").unwrap();

        assert_eq!(flattener.delimiter(), "::");
        assert!(flat.contains_key("core::language"));
    }

    #[test]
    fn test_builder_rejects_empty_delimiter() {
        let result = Flattener::builder(RecordingConsumer::default())
            .delimiter("")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSetting { .. })));
    }

    #[test]
    fn test_into_consumer() {
        let flattener = Flattener::new(InMemoryOptions::named("sink"));
        flattener.apply(&sample(), "").unwrap();

        let store = flattener.into_consumer();
        assert_eq!(store.name(), "sink");
        assert_eq!(store.load_count(), 1);
    }
}
