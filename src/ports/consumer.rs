// SPDX-License-Identifier: MIT OR Apache-2.0

//! Options consumer trait definition.
//!
//! This module defines the `OptionsConsumer` trait, the port through which a
//! flattened configuration leaves the crate. The consumer is whatever system
//! ultimately applies the options; the flattener treats it as an opaque sink.

use crate::domain::{FlatConfig, Result};
use std::sync::Arc;

/// A sink that accepts resolved, flattened options.
///
/// A consumer is called at most once per [`Flattener::apply`](crate::service::Flattener::apply),
/// and only after the whole section has been flattened successfully.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single flattener can be shared
/// across threads. Consumers that record state should use interior mutability.
///
/// # Examples
///
/// ```rust
/// use nestcfg::domain::{FlatConfig, Result};
/// use nestcfg::ports::OptionsConsumer;
///
/// struct PrintConsumer;
///
/// impl OptionsConsumer for PrintConsumer {
///     fn name(&self) -> &str {
///         "print"
///     }
///
///     fn load_options(&self, options: &FlatConfig) -> Result<()> {
///         for (key, value) in options.sorted() {
///             println!("{} = {}", key, value);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait OptionsConsumer: Send + Sync {
    /// Returns the name of this consumer.
    ///
    /// Used in logs and in [`ConsumerError`](crate::domain::ConfigError::ConsumerError).
    fn name(&self) -> &str;

    /// Loads a complete set of resolved options.
    ///
    /// The map is the full result of one flatten pass; it never contains
    /// leftovers from an earlier call.
    fn load_options(&self, options: &FlatConfig) -> Result<()>;
}

impl<C: OptionsConsumer + ?Sized> OptionsConsumer for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load_options(&self, options: &FlatConfig) -> Result<()> {
        (**self).load_options(options)
    }
}

impl<C: OptionsConsumer + ?Sized> OptionsConsumer for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load_options(&self, options: &FlatConfig) -> Result<()> {
        (**self).load_options(options)
    }
}

impl<C: OptionsConsumer + ?Sized> OptionsConsumer for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load_options(&self, options: &FlatConfig) -> Result<()> {
        (**self).load_options(options)
    }
}
