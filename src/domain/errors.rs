// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the flattening crate.
//!
//! This module defines the error types that can occur when locating a section,
//! flattening it, loading raw configuration, or delivering the result to a consumer.
//! All errors use `thiserror` for proper error handling and conversion.

use std::num::{ParseFloatError, ParseIntError};
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for flattening operations.
///
/// Every variant is terminal for the operation that produced it: nothing is
/// delivered to the options consumer once an error has been raised. It is marked
/// as `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::errors::ConfigError;
///
/// fn find_section() -> Result<(), ConfigError> {
///     Err(ConfigError::MissingSection {
///         path: "app.database".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key path does not resolve to a nested mapping.
    #[error("Configuration section not found: '{path}'")]
    MissingSection {
        /// The full key path that was requested
        path: String,
    },

    /// The nesting depth left the allowed range while flattening.
    #[error("Configuration nested too deeply at '{prefix}' (depth {depth})")]
    DepthExceeded {
        /// The composite key prefix at which the bound was hit
        prefix: String,
        /// The offending depth
        depth: usize,
    },

    /// The options consumer rejected the flattened configuration.
    #[error("Options consumer '{consumer_name}' error: {message}")]
    ConsumerError {
        /// The name of the consumer that failed
        consumer_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A flattener setting was rejected at build time.
    #[error("Invalid flattener setting '{setting}': {message}")]
    InvalidSetting {
        /// The name of the setting
        setting: String,
        /// Why the value was rejected
        message: String,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred while loading raw configuration.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError for a value whose kind cannot be coerced at all.
    pub fn incompatible(key: String, target_type: &str, found: &str) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: target_type.to_string(),
            source: format!("incompatible {} value", found).into(),
        }
    }

    /// Wraps a consumer failure.
    pub fn consumer(
        consumer_name: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ConfigError::ConsumerError {
            consumer_name: consumer_name.into(),
            message: message.into(),
            source,
        }
    }
}

/// A specialized Result type for flattening operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
