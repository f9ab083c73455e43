// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the traits at the edges of the crate: where nested
//! configuration comes in (`ConfigParser`) and where flattened options go out
//! (`OptionsConsumer`). Adapters implement them.

pub mod consumer;
pub mod parser;

// Re-export commonly used types
pub use consumer::OptionsConsumer;
pub use parser::ConfigParser;
