// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the flattener.
//!
//! This module wires the domain operations to an injected options consumer.

pub mod flattener;

// Re-export commonly used types
pub use flattener::{Flattener, FlattenerBuilder};
