// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the flattening crate.
//!
//! This example demonstrates:
//! - Building a nested configuration tree
//! - Flattening the whole tree and a single section
//! - Reading typed values back from the consumer
//! - The errors raised for missing sections and deep nesting
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use nestcfg::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== nestcfg: Basic Usage ===\n");

    let raw = ConfigMap::new()
        .with(
            "app",
            ConfigMap::new()
                .with("name", "demo")
                .with("debug", true)
                .with("timeout", 30.5),
        )
        .with("port", 8080)
        .with("unset", RawConfig::Other);

    let store = Arc::new(InMemoryOptions::new());
    let flattener = Flattener::new(Arc::clone(&store));

    // Example 1: flatten everything
    println!("--- Example 1: Whole input ---");
    let options = flattener.apply(&raw, "")?;
    for (key, value) in options.sorted() {
        println!("  {} = {}", key, value);
    }

    // Example 2: typed access through the consumer
    println!("\n--- Example 2: Typed values ---");
    if let Some(port) = store.get("port") {
        println!("  port as u64: {}", port.as_u64("port")?);
    }
    if let Some(debug) = store.get("app.debug") {
        println!("  app.debug as bool: {}", debug.as_bool("app.debug")?);
    }

    // Example 3: flatten a single section
    println!("\n--- Example 3: Section 'app' ---");
    let options = flattener.apply(&raw, "app")?;
    for (key, value) in options.sorted() {
        println!("  {} = {}", key, value);
    }

    // Example 4: errors
    println!("\n--- Example 4: Errors ---");
    match flattener.apply(&raw, "app.missing") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {}", e),
    }

    let too_deep = (0..7).fold(ConfigMap::new().with("leaf", 1), |inner, i| {
        ConfigMap::new().with(format!("level{}", i), inner)
    });
    match flattener.apply(&too_deep, "") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {}", e),
    }

    println!("\nConsumer received {} deliveries.", store.load_count());
    Ok(())
}
