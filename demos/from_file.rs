// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loads a YAML document and applies one of its sections.
//!
//! To run this example:
//! ```bash
//! cargo run --example from_file -- config.yaml app.core
//! ```
//!
//! Without arguments a built-in document is used.

use nestcfg::prelude::*;

const SAMPLE: &str = r#"
app:
  core:
    language: en
    encoding: UTF-8
    request:
      uri: /ajax
    debug:
      on: false
  js:
    lib:
      uri: /js
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let file = args.next();
    let section = args.next().unwrap_or_else(|| "app.core".to_string());

    let flattener = Flattener::new(InMemoryOptions::new());
    let options = match file {
        Some(path) => {
            let loaded = ConfigFile::open(&path)?;
            println!("Loaded {}", loaded.file_path().display());
            flattener.apply_raw(loaded.raw(), section.as_str())?
        }
        None => flattener.apply_parsed(&YamlParser::new(), SAMPLE, section.as_str())?,
    };

    println!("Section '{}':", section);
    for (key, value) in options.sorted() {
        println!("  {} = {}", key, value);
    }
    Ok(())
}
