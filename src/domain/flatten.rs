// SPDX-License-Identifier: MIT OR Apache-2.0

//! Section lookup and depth-bounded flattening.
//!
//! These are the pure operations behind [`Flattener`](crate::service::Flattener):
//! [`locate_section`] descends a [`ConfigMap`] along a [`KeyPath`], and [`flatten`]
//! walks a section depth-first, joining keys with a delimiter and collecting
//! scalar leaves into a [`FlatConfig`].

use crate::domain::{ConfigError, ConfigKey, ConfigMap, FlatConfig, KeyPath, RawConfig, Result};

/// Deepest recursion level allowed below the initial call.
pub const MAX_DEPTH: usize = 5;

/// Delimiter used between composite key segments unless configured otherwise.
pub const DEFAULT_DELIMITER: &str = ".";

/// Finds the section of `raw` addressed by `path`.
///
/// An empty path returns `raw` itself. Every segment must name a key whose
/// value is a nested mapping; otherwise the lookup fails with
/// [`ConfigError::MissingSection`] carrying the full requested path.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::{locate_section, ConfigMap, KeyPath};
///
/// let raw = ConfigMap::new().with(
///     "a",
///     ConfigMap::new().with("b", ConfigMap::new().with("x", 1).with("y", 2)),
/// );
///
/// let section = locate_section(&raw, &KeyPath::from("a.b")).unwrap();
/// assert_eq!(section, &ConfigMap::new().with("x", 1).with("y", 2));
///
/// assert!(locate_section(&raw, &KeyPath::from("a.c")).is_err());
/// ```
pub fn locate_section<'a>(raw: &'a ConfigMap, path: &KeyPath) -> Result<&'a ConfigMap> {
    path.segments().try_fold(raw, |section, segment| {
        section
            .get(segment)
            .and_then(RawConfig::as_mapping)
            .ok_or_else(|| ConfigError::MissingSection {
                path: path.as_str().to_string(),
            })
    })
}

/// Finds the section addressed by `path` in an untyped root node.
///
/// A root that is not a mapping contains no sections, so it fails with
/// [`ConfigError::MissingSection`] for any path, including the empty one.
pub fn locate_section_in<'a>(raw: &'a RawConfig, path: &KeyPath) -> Result<&'a ConfigMap> {
    let root = raw
        .as_mapping()
        .ok_or_else(|| ConfigError::MissingSection {
            path: path.as_str().to_string(),
        })?;
    locate_section(root, path)
}

/// Flattens a whole section, starting from depth 0 with an empty prefix.
pub fn flatten_map(map: &ConfigMap, delimiter: &str) -> Result<FlatConfig> {
    flatten(map, "", 0, delimiter)
}

/// Flattens `map` into a fresh [`FlatConfig`].
///
/// `prefix` is prepended to every produced key and must already end with the
/// delimiter when non-empty. `depth` is the recursion level `map` sits at; it
/// fails with [`ConfigError::DepthExceeded`] as soon as a mapping deeper than
/// [`MAX_DEPTH`] is reached, so no partial result escapes.
///
/// Scalar leaves are stored, nested mappings are descended into, and
/// [`RawConfig::Other`] nodes are skipped.
pub fn flatten(map: &ConfigMap, prefix: &str, depth: usize, delimiter: &str) -> Result<FlatConfig> {
    let mut flat = FlatConfig::new();
    flatten_into(map, prefix, depth, delimiter, &mut flat)?;
    Ok(flat)
}

fn flatten_into(
    map: &ConfigMap,
    prefix: &str,
    depth: usize,
    delimiter: &str,
    out: &mut FlatConfig,
) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(ConfigError::DepthExceeded {
            prefix: prefix.to_string(),
            depth,
        });
    }

    for (name, node) in map.iter() {
        match node {
            RawConfig::Mapping(child) => {
                let child_prefix = format!("{}{}{}", prefix, name, delimiter);
                flatten_into(child, &child_prefix, depth + 1, delimiter, out)?;
            }
            RawConfig::Scalar(value) => {
                out.insert(ConfigKey::under(prefix, name), value.clone());
            }
            RawConfig::Other => {
                tracing::trace!("Skipping non-scalar option '{}{}'", prefix, name);
            }
        }
    }

    Ok(())
}
