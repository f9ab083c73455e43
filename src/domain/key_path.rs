// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dotted key paths addressing a section of a raw configuration.

use std::fmt;

/// Separator between the segments of a [`KeyPath`].
pub const PATH_SEPARATOR: char = '.';

/// A dot-delimited path into a [`RawConfig`](crate::domain::RawConfig).
///
/// Empty segments are ignored, so `""`, `"."` and `"a..b"` are valid and address
/// the root, the root, and `a` → `b` respectively. The original string is kept
/// verbatim for error reporting.
///
/// # Examples
///
/// ```
/// use nestcfg::domain::KeyPath;
///
/// let path = KeyPath::from("app.core");
/// assert_eq!(path.segments().collect::<Vec<_>>(), vec!["app", "core"]);
/// assert!(KeyPath::root().is_root());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPath {
    raw: String,
}

impl KeyPath {
    /// Creates a path from its dotted string form.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The path addressing the whole input.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the non-empty segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split(PATH_SEPARATOR).filter(|s| !s.is_empty())
    }

    /// Returns `true` if the path has no non-empty segment.
    pub fn is_root(&self) -> bool {
        self.segments().next().is_none()
    }

    /// Returns the path exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
