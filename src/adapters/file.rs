// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file loader.
//!
//! This module reads a configuration document from disk and parses it into a
//! [`RawConfig`], picking the parser from the file extension.

use crate::domain::{ConfigError, RawConfig, Result};
use crate::ports::ConfigParser;
use directories::ProjectDirs;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for configuration files (10MB)
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "config-file";

type BoxedParser = Box<dyn ConfigParser + Send + Sync>;

/// A configuration document loaded from a file.
///
/// # Examples
///
/// ```rust,no_run
/// use nestcfg::adapters::ConfigFile;
///
/// // Parser chosen from the extension
/// let file = ConfigFile::open("/etc/myapp/config.yaml").unwrap();
/// let raw = file.raw();
///
/// // config.yaml in the OS configuration directory
/// let file = ConfigFile::from_default_location("myapp", "com.example").unwrap();
/// ```
pub struct ConfigFile {
    /// Canonical path of the file
    file_path: PathBuf,
    /// Parsed document
    raw: RawConfig,
    /// Parser used for this file
    parser: BoxedParser,
}

impl ConfigFile {
    /// Loads a file, selecting the parser from its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let parser = parser_for(path)?;
        Self::with_parser(path, parser)
    }

    /// Loads a file with an explicit parser, ignoring its extension.
    pub fn with_parser<P: AsRef<Path>>(
        path: P,
        parser: Box<dyn ConfigParser + Send + Sync>,
    ) -> Result<Self> {
        let file_path = path.as_ref();

        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path.canonicalize().map_err(|e| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Invalid or inaccessible path: {}", display_name(file_path)),
            source: Some(Box::new(e)),
        })?;

        let content = read_bounded(&canonical_path)?;
        let raw = parser.parse(&content)?;

        Ok(Self {
            file_path: canonical_path,
            raw,
            parser,
        })
    }

    /// Loads `config.yaml` from the OS-appropriate configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    #[cfg(feature = "yaml")]
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
    }

    /// Loads a named file from the OS-appropriate configuration directory.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::open(proj_dirs.config_dir().join(filename))
    }

    /// Returns the canonical path of the file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the parsed document.
    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }

    /// Consumes the loader and returns the parsed document.
    pub fn into_raw(self) -> RawConfig {
        self.raw
    }

    /// Reads and parses the file again.
    ///
    /// On error the previously loaded document is kept.
    pub fn reload(&mut self) -> Result<()> {
        let content = read_bounded(&self.file_path)?;
        self.raw = self.parser.parse(&content)?;
        tracing::debug!("Reloaded configuration file '{}'", self.file_path.display());
        Ok(())
    }
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("file_path", &self.file_path)
            .field("extensions", &self.parser.supported_extensions())
            .finish()
    }
}

/// Returns the parsers compiled into this build.
fn available_parsers() -> Vec<BoxedParser> {
    let mut parsers: Vec<BoxedParser> = Vec::new();
    #[cfg(feature = "yaml")]
    parsers.push(Box::new(crate::adapters::YamlParser::new()));
    #[cfg(feature = "json")]
    parsers.push(Box::new(crate::adapters::JsonParser::new()));
    parsers
}

fn parser_for(path: &Path) -> Result<BoxedParser> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    available_parsers()
        .into_iter()
        .find(|parser| parser.supported_extensions().contains(&extension.as_str()))
        .ok_or_else(|| ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "No parser available for configuration file: {}",
                display_name(path)
            ),
            source: None,
        })
}

/// Reads a file after checking it against the size limit.
fn read_bounded(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file metadata: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path).map_err(|e| ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read configuration file: {}", display_name(path)),
        source: Some(Box::new(e)),
    })
}

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}
