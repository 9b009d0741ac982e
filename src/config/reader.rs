//! Configuration reader
//!
//! Loads the JSON configuration from a file or standard input and validates
//! it into a [`RawConfig`] in one step.

use super::types::RawConfig;
use crate::error::{OperatorError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::error;

/// Where the configuration document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from a file on disk
    File(PathBuf),
    /// Read from standard input
    Stdin,
}

impl ConfigSource {
    /// Resolve the `--config` flag; no flag or `-` means standard input
    pub fn from_flag(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => ConfigSource::File(p),
            _ => ConfigSource::Stdin,
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Configuration reader
pub struct ConfigReader;

impl ConfigReader {
    /// Read and parse the configuration from its source
    pub fn read(source: &ConfigSource) -> Result<RawConfig> {
        match source {
            ConfigSource::File(path) => Self::parse_file(path),
            ConfigSource::Stdin => Self::parse_reader(std::io::stdin().lock()),
        }
    }

    /// Parse configuration from a file
    pub fn parse_file(path: &Path) -> Result<RawConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "Error while reading config file");
            e
        })?;

        Self::parse_str(&content)
    }

    /// Parse configuration from any reader
    pub fn parse_reader<R: Read>(mut reader: R) -> Result<RawConfig> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(|e| {
            error!(error = %e, "Error while reading config from stdin");
            e
        })?;

        Self::parse_str(&content)
    }

    /// Parse configuration from a JSON string
    pub fn parse_str(content: &str) -> Result<RawConfig> {
        serde_json::from_str(content).map_err(|e| {
            error!(error = %e, "Error while unmarshalling config");
            OperatorError::Parse(format!("Failed to parse JSON: {}", e))
        })
    }
}
