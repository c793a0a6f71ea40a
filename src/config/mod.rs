// src/config/mod.rs
pub mod types;

pub use self::types::{Config, CsvConfig, GraphConfig, OutputConfig, OutputFormat};

use crate::error::{Result, RouteError};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "routegraph.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from `routegraph.toml` in the working directory.
    ///
    /// A missing file yields defaults; an unreadable or invalid one is logged
    /// and also yields defaults.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }
        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Self::new()
            }
        }
    }

    /// Reads and parses `path` strictly.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, `Config` if it is not valid TOML.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| RouteError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
    }

    /// # Errors
    /// Returns `Config` if `content` is not a valid config document.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert!(c.graph.directed);
        assert_eq!(c.csv.delimiter, ',');
        assert!(c.csv.has_headers);
        assert_eq!(c.output.format, OutputFormat::Text);
        assert_eq!(c.output.precision, 2);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let c = Config::parse_toml("[graph]\ndirected = false\n").unwrap();
        assert!(!c.graph.directed);
        assert!(c.csv.has_headers);
    }

    #[test]
    fn test_invalid_document() {
        let err = Config::parse_toml("[output]\nformat = \"xml\"\n").unwrap_err();
        assert!(matches!(err, RouteError::Config(_)));
    }

    #[test]
    fn test_csv_options() {
        let c = Config::parse_toml("[csv]\ndelimiter = \";\"\nhas_headers = false\n").unwrap();
        let opts = c.csv.options();
        assert_eq!(opts.delimiter, b';');
        assert!(!opts.has_headers);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = Config::parse_toml("[csv]\ndelimiter = \"→\"\n").unwrap_err();
        assert!(matches!(err, RouteError::Config(_)), "{err}");
    }

    #[test]
    fn test_non_ascii_delimiter_falls_back() {
        let c = CsvConfig {
            delimiter: '→',
            has_headers: true,
        };
        assert_eq!(c.options().delimiter, b',');
    }

    #[test]
    fn test_round_trip_toml() {
        let c = Config::parse_toml("[output]\nformat = \"json\"\nprecision = 4\n").unwrap();
        let back = Config::parse_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(back, c);
    }
}
