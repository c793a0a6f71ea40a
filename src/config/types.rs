use serde::{Deserialize, Deserializer, Serialize};

use crate::ingest::CsvOptions;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphConfig {
    #[serde(default = "default_true")]
    pub directed: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { directed: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CsvConfig {
    #[serde(default = "default_delimiter", deserialize_with = "ascii_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_true")]
    pub has_headers: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_headers: true,
        }
    }
}

impl CsvConfig {
    /// Parser options. A non-ASCII delimiter (only possible when built in
    /// code, the parser rejects it) is replaced by a comma with a warning.
    #[must_use]
    pub fn options(&self) -> CsvOptions {
        let delimiter = u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or_else(|| {
                tracing::warn!(delimiter = %self.delimiter, "non-ASCII delimiter, using ','");
                b','
            });
        CsvOptions {
            delimiter,
            has_headers: self.has_headers,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: default_precision(),
        }
    }
}

fn ascii_delimiter<'de, D: Deserializer<'de>>(deserializer: D) -> Result<char, D::Error> {
    let delimiter = char::deserialize(deserializer)?;
    if delimiter.is_ascii() {
        Ok(delimiter)
    } else {
        Err(serde::de::Error::custom(format!(
            "delimiter '{delimiter}' must be a single ASCII character"
        )))
    }
}

const fn default_true() -> bool { true }
const fn default_delimiter() -> char { ',' }
const fn default_precision() -> usize { 2 }

/// Contents of `routegraph.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub csv: CsvConfig,
    #[serde(default)]
    pub output: OutputConfig,
}
