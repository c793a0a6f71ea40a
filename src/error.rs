// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid edge {source_node} -> {target} (weight {weight}): {reason}")]
    Validation {
        source_node: String,
        target: String,
        weight: f64,
        reason: &'static str,
    },

    #[error("unknown node '{0}'")]
    UnknownNode(String),

    /// The predecessor walk from `target` back to `source_node` did not close.
    #[error("predecessor chain for {source_node} -> {target} did not terminate after {steps} steps")]
    InconsistentPredecessors {
        source_node: String,
        target: String,
        steps: usize,
    },

    #[error("malformed edge row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RouteError>;

// Allow `?` on std::io::Error by converting to RouteError::Io with unknown path.
impl From<std::io::Error> for RouteError {
    fn from(source: std::io::Error) -> Self {
        RouteError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl RouteError {
    /// True for errors caused by bad input rather than I/O or engine defects.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::MalformedRow { .. } | Self::Csv(_) | Self::Config(_)
        )
    }
}
