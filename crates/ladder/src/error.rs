//! Error types for loading, configuration and reporting

use std::path::PathBuf;
use thiserror::Error;

/// Failure while reading the ranked ladder.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("header has no `{column}` column (found: {found})")]
    MissingColumn { column: String, found: String },
}

/// Invalid settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("max_gap must be at least 1")]
    ZeroGap,
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    BadDelimiter(String),
    #[error("name column must not be empty")]
    EmptyNameColumn,
}

/// Failure while rendering output.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("pairing refers to position {index} but the ladder has {total} players")]
    UnknownPosition { index: usize, total: usize },
}

#[derive(Debug, Error)]
pub enum LadderError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Report(#[from] ReportError),
}
