//! Settings for a pairing run.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! command-line flags. Every key in the file is optional:
//!
//! ```toml
//! max_gap = 4
//! seed = 2024
//! name_column = "Player"
//! delimiter = ","
//! ```

use ladder_core::DEFAULT_MAX_GAP;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::loader::{LoadOptions, DEFAULT_NAME_COLUMN};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LadderConfig {
    /// How far down the ladder a player may challenge
    pub max_gap: usize,
    /// Seed for a reproducible draw (None = different every run)
    pub seed: Option<u64>,
    /// CSV column holding the player's name
    pub name_column: String,
    /// CSV field separator
    pub delimiter: String,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
            seed: None,
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            delimiter: ",".to_string(),
        }
    }
}

impl LadderConfig {
    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_gap == 0 {
            return Err(ConfigError::ZeroGap);
        }
        if self.name_column.trim().is_empty() {
            return Err(ConfigError::EmptyNameColumn);
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// Loader settings derived from this config
    pub fn load_options(&self) -> Result<LoadOptions, ConfigError> {
        Ok(LoadOptions {
            name_column: self.name_column.clone(),
            delimiter: self.delimiter_byte()?,
        })
    }

    fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        match self.delimiter.as_bytes() {
            [byte] if byte.is_ascii() => Ok(*byte),
            _ if self.delimiter == "\\t" => Ok(b'\t'),
            _ => Err(ConfigError::BadDelimiter(self.delimiter.clone())),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
