//! Ranked ladder loading from CSV
//!
//! The file must have a header row. Rows are taken in file order, which is
//! the ladder order (first data row = rank 1). Rows without a name are
//! dropped before the ladder reaches the pairing step.

use ladder_core::Player;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::LoadError;

/// Default column holding the player's name
pub const DEFAULT_NAME_COLUMN: &str = "Player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub name_column: String,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

/// Read the ladder from a CSV file.
pub fn load_players(path: &Path, options: &LoadOptions) -> Result<Vec<Player>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let players = read_players(file, options)?;
    info!(path = %path.display(), players = players.len(), "loaded ladder");
    Ok(players)
}

/// Read the ladder from any CSV source.
pub fn read_players<R: Read>(source: R, options: &LoadOptions) -> Result<Vec<Player>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let name_index = headers
        .iter()
        .position(|h| h == options.name_column.trim())
        .ok_or_else(|| LoadError::MissingColumn {
            column: options.name_column.clone(),
            found: headers.join(", "),
        })?;

    let mut players = Vec::new();
    for record in reader.records() {
        let record = record?;

        let name = record.get(name_index).map(str::trim).unwrap_or_default();
        if name.is_empty() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            debug!(line, "skipping row without a name");
            continue;
        }

        let mut player = Player::new(name);
        for (column, (header, value)) in headers.iter().zip(record.iter()).enumerate() {
            let value = value.trim();
            if column == name_index || header.is_empty() || value.is_empty() {
                continue;
            }
            player.attributes.insert(header.clone(), value.to_string());
        }
        players.push(player);
    }

    Ok(players)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
