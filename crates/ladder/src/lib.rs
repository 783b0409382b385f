//! Ladder challenge pairing tool
//!
//! This crate wraps `ladder_core` with everything needed to run it:
//! - Loading the ranked ladder from a CSV file
//! - Resolving settings from defaults, a TOML file and the command line
//! - Rendering challenges as text or JSON
//!
//! # Usage
//!
//! ```bash
//! # Pair this week's ladder
//! cargo run -p ladder -- ladder.csv
//!
//! # Reproducible draw with a narrower window
//! cargo run -p ladder -- ladder.csv --seed 7 --max-gap 2 --json
//! ```

mod config;
mod error;
mod loader;
mod report;

pub use config::*;
pub use error::*;
pub use loader::*;
pub use report::*;

use ladder_core::{create_pairings, PairingResult, Player, RngSource};
use std::path::Path;

/// Load a ladder and pair it using the given settings.
pub fn run(path: &Path, config: &LadderConfig) -> Result<(Vec<Player>, PairingResult), LadderError> {
    config.validate()?;
    let players = load_players(path, &config.load_options()?)?;

    let result = match config.seed {
        Some(seed) => create_pairings(&players, config.max_gap, &mut RngSource::seeded(seed)),
        None => create_pairings(&players, config.max_gap, &mut RngSource::thread()),
    };

    Ok((players, result))
}
