//! Data model shared by the pairing sweep and its callers.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A single ladder entry.
///
/// Only `name` is used for display. Matching works on the player's position
/// in the ranking, never on anything stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,
    /// Any other columns carried over from the source row
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Attach an extra column value.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// A challenge between two ladder positions.
///
/// `challenger` is always the better-ranked (smaller) index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    pub challenger: usize,
    pub opponent: usize,
}

impl Pairing {
    pub fn new(challenger: usize, opponent: usize) -> Self {
        debug_assert!(challenger < opponent);
        Self {
            challenger,
            opponent,
        }
    }

    /// Number of rungs between the two players
    pub fn gap(&self) -> usize {
        self.opponent - self.challenger
    }

    pub fn contains(&self, index: usize) -> bool {
        self.challenger == index || self.opponent == index
    }
}

impl From<(usize, usize)> for Pairing {
    fn from((challenger, opponent): (usize, usize)) -> Self {
        Self::new(challenger, opponent)
    }
}

/// Where a ladder position ended up after the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Not visited yet and not claimed as anyone's opponent
    Unvisited,
    /// Paired with the given position
    Paired(usize),
    /// Visited with an empty challenge window
    Skipped,
}

impl SlotState {
    pub fn is_unvisited(self) -> bool {
        self == SlotState::Unvisited
    }
}

/// Output of one pairing sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingResult {
    /// Challenges in sweep order (ascending challenger index)
    pub pairings: Vec<Pairing>,
    /// Positions without an opponent, ascending
    pub unmatched: BTreeSet<usize>,
}

impl PairingResult {
    /// True when the ranking was empty.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty() && self.unmatched.is_empty()
    }

    /// Number of positions that received an opponent
    pub fn matched_count(&self) -> usize {
        self.pairings.len() * 2
    }

    /// Total number of positions covered by this result
    pub fn total_players(&self) -> usize {
        self.matched_count() + self.unmatched.len()
    }

    /// Opponent assigned to `index`, if any.
    pub fn opponent_of(&self, index: usize) -> Option<usize> {
        self.pairings.iter().find_map(|p| {
            if p.challenger == index {
                Some(p.opponent)
            } else if p.opponent == index {
                Some(p.challenger)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
