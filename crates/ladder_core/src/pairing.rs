//! Greedy challenge pairing over a ranked ladder.
//!
//! Positions are visited top to bottom. Each position that has not already
//! been claimed picks a random unclaimed opponent from the next `max_gap`
//! rungs. If none is left, the position sits out this round. Earlier choices
//! are never revisited, so the result is not guaranteed to pair as many
//! players as possible.

use tracing::{debug, info};

use crate::random::RandomSource;
use crate::types::{Pairing, PairingResult, SlotState};

/// How far down the ladder a player may challenge
pub const DEFAULT_MAX_GAP: usize = 4;

/// Pair up a ranked list of players.
///
/// `players[0]` is the top of the ladder. Only the ordering matters; the
/// records themselves are never inspected.
///
/// A `max_gap` of zero gives every position an empty window, so everyone ends
/// up unmatched.
pub fn create_pairings<T, R>(players: &[T], max_gap: usize, rng: &mut R) -> PairingResult
where
    R: RandomSource + ?Sized,
{
    pair_positions(players.len(), max_gap, rng)
}

/// Same as [`create_pairings`], working from the ladder length alone.
pub fn pair_positions<R>(total: usize, max_gap: usize, rng: &mut R) -> PairingResult
where
    R: RandomSource + ?Sized,
{
    let mut slots = vec![SlotState::Unvisited; total];
    let mut pairings = Vec::with_capacity(total / 2);

    for index in 0..total {
        if !slots[index].is_unvisited() {
            continue;
        }

        let window = eligible_opponents(total, index, max_gap, &slots);
        if window.is_empty() {
            debug!(index, "no eligible opponent, sitting out");
            slots[index] = SlotState::Skipped;
            continue;
        }

        let opponent = window[rng.pick(window.len())];
        debug!(index, opponent, candidates = window.len(), "paired");
        slots[index] = SlotState::Paired(opponent);
        slots[opponent] = SlotState::Paired(index);
        pairings.push(Pairing::new(index, opponent));
    }

    let unmatched = slots
        .iter()
        .enumerate()
        .filter(|(_, slot)| **slot == SlotState::Skipped)
        .map(|(index, _)| index)
        .collect();

    let result = PairingResult {
        pairings,
        unmatched,
    };
    info!(
        players = total,
        max_gap,
        pairings = result.pairings.len(),
        unmatched = result.unmatched.len(),
        "pairing sweep complete"
    );
    result
}

/// Unclaimed positions within `max_gap` rungs below `index`, nearest first.
pub fn eligible_opponents(
    total: usize,
    index: usize,
    max_gap: usize,
    slots: &[SlotState],
) -> Vec<usize> {
    let start = index + 1;
    let end = index.saturating_add(max_gap).saturating_add(1).min(total);
    (start..end).filter(|&j| slots[j].is_unvisited()).collect()
}

/// Pairing settings bundled for repeated use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairingGenerator {
    max_gap: usize,
}

impl PairingGenerator {
    pub fn new(max_gap: usize) -> Self {
        Self { max_gap }
    }

    pub fn max_gap(&self) -> usize {
        self.max_gap
    }

    /// Run one sweep over `players`.
    pub fn generate<T, R>(&self, players: &[T], rng: &mut R) -> PairingResult
    where
        R: RandomSource + ?Sized,
    {
        create_pairings(players, self.max_gap, rng)
    }
}

impl Default for PairingGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GAP)
    }
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
