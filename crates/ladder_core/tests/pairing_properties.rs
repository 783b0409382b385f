//! Structural checks for the pairing sweep
//!
//! Runs the sweep across many ladder sizes, gaps and seeds and verifies that
//! every result is a valid partition of the ladder:
//! - No position appears in more than one challenge
//! - Every challenge stays inside the challenge window
//! - Challenges and sit-outs together cover every position exactly once

use ladder_core::{create_pairings, PairingResult, RngSource, DEFAULT_MAX_GAP};
use std::collections::BTreeSet;

fn assert_valid(result: &PairingResult, total: usize, max_gap: usize) {
    let mut seen = BTreeSet::new();

    for pairing in &result.pairings {
        assert!(pairing.challenger < pairing.opponent);
        assert!(
            (1..=max_gap).contains(&pairing.gap()),
            "gap {} outside window {}",
            pairing.gap(),
            max_gap
        );
        assert!(seen.insert(pairing.challenger), "{} paired twice", pairing.challenger);
        assert!(seen.insert(pairing.opponent), "{} paired twice", pairing.opponent);
    }

    for &index in &result.unmatched {
        assert!(!seen.contains(&index), "{} both paired and unmatched", index);
    }

    let covered: BTreeSet<usize> = seen.union(&result.unmatched).copied().collect();
    let expected: BTreeSet<usize> = (0..total).collect();
    assert_eq!(covered, expected);
}

// =============================================================================
// Partition properties
// =============================================================================

#[test]
fn test_results_partition_the_ladder() {
    for total in 0..25 {
        let players: Vec<usize> = (0..total).collect();
        for max_gap in 1..7 {
            for seed in 0..20 {
                let result = create_pairings(&players, max_gap, &mut RngSource::seeded(seed));
                assert_valid(&result, total, max_gap);
            }
        }
    }
}

#[test]
fn test_thread_rng_results_are_valid() {
    let players: Vec<usize> = (0..50).collect();
    let mut rng = RngSource::thread();
    for _ in 0..100 {
        let result = create_pairings(&players, DEFAULT_MAX_GAP, &mut rng);
        assert_valid(&result, players.len(), DEFAULT_MAX_GAP);
    }
}

#[test]
fn test_gap_of_one_pairs_neighbours() {
    let players: Vec<usize> = (0..9).collect();
    let result = create_pairings(&players, 1, &mut RngSource::seeded(3));
    let pairs: Vec<(usize, usize)> = result
        .pairings
        .iter()
        .map(|p| (p.challenger, p.opponent))
        .collect();
    assert_eq!(pairs, vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
    assert_eq!(result.unmatched.into_iter().collect::<Vec<_>>(), vec![8]);
}

// =============================================================================
// Reproducibility
// =============================================================================

#[test]
fn test_same_seed_same_pairings() {
    let players: Vec<usize> = (0..30).collect();
    for seed in 0..10 {
        let a = create_pairings(&players, DEFAULT_MAX_GAP, &mut RngSource::seeded(seed));
        let b = create_pairings(&players, DEFAULT_MAX_GAP, &mut RngSource::seeded(seed));
        assert_eq!(a, b);
    }
}

#[test]
fn test_different_seeds_vary() {
    let players: Vec<usize> = (0..30).collect();
    let outcomes: BTreeSet<Vec<(usize, usize)>> = (0..20)
        .map(|seed| {
            create_pairings(&players, DEFAULT_MAX_GAP, &mut RngSource::seeded(seed))
                .pairings
                .iter()
                .map(|p| (p.challenger, p.opponent))
                .collect()
        })
        .collect();
    assert!(outcomes.len() > 1, "twenty seeds should not all agree");
}
