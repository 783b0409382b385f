use super::*;

#[test]
fn test_nearest_always_first() {
    let mut source = Nearest;
    assert_eq!(source.pick(1), 0);
    assert_eq!(source.pick(7), 0);
}

#[test]
fn test_rng_source_stays_in_range() {
    let mut source = RngSource::thread();
    for len in 1..20 {
        for _ in 0..50 {
            assert!(source.pick(len) < len);
        }
    }
}

#[test]
fn test_seeded_source_is_repeatable() {
    let mut a = RngSource::seeded(42);
    let mut b = RngSource::seeded(42);

    let first: Vec<usize> = (0..32).map(|_| a.pick(4)).collect();
    let second: Vec<usize> = (0..32).map(|_| b.pick(4)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_seeded_source_covers_all_candidates() {
    let mut source = RngSource::seeded(7);
    let mut seen = [false; 4];
    for _ in 0..200 {
        seen[source.pick(4)] = true;
    }
    assert!(seen.iter().all(|&s| s), "uniform choice should reach every slot");
}

#[test]
fn test_mut_reference_forwards() {
    fn draw(mut source: impl RandomSource) -> usize {
        source.pick(3)
    }

    let mut nearest = Nearest;
    assert_eq!(draw(&mut nearest), 0);
}
