//! Integration tests for weighted tables
//!
//! Tests table construction, deterministic ordering, and draws.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use supermind_foundation::{ErrorKind, PROBABILITY_TOLERANCE, WeightedTable, choose_uniform};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn cumulative_is_monotonic_and_ends_at_one() {
    let table = WeightedTable::build("t", [(0.2, "a"), (0.5, "b"), (0.3, "c")]).unwrap();
    let cumulative: Vec<f64> = table.iter().map(|(c, _)| c).collect();
    assert!(cumulative.windows(2).all(|w| w[0] < w[1]));
    assert!((table.total() - 1.0).abs() <= PROBABILITY_TOLERANCE);
}

#[test]
fn order_does_not_depend_on_authoring_order() {
    let a = WeightedTable::build("t", [(0.25, 1), (0.25, 2), (0.5, 3)]).unwrap();
    let b = WeightedTable::build("t", [(0.5, 3), (0.25, 2), (0.25, 1)]).unwrap();
    assert_eq!(a, b);
    // highest probability first, ties by value descending
    assert_eq!(a.values().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn sum_within_tolerance_is_accepted() {
    assert!(WeightedTable::build("t", [(0.5, 'a'), (0.4995, 'b')]).is_ok());
}

#[test]
fn bad_tables_are_rejected_at_build_time() {
    let sum = WeightedTable::build("short", [(0.5, 'a'), (0.4, 'b')]).unwrap_err();
    assert!(matches!(sum.kind, ErrorKind::ProbabilitySum { .. }));

    let negative = WeightedTable::build("neg", [(1.5, 'a'), (-0.5, 'b')]).unwrap_err();
    assert!(matches!(negative.kind, ErrorKind::InvalidProbability { .. }));

    let empty = WeightedTable::<char>::build("empty", []).unwrap_err();
    assert!(matches!(empty.kind, ErrorKind::EmptyTable(_)));
}

// =============================================================================
// Draws
// =============================================================================

#[test]
fn pick_returns_first_entry_exceeding_draw() {
    let table = WeightedTable::build("t", [(0.7, "common"), (0.3, "rare")]).unwrap();
    assert_eq!(*table.pick(0.0).unwrap(), "common");
    assert_eq!(*table.pick(0.69).unwrap(), "common");
    assert_eq!(*table.pick(0.7).unwrap(), "rare");
    assert_eq!(*table.pick(0.999).unwrap(), "rare");
}

#[test]
fn draw_past_total_is_exhausted() {
    let table = WeightedTable::build("t", [(0.5, 'a'), (0.4995, 'b')]).unwrap();
    let err = table.pick(0.9999).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TableExhausted { .. }));
}

#[test]
fn seeded_draws_are_reproducible() {
    let table = WeightedTable::build("t", [(0.5, 1), (0.3, 2), (0.2, 3)]).unwrap();
    let draws = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..20).map(|_| *table.choose(&mut rng).unwrap()).collect::<Vec<_>>()
    };
    assert_eq!(draws(9), draws(9));
}

#[test]
fn uniform_choice_of_empty_slice_is_none() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    assert_eq!(choose_uniform::<u8, _>(&mut rng, &[]), None);
    assert_eq!(choose_uniform(&mut rng, &[4]), Some(&4));
}

proptest! {
    #[test]
    fn every_draw_lands_in_the_table(weights in prop::collection::vec(1u32..100, 1..8), seed in any::<u64>()) {
        let total: u32 = weights.iter().sum();
        let pairs = weights
            .iter()
            .enumerate()
            .map(|(i, w)| (f64::from(*w) / f64::from(total), i));
        let table = WeightedTable::build("prop", pairs).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..50 {
            let drawn = *table.choose(&mut rng).unwrap();
            prop_assert!(drawn < weights.len());
        }
    }
}
