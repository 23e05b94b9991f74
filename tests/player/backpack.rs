//! The capacity-constrained backpack

use proptest::prelude::*;
use supermind_foundation::{ErrorKind, ItemId};
use supermind_player::{Insertion, Inventory};

fn coin() -> ItemId {
    ItemId::new("i_coin")
}

#[test]
fn takes_what_fits_and_reports_overflow() {
    let mut backpack = Inventory::new(20.0);
    let anvil = ItemId::new("i_anvil");
    assert_eq!(backpack.insert(&anvil, 3, 8.0), Insertion { taken: 2, overflow: 1 });
    assert_eq!(backpack.count(&anvil), 2);
    assert!((backpack.weight() - 16.0).abs() < 1e-9);
}

#[test]
fn full_backpack_takes_nothing() {
    let mut backpack = Inventory::new(1.0);
    assert_eq!(backpack.insert(&coin(), 4, 0.25).taken, 4);
    assert_eq!(backpack.insert(&coin(), 1, 0.25), Insertion { taken: 0, overflow: 1 });
}

#[test]
fn remove_requires_enough_items() {
    let mut backpack = Inventory::new(20.0);
    let _ = backpack.insert(&coin(), 3, 0.1);
    let err = backpack.remove(&coin(), 4).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InsufficientItems { held: 3, requested: 4, .. }));
    backpack.remove(&coin(), 3).unwrap();
    assert!(backpack.is_empty());
}

proptest! {
    #[test]
    fn weight_never_exceeds_capacity(
        capacity in 0.0f64..50.0,
        inserts in prop::collection::vec((0u8..4, 0u32..20, 0.01f64..10.0), 0..20),
    ) {
        let mut backpack = Inventory::new(capacity);
        for (item, count, weight) in inserts {
            let id = ItemId::new(format!("i_{item}"));
            let result = backpack.insert(&id, count, weight);
            prop_assert_eq!(result.taken + result.overflow, count);
            prop_assert!(backpack.weight() <= capacity);
        }
    }
}
