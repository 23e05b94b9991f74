//! The persisted row layout

use supermind_foundation::{Direction, ErrorKind, ItemId, LocationId, ProgramId};
use supermind_player::row::FIELD_MAX_LEN;
use supermind_player::{Action, PlayerRow};

use crate::{T0, demo, player};

#[test]
fn a_played_player_survives_storage() {
    let content = demo();
    let mut p = player(100).with_location(LocationId::new("002"));
    p.explore_research(&LocationId::new("002"), 20, T0);
    p.grant_discovery_bonus("i_coin", &content, T0);
    let _ = p.inventory_mut().insert(&ItemId::new("i_coin"), 3, 0.1);
    p.start_compile(&ProgramId::new("p_indexer"), T0, &content).unwrap();
    p.set_suggested_actions([
        ("⬆".to_string(), Action::Go { direction: Direction::N }),
        ("Explore".to_string(), Action::Explore),
    ]);

    let row = PlayerRow::encode(&p).unwrap();
    assert_eq!(row.location_id, "002");
    assert_eq!(row.lore_last_update, T0.as_millis());
    assert_eq!(row.decode().unwrap(), p);
}

#[test]
fn discovering_too_much_overflows_the_column() {
    let content = demo();
    let mut p = player(0);
    for i in 0..FIELD_MAX_LEN / 8 {
        p.grant_discovery_bonus(&format!("i_entity_{i}"), &content, T0);
    }
    let err = PlayerRow::encode(&p).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::FieldTooLong { field: "known_entities", .. }));
}
