//! Travel between the demo locations

use supermind_engine::Handled;
use supermind_engine::choice::{BLOCKED_MARKER, SWITCH};
use supermind_engine::navigation::NO_WAY;
use supermind_foundation::{ErrorKind, LocationId};
use supermind_player::Action;

use crate::World;

fn at(world: &World) -> &str {
    world.player.location().as_str()
}

#[test]
fn map_offers_the_compass() {
    let mut world = World::new();
    world.press(&Action::ShowMap);

    assert_eq!(world.outbox.last(), "001 Central plaza.\nResearched 0%");
    assert!(world.offers("⬆"));
    assert!(world.offers(&format!("➡{BLOCKED_MARKER}")));
    assert!(world.offers(&format!("⬇{BLOCKED_MARKER}")));
    assert_eq!(world.player.suggested_action(SWITCH), Some(&Action::ShowVenues));
}

#[test]
fn round_trip_through_the_harbor() {
    let mut world = World::new();
    world.press(&Action::ShowMap);

    assert_eq!(world.say("⬆"), Handled::Action("go"));
    assert_eq!(at(&world), "002");
    assert_eq!(
        world.outbox.texts()[1..].to_vec(),
        vec!["A narrow street leads down to the water.", "002 Old harbor.\nResearched 0%"]
    );

    world.say("➡");
    assert_eq!(at(&world), "003");
    world.say("⬅");
    assert_eq!(at(&world), "002");
    world.say("⬇");
    assert_eq!(at(&world), "001");

    assert_eq!(world.stored().location(), &LocationId::new("001"));
}

#[test]
fn locked_gate_is_described_but_not_passed() {
    let mut world = World::new();
    world.press(&Action::ShowMap);
    let sent = world.outbox.sent.len();

    world.say(&format!("➡{BLOCKED_MARKER}"));
    assert_eq!(at(&world), "001");
    assert_eq!(world.outbox.sent.len(), sent + 1);
    assert!(world.outbox.last().starts_with("A locked gate."));
    // the map buttons are still on offer
    assert!(world.offers("⬆"));
}

#[test]
fn unmapped_direction_has_no_way() {
    let mut world = World::new();
    world.press(&Action::ShowMap);
    world.say(&format!("⬇{BLOCKED_MARKER}"));
    assert_eq!(world.outbox.last(), NO_WAY);
    assert_eq!(at(&world), "001");
}

#[test]
fn failed_move_keeps_the_player_in_place() {
    let mut world = World::new();
    world.press(&Action::ShowMap);
    world.store.broken = true;

    let (mut turn, player) = world.turn();
    let err = supermind_engine::handle_text(&mut turn, player, "⬆").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Persistence(_)));
    assert_eq!(at(&world), "001");
}
