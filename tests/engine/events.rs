//! Exploring, venues and event outcomes in the demo world

use supermind_engine::Handled;
use supermind_engine::choice::{AVATAR, BACK, EXPLORE};
use supermind_engine::dispatch::CONTENT_FALLBACK;
use supermind_foundation::{EventId, ItemId, LocationId, TextId};
use supermind_player::{Action, GameRules};

use crate::World;

fn plaza() -> LocationId {
    LocationId::new("001")
}

fn pick_up_coins() -> Action {
    Action::GetOutcome {
        event: EventId::new("e_coin"),
        text: TextId::new("t1"),
        option: "Pick it up".to_string(),
        show_description: true,
        lore_gained: 0,
    }
}

#[test]
fn exploring_researches_and_meets_the_street() {
    let mut world = World::new();
    world.press(&Action::ShowVenues);
    assert_eq!(world.say(EXPLORE), Handled::Action("explore"));
    assert_eq!(world.player.research_percent(&plaza()), 25);

    // the street draws either a stranger or a coin
    if world.offers("Nod back") {
        assert_eq!(world.outbox.last(), "A stranger in a grey coat nods at you.");
        world.say("Nod back");
        assert!(world.outbox.last().starts_with("The stranger walks away."));
    } else {
        assert!(world.outbox.last().starts_with("Something glints on the pavement.\n...\nFound: Coin (3)"));
    }
    assert!(world.outbox.last().ends_with("Gained 25 lore for research"));
    assert!(world.offers("Cafe"));
    assert_eq!(world.stored().research_percent(&plaza()), 25);
}

#[test]
fn archive_opens_at_half_research() {
    let mut world = World::new();
    world.press(&Action::ShowVenues);
    assert!(!world.offers("Archive"));

    world.press(&Action::Explore);
    world.press(&Action::Explore);
    world.press(&Action::ShowVenues);
    assert_eq!(world.player.research_percent(&plaza()), 50);
    assert!(world.offers("Archive"));
}

#[test]
fn cafe_gossip() {
    let mut world = World::new();
    world.press(&Action::ShowVenues);
    world.say("Cafe");
    assert_eq!(world.outbox.last(), "A cafe with steamed-up windows.");
    assert!(world.offers("Order coffee") && world.offers("Listen to gossip") && world.offers(BACK));

    world.say("Listen to gossip");
    assert!(world.outbox.texts().contains(&"You take a seat near the counter."));
    if world.offers("Ask about the harbor") {
        world.say("Ask about the harbor");
        assert!(world.outbox.last().ends_with("Ships stopped coming years ago."));
    } else {
        assert!(world.outbox.last().contains("The headline is about a power outage"));
    }
    // back to the venue list
    assert!(world.offers("Cafe"));
}

#[test]
fn backpack_takes_only_what_fits() {
    let mut world = World::with_rules(GameRules::default().with_max_weight(0.15));
    world.press(&pick_up_coins());

    assert_eq!(
        world.outbox.last(),
        "Something glints on the pavement.\n...\nFound: Coin (3) /view_i_coin\n\
         Coin (1) put in the backpack\n2 Coin did not fit in the backpack\n\
         Gained 10 lore for the find"
    );
    let stored = world.stored();
    assert_eq!(stored.inventory().count(&ItemId::new("i_coin")), 1);
    assert_eq!(stored.raw_lore(), 10);

    world.say(AVATAR);
    assert_eq!(world.outbox.last(), "Backpack:\nCoin (1) /view_i_coin\nWeight: 0.1 / 0.15");
}

#[test]
fn known_items_pay_no_bonus() {
    let mut world = World::new();
    world.press(&pick_up_coins());
    world.press(&pick_up_coins());
    assert!(!world.outbox.last().contains("for the find"));
    assert_eq!(world.player.inventory().count(&ItemId::new("i_coin")), 6);
}

#[test]
fn vanished_event_falls_back() {
    let mut world = World::new();
    world.player.set_suggested_actions([(
        "Pray".to_string(),
        Action::GetOutcome {
            event: EventId::new("e_vanished"),
            text: TextId::new("t1"),
            option: "Amen".to_string(),
            show_description: false,
            lore_gained: 0,
        },
    )]);
    assert_eq!(world.say("Pray"), Handled::ContentFallback);
    assert_eq!(world.outbox.last(), CONTENT_FALLBACK);
}
