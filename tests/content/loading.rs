//! Loading authored documents into a content model

use supermind_content::{RawContent, Reward};
use supermind_foundation::{Direction, ErrorKind, EventId, ItemId, LocationId, ProgramId, VenueId};

use crate::DEMO;

fn load(json: &str) -> supermind_foundation::Result<supermind_content::ContentModel> {
    RawContent::from_json_str(json)?.into_model()
}

// =============================================================================
// Demo World
// =============================================================================

#[test]
fn demo_world_loads() {
    let model = load(DEMO).unwrap();
    assert_eq!(
        model.status(),
        "read 3 locations, 5 venues, 7 events, 5 items, 2 programs: 001, 002, 003"
    );
}

#[test]
fn transitions_carry_arrows_and_markers() {
    let model = load(DEMO).unwrap();
    let plaza = model.location(&LocationId::new("001")).unwrap();

    let north = plaza.transition(Direction::N).unwrap();
    assert!(north.is_open());
    assert_eq!(north.button_label(), "⬆");

    let gate = plaza.transition(Direction::E).unwrap();
    assert!(!gate.is_open());
    assert_eq!(gate.button_label(), "➡✖");

    assert!(plaza.transition(Direction::S).is_none());
}

#[test]
fn venue_slots_keep_thresholds() {
    let model = load(DEMO).unwrap();
    let plaza = model.location(&LocationId::new("001")).unwrap();
    let archive = plaza.venue_slot(&VenueId::new("archive")).unwrap();
    assert_eq!(archive.research_threshold, 50);
    assert!(plaza.is_explorable());
    assert!(!model.location(&LocationId::new("003")).unwrap().is_explorable());
}

#[test]
fn option_index_spans_reachable_venues() {
    let model = load(DEMO).unwrap();
    let coffee = model.option_events("Order coffee").unwrap();
    let events: Vec<&EventId> = coffee.values().collect();
    assert_eq!(events, vec![&EventId::new("e_coffee"), &EventId::new("e_gossip")]);
    assert!(model.option_events("Log in").is_some());
    assert!(model.option_events("Dance").is_none());
}

#[test]
fn outcomes_distinguish_items_from_text() {
    let model = load(DEMO).unwrap();
    let book = model.event(&EventId::new("e_book")).unwrap();
    let rewards: Vec<Option<&Reward>> = book.variants[0].options[0]
        .outcomes
        .values()
        .map(|o| o.reward.as_ref())
        .collect();
    assert!(rewards.contains(&Some(&Reward::Item(ItemId::new("i_page")))));
    assert!(rewards.iter().any(|r| matches!(r, Some(Reward::Text(_)))));
}

#[test]
fn catalog_cards() {
    let model = load(DEMO).unwrap();
    let coin = model.item(&ItemId::new("i_coin")).unwrap();
    assert!((coin.weight - 0.1).abs() < f64::EPSILON);
    let indexer = model.program(&ProgramId::new("p_indexer")).unwrap();
    assert_eq!((indexer.cpu_usage, indexer.ram_usage, indexer.compile_time), (2, 1, 5));
}

// =============================================================================
// Rejected Documents
// =============================================================================

#[test]
fn one_bad_table_rejects_the_whole_document() {
    let json = r#"{
        "locations": [ { "id": "001", "description": "A.",
            "events": [ { "id": "v", "probability": 0.4 } ] } ]
    }"#;
    let err = load(json).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ProbabilitySum { .. }));
}

#[test]
fn duplicate_ids_are_rejected() {
    let json = r#"{ "locations": [
        { "id": "001", "description": "A." },
        { "id": "001", "description": "B." }
    ] }"#;
    assert!(matches!(load(json).unwrap_err().kind, ErrorKind::MalformedContent(_)));
}

#[test]
fn unknown_direction_is_rejected() {
    let json = r#"{ "locations": [ { "id": "001", "description": "A.",
        "adjacent": { "sideways": { "to": "001" } } } ] }"#;
    assert!(load(json).is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let json = r#"{ "locations": [], "weather": "rain" }"#;
    assert!(matches!(load(json).unwrap_err().kind, ErrorKind::MalformedContent(_)));
}

#[test]
fn items_need_prefix_and_weight() {
    let unprefixed = r#"{ "items": [ { "id": "coin", "name": "Coin", "weight": 1.0 } ] }"#;
    assert!(load(unprefixed).is_err());
    let weightless = r#"{ "items": [ { "id": "i_coin", "name": "Coin", "weight": 0 } ] }"#;
    assert!(load(weightless).is_err());
}
