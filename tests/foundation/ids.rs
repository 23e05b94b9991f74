//! Integration tests for identifiers, directions and time

use std::str::FromStr;

use supermind_foundation::{Clock, Direction, FixedClock, ItemId, LocationId, Timestamp, VenueId};

#[test]
fn ids_display_as_authored() {
    assert_eq!(LocationId::new("001").to_string(), "001");
    assert_eq!(VenueId::from("bar").as_str(), "bar");
}

#[test]
fn item_references_carry_prefix() {
    assert!(ItemId::is_item_ref("i_coin"));
    assert!(!ItemId::is_item_ref("The door creaks."));
}

#[test]
fn directions_parse_codes_and_names() {
    assert_eq!(Direction::from_str("NE").unwrap(), Direction::NE);
    assert_eq!(Direction::from_str("south-west").unwrap(), Direction::SW);
    assert_eq!(Direction::from_str(" Up ").unwrap(), Direction::U);
    assert!(Direction::from_str("sideways").is_err());
}

#[test]
fn every_direction_round_trips_through_its_code() {
    for dir in Direction::ALL {
        assert_eq!(Direction::from_str(dir.code()).unwrap(), dir);
        assert!(!dir.arrow().is_empty());
    }
}

#[test]
fn fixed_clock_drives_timestamps() {
    let clock = FixedClock::new(Timestamp::from_secs(10));
    clock.advance_secs(50);
    let now = clock.now();
    assert_eq!(now.millis_since(Timestamp::from_secs(10)), 50_000);
    assert_eq!(now.to_string(), "60.000s");
}
