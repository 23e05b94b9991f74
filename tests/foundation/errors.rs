//! Integration tests for Error types
//!
//! Tests error construction, display, context, and classification.

use supermind_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Classification
// =============================================================================

#[test]
fn content_reference_errors() {
    for err in [
        Error::unknown_location("001"),
        Error::unknown_venue("bar"),
        Error::unknown_event("e_1"),
        Error::unknown_item("i_1"),
        Error::unknown_program("p_1"),
        Error::new(ErrorKind::UnknownOption("Drink".into())),
        Error::new(ErrorKind::UnknownText {
            event: "e_1".into(),
            text: "t9".into(),
        }),
    ] {
        assert!(err.is_content_reference(), "{err}");
        assert!(!err.is_persistence(), "{err}");
    }
}

#[test]
fn persistence_errors() {
    let too_long = Error::new(ErrorKind::FieldTooLong {
        field: "inventory",
        length: 60_000,
        max: 50_000,
    });
    assert!(too_long.is_persistence());
    assert!(Error::persistence("disk full").is_persistence());
    assert!(!Error::serialization("bad msgpack").is_persistence());
}

#[test]
fn authoring_errors_are_neither() {
    let err = Error::new(ErrorKind::ProbabilitySum {
        table: "venue bar".into(),
        sum: 0.5,
    });
    assert!(!err.is_content_reference());
    assert!(!err.is_persistence());
}

// =============================================================================
// Display and Context
// =============================================================================

#[test]
fn display_uses_kind() {
    assert_eq!(Error::unknown_venue("bar").to_string(), "unknown venue: bar");
    assert_eq!(
        Error::new(ErrorKind::UnknownPlayer(5)).to_string(),
        "unknown player: 5"
    );
    assert_eq!(
        Error::new(ErrorKind::InsufficientItems {
            item: "i_coin".into(),
            held: 1,
            requested: 3,
        })
        .to_string(),
        "cannot remove 3 of i_coin: only 1 held"
    );
}

#[test]
fn context_is_attached() {
    let err = Error::persistence("timeout").with_context(
        ErrorContext::new()
            .with_user(42)
            .with_operation("explore"),
    );
    let context = err.context.unwrap();
    assert_eq!(context.user, Some(42));
    assert_eq!(context.to_string(), "in explore, for user 42");
}
