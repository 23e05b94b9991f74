//! Replacing content while players are mid-game

use supermind_content::StaticSource;
use supermind_engine::Handled;
use supermind_engine::dispatch::CONTENT_FALLBACK;
use supermind_engine::navigation::NO_WAY;

use crate::{ALICE, enter_plaza, game, player, say, transcript};

const PLAZA_ONLY: &str = r#"{
    "locations": [ { "id": "001", "description": "Empty plaza." } ]
}"#;

const ELSEWHERE: &str = r#"{
    "locations": [ { "id": "900", "description": "Somewhere else." } ]
}"#;

#[test]
fn stale_map_buttons_meet_the_new_world() {
    let (mut game, _) = game(1);
    enter_plaza(&mut game, ALICE);
    say(&mut game, ALICE, "🔄");

    let text = game.reload(&StaticSource::new("plaza", PLAZA_ONLY));
    assert!(text.starts_with("Game data was updated.\nread 1 locations"));
    assert_eq!(game.content().generation(), 2);

    // the old map still offered north
    assert_eq!(say(&mut game, ALICE, "⬆"), Handled::Action("go"));
    assert!(transcript(&game).ends_with(&format!("{NO_WAY}\n\n")));
    assert!(game.store().row(ALICE).is_some());
}

#[test]
fn vanished_location_falls_back() {
    let (mut game, _) = game(1);
    enter_plaza(&mut game, ALICE);
    game.reload(&StaticSource::new("elsewhere", ELSEWHERE));

    assert_eq!(say(&mut game, ALICE, "🔄"), Handled::ContentFallback);
    assert!(transcript(&game).ends_with(&format!("{CONTENT_FALLBACK}\n\n")));
    // the player row is untouched
    assert_eq!(player(&game, ALICE).location().as_str(), "001");
}

#[test]
fn broken_reload_changes_nothing() {
    let (mut game, _) = game(1);
    enter_plaza(&mut game, ALICE);
    let before = game.status();

    let text = game.reload(&StaticSource::new("broken", r#"{ "locations": 7 }"#));
    assert!(text.starts_with("Failed to load game data."));
    assert_eq!(game.status(), before);
    assert_eq!(say(&mut game, ALICE, "Cafe"), Handled::Action("show_venue"));
}
