//! Integration tests for Layer 2: Player
//!
//! Tests for lore accrual, research, discovery, the backpack, the software
//! lifecycle and the persisted row.

mod backpack;
mod persistence;
mod software;

use supermind_content::{ContentModel, RawContent};
use supermind_foundation::{ChatId, Timestamp, UserId};
use supermind_player::{GameRules, Player};

/// The demo world shipped with the runtime.
pub fn demo() -> ContentModel {
    let json = include_str!("../../crates/supermind_runtime/data/demo.json");
    RawContent::from_json_str(json).unwrap().into_model().unwrap()
}

/// The moment every test player is created.
pub const T0: Timestamp = Timestamp::from_secs(1_000_000);

/// A fresh player with `lore` processed lore.
pub fn player(lore: u64) -> Player {
    Player::new(UserId(3), ChatId(30), &GameRules::default(), T0).with_lore(lore)
}
