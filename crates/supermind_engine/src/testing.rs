//! Fixtures shared by the unit tests of this crate.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use supermind_content::{ContentModel, RawContent};
use supermind_foundation::{ChatId, Error, Result, Timestamp, UserId};
use supermind_player::{GameRules, Player, PlayerRow};

use crate::choice::ChoiceSet;
use crate::ports::{MessageHandle, Messenger, PlayerStore};
use crate::turn::Turn;

pub const CONTENT: &str = r#"{
    "locations": [
        {
            "id": "001",
            "description": "Town square.",
            "research_rate": 40,
            "adjacent": {
                "N": { "to": "002", "description": "A road north." },
                "E": { "to": "002", "description": "A wall.", "multiplier": 0 },
                "W": { "to": "404", "description": "Fog to the west." }
            },
            "venues": [
                { "venue": "bar", "description": "A noisy bar." },
                { "venue": "library", "description": "Dusty shelves.", "research_threshold": 50 }
            ],
            "events": [ { "id": "bar", "probability": 1.0 } ]
        },
        {
            "id": "002",
            "description": "Park.",
            "adjacent": { "S": { "to": "001", "description": "Back south." } },
            "events": [ { "id": "ghost_town", "probability": 1.0 } ]
        }
    ],
    "venues": [
        { "id": "bar", "name": "Bar",
          "events": [ { "id": "e_drink", "probability": 1.0 } ],
          "options": [
            { "text": "Drink", "message": "You order a drink.",
              "events": [ { "id": "e_drink", "probability": 1.0 } ] },
            { "text": "Chat", "message": "You look for company.",
              "events": [ { "id": "e_talk", "probability": 1.0 } ] }
          ] },
        { "id": "library", "name": "Library",
          "options": [
            { "text": "Read", "message": "You open a book.",
              "events": [ { "id": "e_missing", "probability": 1.0 } ] }
          ] }
    ],
    "events": [
        { "id": "e_drink", "texts": [ { "id": "t1", "description": "The bartender nods.",
            "options": [ { "text": "Sip", "outcomes": [
                { "probability": 1.0, "count": 2, "message": "Coins under the glass.", "outcome": "i_coin" }
            ] } ] } ] },
        { "id": "e_talk", "texts": [ { "id": "t1", "description": "A stranger leans in.",
            "options": [
                { "text": "Listen", "outcomes": [
                    { "probability": 1.0, "message": "He whispers.", "outcome": " The mayor is a robot." }
                ] },
                { "text": "Leave", "outcomes": [ { "probability": 1.0 } ] }
            ] } ] },
        { "id": "e_ghost", "texts": [ { "id": "t1", "description": "A cold draft.",
            "options": [ { "text": "Touch", "outcomes": [
                { "probability": 1.0, "outcome": "i_ghost" }
            ] } ] } ] },
        { "id": "e_heavy", "texts": [ { "id": "t1", "description": "An anvil.",
            "options": [ { "text": "Lift", "outcomes": [
                { "probability": 1.0, "count": 3, "outcome": "i_anvil" }
            ] } ] } ] }
    ],
    "items": [
        { "id": "i_coin", "name": "Coin", "description": "Shiny.", "weight": 0.5 },
        { "id": "i_anvil", "name": "Anvil", "description": "Heavy.", "weight": 8.0 }
    ],
    "programs": [
        { "id": "p_scan", "name": "Scanner", "description": "Scans.",
          "cpu_usage": 4, "ram_usage": 10, "compile_time": 10 }
    ]
}"#;

pub fn content() -> ContentModel {
    RawContent::from_json_str(CONTENT).unwrap().into_model().unwrap()
}

pub fn player_at(location: &str) -> Player {
    Player::new(UserId(7), ChatId(70), &GameRules::default(), Timestamp::from_secs(1000))
        .with_location(location.into())
}

#[derive(Debug, Default)]
pub struct TestStore {
    pub rows: BTreeMap<u64, PlayerRow>,
    pub fail_saves: bool,
    pub saves: usize,
}

impl PlayerStore for TestStore {
    fn load(&self, user: UserId) -> Result<Option<PlayerRow>> {
        Ok(self.rows.get(&user.0).cloned())
    }

    fn save(&mut self, row: &PlayerRow) -> Result<()> {
        if self.fail_saves {
            return Err(Error::persistence("disk on fire"));
        }
        self.saves += 1;
        self.rows.insert(row.user_id, row.clone());
        Ok(())
    }

    fn create(&mut self, row: &PlayerRow) -> Result<()> {
        self.save(row)
    }
}

#[derive(Debug, Default)]
pub struct Outbox {
    pub sent: Vec<(ChatId, String, Option<ChoiceSet>)>,
}

impl Outbox {
    pub fn texts(&self) -> Vec<&str> {
        self.sent.iter().map(|(_, text, _)| text.as_str()).collect()
    }

    pub fn last_text(&self) -> &str {
        self.sent.last().map_or("", |(_, text, _)| text.as_str())
    }

    pub fn last_choices(&self) -> Option<&ChoiceSet> {
        self.sent.iter().rev().find_map(|(_, _, c)| c.as_ref())
    }
}

impl Messenger for Outbox {
    fn send(&mut self, chat: ChatId, text: &str, choices: Option<&ChoiceSet>) -> Result<MessageHandle> {
        self.sent.push((chat, text.to_string(), choices.cloned()));
        Ok(MessageHandle(self.sent.len() as u64))
    }
}

pub struct Harness {
    pub content: ContentModel,
    pub rules: GameRules,
    pub store: TestStore,
    pub outbox: Outbox,
    pub rng: ChaCha8Rng,
    pub now: Timestamp,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            content: content(),
            rules: GameRules::default(),
            store: TestStore::default(),
            outbox: Outbox::default(),
            rng: ChaCha8Rng::seed_from_u64(42),
            now: Timestamp::from_secs(2000),
        }
    }

    pub fn turn(&mut self) -> Turn<'_> {
        Turn {
            content: &self.content,
            rules: &self.rules,
            store: &mut self.store,
            messenger: &mut self.outbox,
            rng: &mut self.rng,
            now: self.now,
        }
    }
}
