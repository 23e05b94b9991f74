//! Tunable game constants.

use supermind_foundation::LocationId;

/// Constants the simulation reads but content does not author.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRules {
    /// Length of one compile tick in seconds.
    pub tick_duration_secs: u64,
    /// Where new players start.
    pub start_location: LocationId,
    /// Lore granted to new players.
    pub starting_lore: u64,
    /// Backpack capacity of new players.
    pub max_weight: f64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            tick_duration_secs: 60,
            start_location: LocationId::new("001"),
            starting_lore: 0,
            max_weight: 20.0,
        }
    }
}

impl GameRules {
    /// Builder method to set the tick duration.
    #[must_use]
    pub fn with_tick_duration_secs(mut self, secs: u64) -> Self {
        self.tick_duration_secs = secs;
        self
    }

    /// Builder method to set the start location.
    #[must_use]
    pub fn with_start_location(mut self, location: LocationId) -> Self {
        self.start_location = location;
        self
    }

    /// Builder method to set the starting lore.
    #[must_use]
    pub fn with_starting_lore(mut self, lore: u64) -> Self {
        self.starting_lore = lore;
        self
    }

    /// Builder method to set backpack capacity.
    #[must_use]
    pub fn with_max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    /// Tick duration in milliseconds.
    #[must_use]
    pub fn tick_millis(&self) -> u64 {
        self.tick_duration_secs.saturating_mul(1000)
    }
}
