//! Runtime configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use supermind_foundation::{Error, LocationId, Result};
use supermind_player::GameRules;

/// Settings for one running game.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
/// Unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Content document to load at startup.
    pub content_path: Option<PathBuf>,

    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Length of one compile tick in seconds.
    pub tick_duration_secs: u64,

    /// Where new players start.
    pub start_location: String,

    /// Lore granted to new players.
    pub starting_lore: u64,

    /// Backpack capacity of new players.
    pub max_weight: f64,

    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            seed: None,
            tick_duration_secs: 60,
            start_location: "001".to_string(),
            starting_lore: 0,
            max_weight: 20.0,
            log_level: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration for local play: fixed seed, debug logging,
    /// some starting lore and one-second ticks.
    #[must_use]
    pub fn development() -> Self {
        Self {
            seed: Some(0),
            tick_duration_secs: 1,
            starting_lore: 100,
            log_level: "debug".to_string(),
            ..Self::default()
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a config error for malformed TOML, unknown keys or bad values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a config error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read '{}': {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    fn check(&self) -> Result<()> {
        if self.tick_duration_secs == 0 {
            return Err(Error::config("tick_duration_secs must be positive"));
        }
        if !self.max_weight.is_finite() || self.max_weight < 0.0 {
            return Err(Error::config(format!(
                "max_weight must be a non-negative number, got {}",
                self.max_weight
            )));
        }
        if self.start_location.is_empty() {
            return Err(Error::config("start_location must not be empty"));
        }
        Ok(())
    }

    /// The subset of settings the simulation reads.
    #[must_use]
    pub fn rules(&self) -> GameRules {
        GameRules::default()
            .with_tick_duration_secs(self.tick_duration_secs)
            .with_start_location(LocationId::new(self.start_location.as_str()))
            .with_starting_lore(self.starting_lore)
            .with_max_weight(self.max_weight)
    }

    /// Builder method to set the content document.
    #[must_use]
    pub fn with_content_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_path = Some(path.into());
        self
    }

    /// Builder method to fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method to set the tick duration.
    #[must_use]
    pub fn with_tick_duration_secs(mut self, secs: u64) -> Self {
        self.tick_duration_secs = secs;
        self
    }

    /// Builder method to set the start location.
    #[must_use]
    pub fn with_start_location(mut self, location: impl Into<String>) -> Self {
        self.start_location = location.into();
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

    /// Builder method to set the default log filter.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
