//! The player resource model.
//!
//! Nothing here ticks. Raw lore drains into lore and compiles finish only
//! when [`Player::refresh`] is called with the current time, which every
//! mutating operation does before it reads a derived quantity.

use im::{OrdMap, OrdSet};
use supermind_content::ContentModel;
use supermind_foundation::{ChatId, Error, LocationId, ProgramId, Result, Timestamp, UserId};

use crate::action::Action;
use crate::inventory::Inventory;
use crate::rules::GameRules;
use crate::software::{CompileStart, RunResult, Software, StopResult};

const MILLIS_PER_MINUTE: u64 = 60_000;

/// CPU derived from lore: `floor(sqrt(lore))`.
#[must_use]
pub fn derived_cpu(lore: u64) -> u64 {
    lore.isqrt()
}

/// RAM derived from lore: `floor(lore / 10)`.
#[must_use]
pub fn derived_ram(lore: u64) -> u64 {
    lore / 10
}

/// Research progress made by one exploration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResearchGain {
    /// Percent added to the location.
    pub delta: u32,
    /// Raw lore credited for it.
    pub lore_gained: u64,
}

/// Per-player mutable state.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub(crate) user: UserId,
    pub(crate) chat: ChatId,
    pub(crate) location: LocationId,
    pub(crate) suggested_actions: OrdMap<String, Action>,
    pub(crate) lore: u64,
    pub(crate) raw_lore: u64,
    pub(crate) lore_last_update: Timestamp,
    pub(crate) research: OrdMap<LocationId, u32>,
    pub(crate) software: Software,
    pub(crate) inventory: Inventory,
    pub(crate) known_entities: OrdSet<String>,
}

impl Player {
    /// Creates a player on first contact.
    #[must_use]
    pub fn new(user: UserId, chat: ChatId, rules: &GameRules, now: Timestamp) -> Self {
        Self {
            user,
            chat,
            location: rules.start_location.clone(),
            suggested_actions: OrdMap::new(),
            lore: rules.starting_lore,
            raw_lore: 0,
            lore_last_update: now,
            research: OrdMap::new(),
            software: Software::default(),
            inventory: Inventory::new(rules.max_weight),
            known_entities: OrdSet::new(),
        }
    }

    /// Builder method to set processed lore.
    #[must_use]
    pub fn with_lore(mut self, lore: u64) -> Self {
        self.lore = lore;
        self
    }

    /// Builder method to set pending lore and the time it was last credited.
    #[must_use]
    pub fn with_raw_lore(mut self, raw_lore: u64, at: Timestamp) -> Self {
        self.raw_lore = raw_lore;
        self.lore_last_update = at;
        self
    }

    /// Builder method to set the location.
    #[must_use]
    pub fn with_location(mut self, location: LocationId) -> Self {
        self.location = location;
        self
    }

    /// The user this player belongs to.
    #[must_use]
    pub fn user(&self) -> UserId {
        self.user
    }

    /// The chat messages are sent to.
    #[must_use]
    pub fn chat(&self) -> ChatId {
        self.chat
    }

    /// Current location.
    #[must_use]
    pub fn location(&self) -> &LocationId {
        &self.location
    }

    /// Moves the player. Persistence is the caller's concern.
    pub fn set_location(&mut self, location: LocationId) {
        self.location = location;
    }

    /// Processed lore.
    #[must_use]
    pub fn lore(&self) -> u64 {
        self.lore
    }

    /// Lore waiting to be processed.
    #[must_use]
    pub fn raw_lore(&self) -> u64 {
        self.raw_lore
    }

    /// The instant raw lore was last drained up to.
    #[must_use]
    pub fn lore_last_update(&self) -> Timestamp {
        self.lore_last_update
    }

    /// Total CPU.
    #[must_use]
    pub fn cpu(&self) -> u64 {
        derived_cpu(self.lore)
    }

    /// Total RAM.
    #[must_use]
    pub fn ram(&self) -> u64 {
        derived_ram(self.lore)
    }

    /// CPU held by running programs and the compile slot.
    #[must_use]
    pub fn used_cpu(&self, content: &ContentModel) -> u64 {
        self.software.used_cpu(content)
    }

    /// RAM held by running programs.
    #[must_use]
    pub fn used_ram(&self, content: &ContentModel) -> u64 {
        self.software.used_ram(content)
    }

    /// CPU not yet committed.
    #[must_use]
    pub fn free_cpu(&self, content: &ContentModel) -> u64 {
        self.cpu().saturating_sub(self.used_cpu(content))
    }

    /// RAM not yet committed.
    #[must_use]
    pub fn free_ram(&self, content: &ContentModel) -> u64 {
        self.ram().saturating_sub(self.used_ram(content))
    }

    /// Programs in every lifecycle state.
    #[must_use]
    pub fn software(&self) -> &Software {
        &self.software
    }

    /// The backpack.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The backpack, mutably.
    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Entities that have already paid a discovery bonus.
    #[must_use]
    pub fn known_entities(&self) -> &OrdSet<String> {
        &self.known_entities
    }

    /// Research percent at `location`, 0 if never researched.
    #[must_use]
    pub fn research_percent(&self, location: &LocationId) -> u32 {
        self.research.get(location).copied().unwrap_or(0)
    }

    /// Research percent of every location researched so far.
    #[must_use]
    pub fn research(&self) -> &OrdMap<LocationId, u32> {
        &self.research
    }

    /// Buttons accepted as the next input.
    #[must_use]
    pub fn suggested_actions(&self) -> &OrdMap<String, Action> {
        &self.suggested_actions
    }

    /// The action bound to a button label, if it was offered.
    #[must_use]
    pub fn suggested_action(&self, label: &str) -> Option<&Action> {
        self.suggested_actions.get(label)
    }

    /// Replaces the offered buttons.
    pub fn set_suggested_actions(&mut self, actions: impl IntoIterator<Item = (String, Action)>) {
        self.suggested_actions = actions.into_iter().collect();
    }

    /// Brings lore and the compile slot up to `now`.
    ///
    /// Calling it twice with the same `now` changes nothing the second time,
    /// and it never increases `lore + raw_lore`.
    pub fn refresh(&mut self, now: Timestamp, content: &ContentModel, rules: &GameRules) {
        self.drain_raw_lore(now);
        if let Some(program) = self.software.complete_compile(now, content, rules.tick_millis()) {
            log::debug!("user {} finished compiling {program}", self.user);
        }
    }

    /// Converts pending lore at `cpu` units per minute since the last update,
    /// using the cpu held before any of it is processed.
    ///
    /// `lore_last_update` moves forward by the time the processed units took
    /// (rounded up), or to `now` once everything is drained. The carried
    /// remainder is capped below one unit at the resulting cpu, so a second
    /// call at the same `now` processes nothing.
    fn drain_raw_lore(&mut self, now: Timestamp) {
        if self.raw_lore == 0 {
            return;
        }
        let cpu = self.cpu();
        let elapsed = now.millis_since(self.lore_last_update);
        let capacity = u128::from(elapsed) * u128::from(cpu) / u128::from(MILLIS_PER_MINUTE);
        let processed = u64::try_from(capacity).map_or(self.raw_lore, |c| c.min(self.raw_lore));
        if processed == 0 {
            return;
        }
        self.raw_lore -= processed;
        self.lore += processed;
        if self.raw_lore == 0 {
            self.lore_last_update = now;
            return;
        }
        let spent = (u128::from(processed) * u128::from(MILLIS_PER_MINUTE)).div_ceil(u128::from(cpu));
        let leftover = elapsed - u64::try_from(spent).unwrap_or(elapsed).min(elapsed);
        let below_one_unit = (MILLIS_PER_MINUTE - 1) / self.cpu();
        self.lore_last_update = Timestamp::from_millis(now.as_millis().saturating_sub(leftover.min(below_one_unit)));
    }

    /// Adds pending lore, draining what was already due first.
    pub fn credit_raw_lore(&mut self, amount: u64, now: Timestamp) {
        self.drain_raw_lore(now);
        self.raw_lore = self.raw_lore.saturating_add(amount);
        self.lore_last_update = now;
    }

    /// Records one exploration of `location`.
    ///
    /// `delta = min(rate, 100 - percent)`; a positive delta credits
    /// `floor(delta * 0.1 * cpu)` raw lore.
    pub fn explore_research(&mut self, location: &LocationId, rate: u32, now: Timestamp) -> ResearchGain {
        let current = self.research_percent(location);
        let delta = rate.min(100u32.saturating_sub(current));
        if delta == 0 {
            return ResearchGain::default();
        }
        let lore_gained = u64::from(delta) * self.cpu() / 10;
        self.credit_raw_lore(lore_gained, now);
        self.research.insert(location.clone(), current + delta);
        ResearchGain { delta, lore_gained }
    }

    /// Pays the one-time bonus for discovering `entity`.
    ///
    /// Returns 0 if the entity is already known. Otherwise the bonus is
    /// `10 + floor(known * d)` with
    /// `d = 2 * (300 * locations - 10 * items) / items / (items + 1)`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn grant_discovery_bonus(&mut self, entity: &str, content: &ContentModel, now: Timestamp) -> u64 {
        if self.known_entities.contains(entity) {
            return 0;
        }
        let locations = content.locations().len() as f64;
        let items = content.items().len() as f64;
        let d = if items == 0.0 {
            0.0
        } else {
            2.0 * (300.0 * locations - 10.0 * items) / items / (items + 1.0)
        };
        let bonus = (self.known_entities.len() as f64 * d).floor();
        let gained = (10.0 + bonus).max(0.0) as u64;

        self.known_entities.insert(entity.to_string());
        self.credit_raw_lore(gained, now);
        gained
    }

    /// Returns true if a compile slot is occupied.
    #[must_use]
    pub fn is_compiling(&self) -> bool {
        self.software.compiling.is_some()
    }

    /// Starts compiling `program` with half the free CPU.
    ///
    /// # Errors
    ///
    /// Returns an unknown-program error if `program` is not in the content.
    pub fn start_compile(
        &mut self,
        program: &ProgramId,
        now: Timestamp,
        content: &ContentModel,
    ) -> Result<CompileStart> {
        if content.program(program).is_none() {
            return Err(Error::unknown_program(program.as_str()));
        }
        let free = self.free_cpu(content);
        Ok(self.software.start_compile(program.clone(), free, now))
    }

    /// Starts an installed program if the free budget covers it.
    ///
    /// # Errors
    ///
    /// Returns an unknown-program error if `program` is not in the content.
    pub fn run(&mut self, program: &ProgramId, content: &ContentModel) -> Result<RunResult> {
        let spec = content
            .program(program)
            .ok_or_else(|| Error::unknown_program(program.as_str()))?;
        let (free_cpu, free_ram) = (self.free_cpu(content), self.free_ram(content));
        Ok(self
            .software
            .run(program, spec.cpu_usage, spec.ram_usage, free_cpu, free_ram))
    }

    /// Stops a running program.
    pub fn stop(&mut self, program: &ProgramId) -> StopResult {
        self.software.stop(program)
    }
}
