//! The immutable content snapshot.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;

use log::debug;
use supermind_foundation::{EventId, ItemId, LocationId, ProgramId, VenueId, WeightedTable};

use crate::catalog::{Item, Program};
use crate::location::Location;
use crate::text::EventTexts;
use crate::validate::{self, ValidationReport};
use crate::venue::Venue;

/// Everything the game reads but never writes: the map, venues, narrative
/// texts, items and programs.
///
/// A model is built once per load and never mutated; reloading produces a
/// fresh model that replaces the old one wholesale.
#[derive(Clone, Debug, Default)]
pub struct ContentModel {
    locations: BTreeMap<LocationId, Location>,
    venues: BTreeMap<VenueId, Venue>,
    texts: BTreeMap<EventId, EventTexts>,
    items: BTreeMap<ItemId, Item>,
    programs: BTreeMap<ProgramId, Program>,
    option_events: BTreeMap<String, WeightedTable<EventId>>,
}

impl ContentModel {
    /// Assembles a model and derives the option-label index.
    #[must_use]
    pub fn new(
        locations: BTreeMap<LocationId, Location>,
        venues: BTreeMap<VenueId, Venue>,
        texts: BTreeMap<EventId, EventTexts>,
        items: BTreeMap<ItemId, Item>,
        programs: BTreeMap<ProgramId, Program>,
    ) -> Self {
        let option_events = index_option_events(&locations, &venues);
        Self {
            locations,
            venues,
            texts,
            items,
            programs,
            option_events,
        }
    }

    /// Looks up a location.
    #[must_use]
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Looks up a venue.
    #[must_use]
    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.get(id)
    }

    /// Looks up the variants of an event.
    #[must_use]
    pub fn event(&self, id: &EventId) -> Option<&EventTexts> {
        self.texts.get(id)
    }

    /// Looks up an item.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Looks up a program.
    #[must_use]
    pub fn program(&self, id: &ProgramId) -> Option<&Program> {
        self.programs.get(id)
    }

    /// Events reachable from a venue option label.
    ///
    /// Labels are global: the index merges the options of every venue
    /// reachable from any location, and a later venue (in location order)
    /// overwrites an earlier one using the same label.
    #[must_use]
    pub fn option_events(&self, option: &str) -> Option<&WeightedTable<EventId>> {
        self.option_events.get(option)
    }

    /// All locations by id.
    #[must_use]
    pub fn locations(&self) -> &BTreeMap<LocationId, Location> {
        &self.locations
    }

    /// All venues by id.
    #[must_use]
    pub fn venues(&self) -> &BTreeMap<VenueId, Venue> {
        &self.venues
    }

    /// All event texts by event id.
    #[must_use]
    pub fn texts(&self) -> &BTreeMap<EventId, EventTexts> {
        &self.texts
    }

    /// All items by id.
    #[must_use]
    pub fn items(&self) -> &BTreeMap<ItemId, Item> {
        &self.items
    }

    /// All programs by id.
    #[must_use]
    pub fn programs(&self) -> &BTreeMap<ProgramId, Program> {
        &self.programs
    }

    /// Walks the graph and reports dangling references.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        validate::validate(self)
    }

    /// One-line summary of what was loaded.
    #[must_use]
    pub fn status(&self) -> String {
        let mut status = format!(
            "read {} locations, {} venues, {} events, {} items, {} programs",
            self.locations.len(),
            self.venues.len(),
            self.texts.len(),
            self.items.len(),
            self.programs.len()
        );
        if !self.locations.is_empty() {
            let ids: Vec<&str> = self.locations.keys().map(LocationId::as_str).collect();
            let _ = write!(status, ": {}", ids.join(", "));
        }
        status
    }
}

/// Venues reachable from some location, in location order then slot order.
pub(crate) fn reachable_venues(locations: &BTreeMap<LocationId, Location>) -> Vec<&VenueId> {
    let mut seen = BTreeSet::new();
    let mut order = Vec::new();
    for location in locations.values() {
        let wandering = location.events.iter().flat_map(WeightedTable::values);
        for venue in location.venues.iter().map(|s| &s.venue).chain(wandering) {
            if seen.insert(venue) {
                order.push(venue);
            }
        }
    }
    order
}

fn index_option_events(
    locations: &BTreeMap<LocationId, Location>,
    venues: &BTreeMap<VenueId, Venue>,
) -> BTreeMap<String, WeightedTable<EventId>> {
    let mut index = BTreeMap::new();
    for venue_id in reachable_venues(locations) {
        let Some(venue) = venues.get(venue_id) else {
            continue;
        };
        for option in &venue.options {
            if index
                .insert(option.text.clone(), option.events.clone())
                .is_some()
            {
                debug!("option label {:?} redefined by venue {venue_id}", option.text);
            }
        }
    }
    index
}
