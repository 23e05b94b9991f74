//! Consistency checks over a loaded content graph.
//!
//! Validation never fails: it collects every dangling reference into a
//! [`ValidationReport`] that the reload path surfaces to administrators.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use supermind_foundation::{Direction, EventId, ItemId, LocationId, TextId, VenueId};

use crate::model::{ContentModel, reachable_venues};
use crate::text::Reward;

/// Problems found in a content graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// `(from, direction, to)` transitions whose destination is unknown.
    pub unknown_locations: BTreeSet<(LocationId, Direction, LocationId)>,
    /// `(location, venue)` references to venues missing from the venue table.
    pub unknown_venues: BTreeSet<(LocationId, VenueId)>,
    /// `(venue, event)` references to events missing from the text table.
    pub unknown_events: BTreeSet<(VenueId, EventId)>,
    /// `(event, text, item)` outcomes granting items missing from the item table.
    pub unknown_items: BTreeSet<(EventId, TextId, ItemId)>,
    /// Option labels used by more than one reachable venue.
    pub duplicate_options: BTreeMap<String, BTreeSet<VenueId>>,
}

impl ValidationReport {
    /// Returns true if no problem was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.unknown_locations.is_empty()
            && self.unknown_venues.is_empty()
            && self.unknown_events.is_empty()
            && self.unknown_items.is_empty()
            && self.duplicate_options.is_empty()
    }

    /// Total number of problems.
    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.unknown_locations.len()
            + self.unknown_venues.len()
            + self.unknown_events.len()
            + self.unknown_items.len()
            + self.duplicate_options.len()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "content is consistent");
        }
        writeln!(f, "{} content problems:", self.problem_count())?;
        for (from, dir, to) in &self.unknown_locations {
            writeln!(f, "  location {from} {dir}: unknown destination {to}")?;
        }
        for (location, venue) in &self.unknown_venues {
            writeln!(f, "  location {location}: unknown venue {venue}")?;
        }
        for (venue, event) in &self.unknown_events {
            writeln!(f, "  venue {venue}: unknown event {event}")?;
        }
        for (event, text, item) in &self.unknown_items {
            writeln!(f, "  event {event} text {text}: unknown item {item}")?;
        }
        for (label, venues) in &self.duplicate_options {
            let venues: Vec<&str> = venues.iter().map(VenueId::as_str).collect();
            writeln!(f, "  option {label:?} shared by venues {}", venues.join(", "))?;
        }
        Ok(())
    }
}

pub(crate) fn validate(model: &ContentModel) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (id, location) in model.locations() {
        for (dir, transition) in &location.adjacent {
            if model.location(&transition.to).is_none() {
                report
                    .unknown_locations
                    .insert((id.clone(), *dir, transition.to.clone()));
            }
        }
        let wandering = location.events.iter().flat_map(|t| t.values());
        for venue in location.venues.iter().map(|s| &s.venue).chain(wandering) {
            if model.venue(venue).is_none() {
                report.unknown_venues.insert((id.clone(), venue.clone()));
            }
        }
    }

    for (id, venue) in model.venues() {
        let own = venue.events.iter().flat_map(|t| t.values());
        let via_options = venue.options.iter().flat_map(|o| o.events.values());
        for event in own.chain(via_options) {
            if model.event(event).is_none() {
                report.unknown_events.insert((id.clone(), event.clone()));
            }
        }
    }

    for (event_id, texts) in model.texts() {
        for text in &texts.variants {
            for option in &text.options {
                for outcome in option.outcomes.values() {
                    if let Some(Reward::Item(item)) = &outcome.reward {
                        if model.item(item).is_none() {
                            report.unknown_items.insert((
                                event_id.clone(),
                                text.id.clone(),
                                item.clone(),
                            ));
                        }
                    }
                }
            }
        }
    }

    let mut labels: BTreeMap<String, BTreeSet<VenueId>> = BTreeMap::new();
    for venue_id in reachable_venues(model.locations()) {
        if let Some(venue) = model.venue(venue_id) {
            for option in &venue.options {
                labels
                    .entry(option.text.clone())
                    .or_default()
                    .insert(venue_id.clone());
            }
        }
    }
    report.duplicate_options = labels
        .into_iter()
        .filter(|(_, venues)| venues.len() > 1)
        .collect();

    report
}
