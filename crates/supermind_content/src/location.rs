//! Locations and the transitions between them.

use std::collections::BTreeMap;
use std::fmt;

use supermind_foundation::{Direction, LocationId, VenueId, WeightedTable};

/// Map coordinates of a location.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// East-west coordinate.
    pub x: f64,
    /// North-south coordinate.
    pub y: f64,
    /// Vertical coordinate.
    pub z: f64,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A directed edge to an adjacent location.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Destination location.
    pub to: LocationId,
    /// Text shown whenever the player tries this direction.
    pub description: String,
    /// Travel cost; zero means the way is described but impassable.
    pub multiplier: f64,
    /// Button label for this direction.
    pub arrow: String,
    /// Extra marker appended to the button label.
    pub marker: String,
}

impl Transition {
    /// Returns true if the multiplier allows movement.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.multiplier > 0.0
    }

    /// Button label: arrow followed by the marker.
    #[must_use]
    pub fn button_label(&self) -> String {
        format!("{}{}", self.arrow, self.marker)
    }
}

/// A venue placed in a location, visible once research reaches a threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct VenueSlot {
    /// The venue shown.
    pub venue: VenueId,
    /// Location-specific description of the venue.
    pub description: String,
    /// Research percent required before the venue is listed.
    pub research_threshold: u32,
}

/// A node of the global map.
#[derive(Clone, Debug)]
pub struct Location {
    /// Location id.
    pub id: LocationId,
    /// Description shown on the map screen.
    pub description: String,
    /// Authored size.
    pub size: f64,
    /// Research percent gained per exploration, 0 to 100.
    pub research_rate: u32,
    /// Map coordinates.
    pub position: Position,
    /// Outgoing transitions by direction.
    pub adjacent: BTreeMap<Direction, Transition>,
    /// Venues in display order.
    pub venues: Vec<VenueSlot>,
    /// Wandering encounters: which venue an exploration lands in.
    pub events: Option<WeightedTable<VenueId>>,
}

impl Location {
    /// Returns the transition in `direction`, if authored.
    #[must_use]
    pub fn transition(&self, direction: Direction) -> Option<&Transition> {
        self.adjacent.get(&direction)
    }

    /// Returns the slot for `venue`, if the location hosts it.
    #[must_use]
    pub fn venue_slot(&self, venue: &VenueId) -> Option<&VenueSlot> {
        self.venues.iter().find(|slot| &slot.venue == venue)
    }

    /// Returns true if the location has wandering encounters to explore.
    #[must_use]
    pub fn is_explorable(&self) -> bool {
        self.events.is_some()
    }
}
