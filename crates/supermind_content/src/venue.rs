//! Venues: places of interaction inside a location.

use supermind_foundation::{EventId, WeightedTable};

/// One menu entry of a venue.
#[derive(Clone, Debug)]
pub struct VenueOption {
    /// Button label. Labels are global keys across all venues.
    pub text: String,
    /// Message sent when the option is chosen, before its event resolves.
    pub message: String,
    /// Events the option can lead to.
    pub events: WeightedTable<EventId>,
}

/// A venue with its own encounter table and option menu.
#[derive(Clone, Debug)]
pub struct Venue {
    /// Display name, used as the venue's button label.
    pub name: String,
    /// Events drawn when an exploration lands in this venue.
    pub events: Option<WeightedTable<EventId>>,
    /// Menu options in display order.
    pub options: Vec<VenueOption>,
}

impl Venue {
    /// Returns the option labelled `text`.
    #[must_use]
    pub fn option(&self, text: &str) -> Option<&VenueOption> {
        self.options.iter().find(|o| o.text == text)
    }
}
