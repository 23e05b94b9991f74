//! The closed set of actions a button can trigger.
//!
//! The buttons offered with the last message are persisted with the player
//! as a map from label to [`Action`]; only those labels are accepted as the
//! next input. Each variant carries strongly typed fields and serializes
//! with an explicit `kind` tag.

use serde::{Deserialize, Serialize};
use supermind_foundation::{Direction, EventId, TextId, VenueId};

/// A player action bound to a button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Leave the greeting and show the map.
    Continue,
    /// Show the current location with the direction grid.
    ShowMap,
    /// List the venues visible at the current research level.
    ShowVenues,
    /// Show one venue's option menu.
    ShowVenue {
        /// The venue to show.
        venue: VenueId,
    },
    /// Choose a venue option.
    VenueAction {
        /// Option label, looked up in the global option index.
        option: String,
        /// Message sent before the event resolves.
        message: String,
    },
    /// Choose an option of an event text.
    GetOutcome {
        /// The event being resolved.
        event: EventId,
        /// The text variant that was shown.
        text: TextId,
        /// The chosen option label.
        option: String,
        /// Whether to repeat the text's description.
        show_description: bool,
        /// Lore credited when the options were offered, reported again here.
        lore_gained: u64,
    },
    /// Wander around the current location.
    Explore,
    /// Travel in a direction.
    Go {
        /// Direction of travel.
        direction: Direction,
    },
    /// Show lore, CPU, RAM and software status.
    ShowMind,
    /// Show the backpack.
    ShowAvatar,
    /// The laboratory screen (not yet available).
    Lab,
}

impl Action {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Continue => "continue",
            Action::ShowMap => "show_map",
            Action::ShowVenues => "show_venues",
            Action::ShowVenue { .. } => "show_venue",
            Action::VenueAction { .. } => "venue_action",
            Action::GetOutcome { .. } => "get_outcome",
            Action::Explore => "explore",
            Action::Go { .. } => "go",
            Action::ShowMind => "show_mind",
            Action::ShowAvatar => "show_avatar",
            Action::Lab => "lab",
        }
    }
}
