//! Button grids.
//!
//! A [`ChoiceSet`] is what the player sees under a message. Sending one
//! replaces the player's suggested actions with exactly its labels, so the
//! grid builders here decide which inputs the next message may carry.

use supermind_content::{ContentModel, Location, Venue};
use supermind_foundation::{Direction, EventId, TextId};
use supermind_player::{Action, Player};

/// Label of the mind screen button.
pub const MIND: &str = "🌐";
/// Label of the laboratory button.
pub const LAB: &str = "🗺";
/// Label of the avatar button.
pub const AVATAR: &str = "🤡";
/// Label toggling between the map and the venue list.
pub const SWITCH: &str = "🔄";
/// Label returning from a venue to the venue list.
pub const BACK: &str = "Back";
/// Label of the wander-around button.
pub const EXPLORE: &str = "Wander around";
/// Marker appended to a direction with no authored transition.
pub const BLOCKED_MARKER: &str = "✖";

/// One labeled button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice {
    /// Text on the button, and the input it produces.
    pub label: String,
    /// What pressing it does.
    pub action: Action,
}

impl Choice {
    /// Creates a button.
    #[must_use]
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// Rows of buttons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    rows: Vec<Vec<Choice>>,
}

impl ChoiceSet {
    /// Creates an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to append a row.
    #[must_use]
    pub fn with_row(mut self, row: Vec<Choice>) -> Self {
        self.push_row(row);
        self
    }

    /// Appends a row; empty rows are skipped.
    pub fn push_row(&mut self, row: Vec<Choice>) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }

    /// The rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Choice>] {
        &self.rows
    }

    /// Every button, row by row.
    pub fn choices(&self) -> impl Iterator<Item = &Choice> {
        self.rows.iter().flatten()
    }

    /// Every label, row by row.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices().map(|c| c.label.as_str())
    }

    /// The `(label, action)` pairs to store as suggested actions.
    pub fn suggested_actions(&self) -> impl Iterator<Item = (String, Action)> + '_ {
        self.choices().map(|c| (c.label.clone(), c.action.clone()))
    }

    /// Returns true if the grid has no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Grid builders
// =============================================================================

/// `[mind, lab, avatar, 🔄 map]`, shown above venue lists and menus.
#[must_use]
pub fn header_row() -> Vec<Choice> {
    vec![
        Choice::new(MIND, Action::ShowMind),
        Choice::new(LAB, Action::Lab),
        Choice::new(AVATAR, Action::ShowAvatar),
        Choice::new(SWITCH, Action::ShowMap),
    ]
}

fn direction_choice(location: &Location, direction: Direction) -> Choice {
    let label = location.transition(direction).map_or_else(
        || format!("{}{BLOCKED_MARKER}", direction.arrow()),
        supermind_content::Transition::button_label,
    );
    Choice::new(label, Action::Go { direction })
}

/// The compass grid of the map screen.
#[must_use]
pub fn map_grid(location: &Location) -> ChoiceSet {
    let go = |direction| direction_choice(location, direction);
    ChoiceSet::new()
        .with_row(vec![
            Choice::new(MIND, Action::ShowMind),
            go(Direction::NW),
            go(Direction::N),
            go(Direction::NE),
        ])
        .with_row(vec![
            Choice::new(LAB, Action::Lab),
            go(Direction::W),
            Choice::new(SWITCH, Action::ShowVenues),
            go(Direction::E),
        ])
        .with_row(vec![
            Choice::new(AVATAR, Action::ShowAvatar),
            go(Direction::SW),
            go(Direction::S),
            go(Direction::SE),
        ])
}

/// Venues the player's research has revealed, then the explore button.
#[must_use]
pub fn venue_list(player: &Player, location: &Location, content: &ContentModel) -> ChoiceSet {
    let researched = player.research_percent(&location.id);
    let mut grid = ChoiceSet::new().with_row(header_row());
    for slot in &location.venues {
        if slot.research_threshold > researched {
            continue;
        }
        if let Some(venue) = content.venue(&slot.venue) {
            grid.push_row(vec![Choice::new(
                venue.name.clone(),
                Action::ShowVenue {
                    venue: slot.venue.clone(),
                },
            )]);
        }
    }
    if location.is_explorable() {
        grid.push_row(vec![Choice::new(EXPLORE, Action::Explore)]);
    }
    grid
}

/// The option menu of one venue.
#[must_use]
pub fn venue_menu(venue: Option<&Venue>) -> ChoiceSet {
    let mut grid = ChoiceSet::new().with_row(header_row());
    for option in venue.iter().flat_map(|v| &v.options) {
        grid.push_row(vec![Choice::new(
            option.text.clone(),
            Action::VenueAction {
                option: option.text.clone(),
                message: option.message.clone(),
            },
        )]);
    }
    grid.with_row(vec![Choice::new(BACK, Action::ShowVenues)])
}

/// One button per option of an event text.
#[must_use]
pub fn option_grid<'a>(
    event: &EventId,
    text: &TextId,
    options: impl IntoIterator<Item = &'a str>,
    lore_gained: u64,
) -> ChoiceSet {
    let mut grid = ChoiceSet::new();
    for option in options {
        grid.push_row(vec![Choice::new(
            option,
            Action::GetOutcome {
                event: event.clone(),
                text: text.clone(),
                option: option.to_string(),
                show_description: false,
                lore_gained,
            },
        )]);
    }
    grid
}

/// The greeting button.
#[must_use]
pub fn continue_grid(label: &str) -> ChoiceSet {
    ChoiceSet::new().with_row(vec![Choice::new(label, Action::Continue)])
}
