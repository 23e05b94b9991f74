//! Identifiers for content entities and players.
//!
//! Content ids are authored strings; they are wrapped in distinct newtypes so
//! that a venue id can never be passed where an event id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifies a location on the global map (e.g. `"001"`).
    LocationId
);
string_id!(
    /// Identifies a venue within the venue table.
    VenueId
);
string_id!(
    /// Identifies a narrative event in the text table.
    EventId
);
string_id!(
    /// Identifies one textual variant of an event.
    TextId
);
string_id!(
    /// Identifies an item. Authored item ids carry the [`ItemId::PREFIX`].
    ItemId
);
string_id!(
    /// Identifies a program ("software").
    ProgramId
);

impl ItemId {
    /// Reserved prefix distinguishing item ids from literal outcome text.
    pub const PREFIX: &'static str = "i_";

    /// Returns true if `raw` names an item rather than literal text.
    #[must_use]
    pub fn is_item_ref(raw: &str) -> bool {
        raw.starts_with(Self::PREFIX)
    }
}

/// Chat-platform user identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Chat-platform conversation identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A direction of travel between adjacent locations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North
    N,
    /// North-east
    NE,
    /// East
    E,
    /// South-east
    SE,
    /// South
    S,
    /// South-west
    SW,
    /// West
    W,
    /// North-west
    NW,
    /// Up
    U,
    /// Down
    D,
}

impl Direction {
    /// All directions in authoring order.
    pub const ALL: [Direction; 10] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
        Direction::U,
        Direction::D,
    ];

    /// Short code used in content documents and persisted actions.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
            Direction::U => "U",
            Direction::D => "D",
        }
    }

    /// Default arrow used when a transition does not author its own.
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Direction::N => "⬆",
            Direction::NE => "↗",
            Direction::E => "➡",
            Direction::SE => "↘",
            Direction::S => "⬇",
            Direction::SW => "↙",
            Direction::W => "⬅",
            Direction::NW => "↖",
            Direction::U => "⤴",
            Direction::D => "⤵",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Direction {
    type Err = Error;

    /// Parses a direction code or an English name (`north`, `up`, ...),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let dir = match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Direction::N,
            "ne" | "northeast" | "north-east" => Direction::NE,
            "e" | "east" => Direction::E,
            "se" | "southeast" | "south-east" => Direction::SE,
            "s" | "south" => Direction::S,
            "sw" | "southwest" | "south-west" => Direction::SW,
            "w" | "west" => Direction::W,
            "nw" | "northwest" | "north-west" => Direction::NW,
            "u" | "up" => Direction::U,
            "d" | "down" => Direction::D,
            other => return Err(Error::malformed(format!("unknown direction: {other}"))),
        };
        Ok(dir)
    }
}
