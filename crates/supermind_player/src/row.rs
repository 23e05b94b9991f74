//! The persisted player row.
//!
//! One row per user. Scalar columns are stored as-is; every collection is a
//! `MessagePack` blob checked against a maximum encoded length at save time.

use serde::Serialize;
use serde::de::DeserializeOwned;
use supermind_foundation::{ChatId, Error, ErrorKind, LocationId, Result, Timestamp, UserId};

use crate::player::Player;
use crate::software::Software;

/// Maximum length of the location column.
pub const LOCATION_ID_MAX_LEN: usize = 32;

/// Maximum encoded length of each serialized column.
pub const FIELD_MAX_LEN: usize = 50_000;

/// A player flattened into storage columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRow {
    /// Primary key.
    pub user_id: u64,
    /// Chat to reply to.
    pub chat_id: i64,
    /// Current location.
    pub location_id: String,
    /// Buttons offered with the last message.
    pub suggested_actions: Vec<u8>,
    /// Processed lore.
    pub lore: u64,
    /// Pending lore.
    pub raw_lore: u64,
    /// Milliseconds since the epoch.
    pub lore_last_update: u64,
    /// Research percent per location.
    pub research_percent: Vec<u8>,
    /// Running programs.
    pub running_soft: Vec<u8>,
    /// Programs ever compiled.
    pub known_soft: Vec<u8>,
    /// The compile slot.
    pub compiling_soft: Vec<u8>,
    /// Installed programs.
    pub installed_soft: Vec<u8>,
    /// The backpack.
    pub inventory: Vec<u8>,
    /// Entities that paid a discovery bonus.
    pub known_entities: Vec<u8>,
}

impl PlayerRow {
    /// Flattens a player.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::FieldTooLong`] if any column exceeds its maximum
    /// length, or a serialization error.
    pub fn encode(player: &Player) -> Result<Self> {
        let location_id = player.location.as_str().to_string();
        check_len("location_id", location_id.len(), LOCATION_ID_MAX_LEN)?;
        let software = &player.software;
        Ok(Self {
            user_id: player.user.0,
            chat_id: player.chat.0,
            location_id,
            suggested_actions: field("suggested_actions", &player.suggested_actions)?,
            lore: player.lore,
            raw_lore: player.raw_lore,
            lore_last_update: player.lore_last_update.as_millis(),
            research_percent: field("research_percent", &player.research)?,
            running_soft: field("running_soft", &software.running)?,
            known_soft: field("known_soft", &software.known)?,
            compiling_soft: field("compiling_soft", &software.compiling)?,
            installed_soft: field("installed_soft", &software.installed)?,
            inventory: field("inventory", &player.inventory)?,
            known_entities: field("known_entities", &player.known_entities)?,
        })
    }

    /// Rebuilds the player.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if any column fails to decode.
    pub fn decode(&self) -> Result<Player> {
        Ok(Player {
            user: UserId(self.user_id),
            chat: ChatId(self.chat_id),
            location: LocationId::new(self.location_id.as_str()),
            suggested_actions: unfield("suggested_actions", &self.suggested_actions)?,
            lore: self.lore,
            raw_lore: self.raw_lore,
            lore_last_update: Timestamp::from_millis(self.lore_last_update),
            research: unfield("research_percent", &self.research_percent)?,
            software: Software {
                known: unfield("known_soft", &self.known_soft)?,
                installed: unfield("installed_soft", &self.installed_soft)?,
                running: unfield("running_soft", &self.running_soft)?,
                compiling: unfield("compiling_soft", &self.compiling_soft)?,
            },
            inventory: unfield("inventory", &self.inventory)?,
            known_entities: unfield("known_entities", &self.known_entities)?,
        })
    }
}

fn check_len(field: &'static str, length: usize, max: usize) -> Result<()> {
    if length > max {
        return Err(Error::new(ErrorKind::FieldTooLong { field, length, max }));
    }
    Ok(())
}

fn field<T: Serialize>(name: &'static str, value: &T) -> Result<Vec<u8>> {
    let bytes = rmp_serde::to_vec_named(value)
        .map_err(|e| Error::serialization(format!("{name}: {e}")))?;
    check_len(name, bytes.len(), FIELD_MAX_LEN)?;
    Ok(bytes)
}

fn unfield<T: DeserializeOwned>(name: &'static str, bytes: &[u8]) -> Result<T> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(format!("{name}: {e}")))
}
