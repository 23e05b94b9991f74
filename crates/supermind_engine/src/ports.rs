//! The collaborators the engine talks to.
//!
//! The real chat transport and database live outside this workspace; the
//! runtime crate provides console and in-memory implementations.

use supermind_foundation::{ChatId, Result, UserId};
use supermind_player::PlayerRow;

use crate::choice::ChoiceSet;

/// Opaque id of a delivered message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageHandle(pub u64);

/// Delivers rendered text and optional buttons to a chat.
pub trait Messenger {
    /// Sends `text` to `chat`, with `choices` as the reply keyboard if given.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails to deliver.
    fn send(&mut self, chat: ChatId, text: &str, choices: Option<&ChoiceSet>) -> Result<MessageHandle>;
}

/// Stores one row per player.
pub trait PlayerStore {
    /// Loads the row for `user`, or `None` if the player was never created.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the store cannot be read.
    fn load(&self, user: UserId) -> Result<Option<PlayerRow>>;

    /// Overwrites an existing row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the write fails or the row does not exist.
    fn save(&mut self, row: &PlayerRow) -> Result<()>;

    /// Inserts a new row.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the write fails or the row already exists.
    fn create(&mut self, row: &PlayerRow) -> Result<()>;
}
