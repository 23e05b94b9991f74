//! One inbound message, handled to completion.

use log::{error, warn};
use rand::RngCore;
use supermind_content::{ContentModel, Location};
use supermind_foundation::{Error, ErrorContext, Result, Timestamp};
use supermind_player::{GameRules, Player, PlayerRow};

use crate::choice::ChoiceSet;
use crate::ports::{Messenger, PlayerStore};

/// Everything an operation may read or call while handling one message.
///
/// The content model is the snapshot taken when the message arrived; a
/// reload during the turn does not affect it.
pub struct Turn<'a> {
    /// Content snapshot.
    pub content: &'a ContentModel,
    /// Game constants.
    pub rules: &'a GameRules,
    /// Persistence collaborator.
    pub store: &'a mut dyn PlayerStore,
    /// Messaging collaborator.
    pub messenger: &'a mut dyn Messenger,
    /// Source of every random draw.
    pub rng: &'a mut dyn RngCore,
    /// The time this message is handled at.
    pub now: Timestamp,
}

impl<'a> Turn<'a> {
    /// The player's current location.
    ///
    /// # Errors
    ///
    /// Returns an unknown-location error if the content no longer has it.
    pub fn location(&self, player: &Player) -> Result<&'a Location> {
        self.content
            .location(player.location())
            .ok_or_else(|| Error::unknown_location(player.location().as_str()))
    }

    /// Persists `player`, restoring `before` if the store refuses.
    ///
    /// # Errors
    ///
    /// Returns the encoding or store error after the rollback.
    pub fn commit(&mut self, player: &mut Player, before: Player, operation: &str) -> Result<()> {
        let saved = PlayerRow::encode(player).and_then(|row| self.store.save(&row));
        if let Err(e) = saved {
            error!("PERSIST_FAILED\t{}\t{operation}\t{e}", player.user());
            warn!("ROLLBACK\t{}\t{operation}", player.user());
            *player = before;
            let context = ErrorContext::new()
                .with_user(player.user().0)
                .with_operation(operation);
            return Err(e.with_context(context));
        }
        Ok(())
    }

    /// Persists `player` as it stands.
    ///
    /// # Errors
    ///
    /// Returns the encoding or store error.
    pub fn save(&mut self, player: &mut Player, operation: &str) -> Result<()> {
        let before = player.clone();
        self.commit(player, before, operation)
    }

    /// Sends text with no keyboard change.
    ///
    /// # Errors
    ///
    /// Returns the transport error.
    pub fn notify(&mut self, player: &Player, text: &str) -> Result<()> {
        self.messenger.send(player.chat(), text, None)?;
        Ok(())
    }

    /// Offers `choices` as the only valid next inputs, persists, then sends.
    ///
    /// # Errors
    ///
    /// Returns the persistence error (after restoring the previous buttons)
    /// or the transport error.
    pub fn reply(&mut self, player: &mut Player, text: &str, choices: ChoiceSet) -> Result<()> {
        let before = player.clone();
        self.commit_reply(player, before, text, choices)
    }

    /// Like [`Turn::reply`], but rolls back to `before` on failure so that
    /// earlier in-memory changes are persisted or undone together.
    ///
    /// # Errors
    ///
    /// Returns the persistence or transport error.
    pub fn commit_reply(
        &mut self,
        player: &mut Player,
        before: Player,
        text: &str,
        choices: ChoiceSet,
    ) -> Result<()> {
        player.set_suggested_actions(choices.suggested_actions());
        self.commit(player, before, "reply")?;
        self.messenger.send(player.chat(), text, Some(&choices))?;
        Ok(())
    }
}
