//! Moving between locations.

use log::info;
use supermind_content::{ContentModel, Location};
use supermind_foundation::{Direction, Result};
use supermind_player::Player;

use crate::turn::Turn;
use crate::views;

/// Shown for a direction with no authored transition.
pub const NO_WAY: &str = "There is no way there.";

/// True iff a transition exists in `direction`, its destination is in the
/// content, and its multiplier allows movement.
#[must_use]
pub fn can_traverse(location: &Location, direction: Direction, content: &ContentModel) -> bool {
    location
        .transition(direction)
        .is_some_and(|t| t.is_open() && content.location(&t.to).is_some())
}

/// Tries to move the player.
///
/// The transition's description is always sent, even when movement is
/// blocked. A successful move is persisted; if that fails the previous
/// location is restored and the error propagates.
///
/// # Errors
///
/// Returns an unknown-location error for the current location, or the
/// persistence error of the move.
pub fn go(turn: &mut Turn<'_>, player: &mut Player, direction: Direction) -> Result<()> {
    let location = turn.location(player)?;
    let Some(transition) = location.transition(direction) else {
        return turn.notify(player, NO_WAY);
    };
    turn.notify(player, &transition.description)?;
    if !can_traverse(location, direction, turn.content) {
        return Ok(());
    }

    let before = player.clone();
    player.set_location(transition.to.clone());
    turn.commit(player, before, "move")?;
    info!("MOVE\t{}\t{}\t{direction}\t{}", player.user(), location.id, transition.to);
    views::show_map(turn, player)
}
