//! Turning player input into operations.
//!
//! Input is either a slash [`Command`] or the label of a button offered with
//! the previous message. Anything else is stale and ignored. Dispatch is a
//! single exhaustive match; there is no handler registry.

use log::{info, warn};
use supermind_foundation::Result;
use supermind_player::{Action, Player};

use crate::command::Command;
use crate::turn::Turn;
use crate::{events, navigation, software, views};

/// Shown when an action refers to content that no longer exists.
pub const CONTENT_FALLBACK: &str = "This part of the world has faded away. Try something else.";

/// What became of an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handled {
    /// A button action ran.
    Action(&'static str),
    /// A slash command ran.
    Command(&'static str),
    /// The input matched nothing on offer.
    Ignored,
    /// The operation met a dangling content reference; the player was sent
    /// a fallback message.
    ContentFallback,
}

/// Handles one line of player input.
///
/// Refreshes the player first, so every operation sees up-to-date lore and
/// compile state.
///
/// # Errors
///
/// Returns persistence and transport errors. Content-reference errors are
/// turned into a fallback message instead.
pub fn handle_text(turn: &mut Turn<'_>, player: &mut Player, text: &str) -> Result<Handled> {
    player.refresh(turn.now, turn.content, turn.rules);

    let (handled, result) = if let Some(command) = Command::parse(text) {
        info!("COMMAND\t{}\t{}", player.user(), command.name());
        (Handled::Command(command.name()), run_command(turn, player, &command))
    } else if let Some(action) = player.suggested_action(text).cloned() {
        info!("ACTION\t{}\t{}", player.user(), action.name());
        (Handled::Action(action.name()), dispatch(turn, player, &action))
    } else {
        info!("INVALID_ACTION\t{}\t{text:?}", player.user());
        return Ok(Handled::Ignored);
    };

    match result {
        Ok(()) => Ok(handled),
        Err(e) if e.is_content_reference() => {
            warn!("CONTENT_FALLBACK\t{}\t{e}", player.user());
            turn.notify(player, CONTENT_FALLBACK)?;
            Ok(Handled::ContentFallback)
        }
        Err(e) => Err(e),
    }
}

/// Runs one button action.
///
/// # Errors
///
/// Returns the operation's error.
pub fn dispatch(turn: &mut Turn<'_>, player: &mut Player, action: &Action) -> Result<()> {
    match action {
        Action::Continue | Action::ShowMap => views::show_map(turn, player),
        Action::ShowVenues => views::show_venues(turn, player),
        Action::ShowVenue { venue } => views::show_venue(turn, player, venue),
        Action::VenueAction { option, message } => events::venue_action(turn, player, option, message),
        Action::GetOutcome {
            event,
            text,
            option,
            show_description,
            lore_gained,
        } => events::resolve_outcome(turn, player, event, text, option, *show_description, *lore_gained),
        Action::Explore => events::explore(turn, player),
        Action::Go { direction } => navigation::go(turn, player, *direction),
        Action::ShowMind => views::show_mind(turn, player),
        Action::ShowAvatar => views::show_avatar(turn, player),
        Action::Lab => Ok(()),
    }
}

fn run_command(turn: &mut Turn<'_>, player: &mut Player, command: &Command) -> Result<()> {
    match command {
        Command::Software => software::show_software(turn, player),
        Command::Compile(program) => software::compile(turn, player, program),
        Command::Run(program) => software::run(turn, player, program),
        Command::Stop(program) => software::stop(turn, player, program),
        Command::View(entity) => software::view_info(turn, player, entity),
    }
}
