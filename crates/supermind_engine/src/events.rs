//! Event resolution: venue → event → text variant → option → outcome.
//!
//! Each interaction walks `Idle → AwaitingOptionChoice → AwaitingOutcomeChoice
//! → Idle`. Nothing but the offered buttons survives between messages: a text
//! with several options is offered as a grid of [`Action::GetOutcome`]
//! buttons that carry everything needed to finish the walk, including the
//! lore already credited when the grid was built.
//!
//! [`Action::GetOutcome`]: supermind_player::Action::GetOutcome

use std::fmt::Write as _;

use log::{error, warn};
use supermind_content::{Outcome, Reward};
use supermind_foundation::{Error, ErrorKind, EventId, Result, TextId, choose_uniform};
use supermind_player::Player;

use crate::choice::{option_grid, venue_list};
use crate::turn::Turn;

/// Wanders around the current location.
///
/// Draws a venue from the location's encounters, credits research, then
/// resolves an event drawn from that venue.
///
/// # Errors
///
/// Returns an unknown-venue error (before any state change) if the drawn
/// venue is missing, or a persistence error.
pub fn explore(turn: &mut Turn<'_>, player: &mut Player) -> Result<()> {
    let location = turn.location(player)?;
    let Some(encounters) = &location.events else {
        return turn.notify(player, "There is nothing to explore here.");
    };
    let venue_id = encounters.choose(&mut *turn.rng)?;
    let Some(venue) = turn.content.venue(venue_id) else {
        error!("MISSING_VENUE\t{}\t{venue_id}", player.user());
        return Err(Error::unknown_venue(venue_id.as_str()));
    };

    let before = player.clone();
    let gain = player.explore_research(&location.id, location.research_rate, turn.now);
    if gain.delta > 0 {
        turn.commit(player, before, "explore")?;
    }

    let Some(events) = &venue.events else {
        warn!("MISSING_EVENT\t{}\tvenue {venue_id} has no events", player.user());
        let text = with_lore_notice(String::from("Nothing happens.\n"), gain.lore_gained);
        let grid = venue_list(player, location, turn.content);
        return turn.reply(player, &text, grid);
    };
    let event = events.choose(&mut *turn.rng)?.clone();
    resolve_event(turn, player, &event, gain.lore_gained)
}

/// Chooses a venue option: sends its message, then resolves a drawn event.
///
/// # Errors
///
/// Returns an unknown-option error if no venue defines the label.
pub fn venue_action(turn: &mut Turn<'_>, player: &mut Player, option: &str, message: &str) -> Result<()> {
    let Some(events) = turn.content.option_events(option) else {
        return Err(Error::new(ErrorKind::UnknownOption(option.to_string())));
    };
    if !message.is_empty() {
        turn.notify(player, message)?;
    }
    let event = events.choose(&mut *turn.rng)?.clone();
    resolve_event(turn, player, &event, 0)
}

/// Picks a text variant uniformly and either resolves its only option or
/// offers all of them.
///
/// A missing event is reported to the player and logged, never raised.
///
/// # Errors
///
/// Returns a persistence or transport error.
pub fn resolve_event(turn: &mut Turn<'_>, player: &mut Player, event: &EventId, lore_gained: u64) -> Result<()> {
    let variant = turn
        .content
        .event(event)
        .and_then(|texts| choose_uniform(&mut *turn.rng, &texts.variants));
    let Some(text) = variant else {
        warn!("MISSING_EVENT\t{}\t{event}", player.user());
        let location = turn.location(player)?;
        let grid = venue_list(player, location, turn.content);
        let message = with_lore_notice(format!("no data for event: {event}"), lore_gained);
        return turn.reply(player, &message, grid);
    };

    if let [only] = text.options.as_slice() {
        return resolve_outcome(turn, player, event, &text.id, &only.text, true, lore_gained);
    }
    let grid = option_grid(
        event,
        &text.id,
        text.options.iter().map(|o| o.text.as_str()),
        lore_gained,
    );
    turn.reply(player, &text.description, grid)
}

/// Draws an outcome for a chosen option and applies it.
///
/// # Errors
///
/// Returns an unknown-event, unknown-text or unknown-option error if the
/// option no longer exists (stale buttons across a reload), or a
/// persistence error after rolling back the grant.
pub fn resolve_outcome(
    turn: &mut Turn<'_>,
    player: &mut Player,
    event: &EventId,
    text_id: &TextId,
    option: &str,
    show_description: bool,
    lore_gained: u64,
) -> Result<()> {
    let texts = turn
        .content
        .event(event)
        .ok_or_else(|| Error::unknown_event(event.as_str()))?;
    let text = texts.variant(text_id).ok_or_else(|| {
        Error::new(ErrorKind::UnknownText {
            event: event.to_string(),
            text: text_id.to_string(),
        })
    })?;
    let choice = text
        .option(option)
        .ok_or_else(|| Error::new(ErrorKind::UnknownOption(option.to_string())))?;
    let outcome = choice.outcomes.choose(&mut *turn.rng)?;

    let mut parts = Vec::with_capacity(2);
    if show_description && !text.description.is_empty() {
        parts.push(text.description.as_str());
    }
    if let Some(message) = &outcome.message {
        parts.push(message.as_str());
    }
    let mut message = parts.join(" ");
    message.push('\n');

    let before = player.clone();
    apply_reward(turn, player, outcome, &mut message)?;
    let message = with_lore_notice(message, lore_gained);

    let location = turn.location(player)?;
    let grid = venue_list(player, location, turn.content);
    turn.commit_reply(player, before, &message, grid)
}

fn apply_reward(turn: &mut Turn<'_>, player: &mut Player, outcome: &Outcome, message: &mut String) -> Result<()> {
    match &outcome.reward {
        None => {}
        Some(Reward::Text(literal)) => message.push_str(literal),
        Some(Reward::Item(id)) => {
            let Some(item) = turn.content.item(id) else {
                let err = Error::unknown_item(id.as_str());
                warn!("UNKNOWN_ITEM\t{}\t{err}", player.user());
                return turn.notify(player, &format!("Unknown item: {id}"));
            };
            let count = outcome.item_count();
            let _ = write!(message, "...\nFound: {} ({count}) /view_{id}", item.name);
            let insertion = player.inventory_mut().insert(id, count, item.weight);
            if insertion.taken > 0 {
                let _ = write!(message, "\n{} ({}) put in the backpack", item.name, insertion.taken);
            }
            if insertion.overflow > 0 {
                let _ = write!(
                    message,
                    "\n{} {} did not fit in the backpack",
                    insertion.overflow, item.name
                );
            }
            let bonus = player.grant_discovery_bonus(id.as_str(), turn.content, turn.now);
            if bonus > 0 {
                let _ = write!(message, "\nGained {bonus} lore for the find");
            }
        }
    }
    Ok(())
}

fn with_lore_notice(mut message: String, lore_gained: u64) -> String {
    if lore_gained > 0 {
        let _ = write!(message, "\nGained {lore_gained} lore for research");
    }
    message
}
