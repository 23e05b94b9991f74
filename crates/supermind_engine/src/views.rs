//! Screens that show state: the map, venue lists, the mind and the backpack.

use std::fmt::Write as _;

use supermind_content::Location;
use supermind_foundation::{Error, Result, VenueId};
use supermind_player::Player;

use crate::choice::{map_grid, venue_list, venue_menu};
use crate::turn::Turn;

/// Formats seconds as `"D days, H hours, M minutes, S seconds"`, dropping
/// leading zero units.
#[must_use]
pub fn format_duration(total_secs: u64) -> String {
    let days = total_secs / 86_400;
    let hours = total_secs % 86_400 / 3600;
    let minutes = total_secs % 3600 / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::with_capacity(4);
    if days > 0 {
        parts.push(unit(days, "day"));
    }
    if days > 0 || hours > 0 {
        parts.push(unit(hours, "hour"));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        parts.push(unit(minutes, "minute"));
    }
    parts.push(unit(seconds, "second"));
    parts.join(", ")
}

fn unit(count: u64, name: &str) -> String {
    if count == 1 {
        format!("{count} {name}")
    } else {
        format!("{count} {name}s")
    }
}

/// `"<id> <description>\nResearched <p>%"`.
#[must_use]
pub fn location_header(player: &Player, location: &Location) -> String {
    format!(
        "{} {}\nResearched {}%",
        location.id,
        location.description,
        player.research_percent(&location.id)
    )
}

/// The map screen with the compass grid.
///
/// # Errors
///
/// Returns an unknown-location error or a persistence error.
pub fn show_map(turn: &mut Turn<'_>, player: &mut Player) -> Result<()> {
    let location = turn.location(player)?;
    let text = location_header(player, location);
    turn.reply(player, &text, map_grid(location))
}

/// The location screen with the venue list.
///
/// # Errors
///
/// Returns an unknown-location error or a persistence error.
pub fn show_venues(turn: &mut Turn<'_>, player: &mut Player) -> Result<()> {
    let location = turn.location(player)?;
    let text = location_header(player, location);
    let grid = venue_list(player, location, turn.content);
    turn.reply(player, &text, grid)
}

/// One venue's option menu, described as the current location sees it.
///
/// # Errors
///
/// Returns an unknown-venue error or a persistence error.
pub fn show_venue(turn: &mut Turn<'_>, player: &mut Player, venue: &VenueId) -> Result<()> {
    let location = turn.location(player)?;
    let Some(model) = turn.content.venue(venue) else {
        log::warn!("MISSING_VENUE\t{}\t{venue}", player.user());
        return Err(Error::unknown_venue(venue.as_str()));
    };
    // A venue button from another location yields an empty menu.
    let (text, menu) = match location.venue_slot(venue) {
        Some(slot) => (slot.description.as_str(), venue_menu(Some(model))),
        None => ("", venue_menu(None)),
    };
    turn.reply(player, text, menu)
}

/// Lore, budgets and software summary. Persists the refreshed player.
///
/// # Errors
///
/// Returns a persistence or transport error.
pub fn show_mind(turn: &mut Turn<'_>, player: &mut Player) -> Result<()> {
    turn.save(player, "show_mind")?;
    let content = turn.content;

    let mut text = format!(
        "Supermind {}\nLore: {}\nRaw lore: {}",
        player.user(),
        player.lore(),
        player.raw_lore()
    );
    if player.raw_lore() > 0 {
        let cpu = player.cpu();
        if cpu == 0 {
            text.push_str(", processing stalled: no CPU");
        } else {
            let secs = player.raw_lore().saturating_mul(60) / cpu;
            let _ = write!(text, ", processing time: {}", format_duration(secs));
        }
    }
    let software = player.software();
    let fresh = content
        .programs()
        .keys()
        .filter(|id| !software.owns(id))
        .count();
    let _ = write!(
        text,
        "\nMemory: {} / {}\nCPU: {} / {}\nRunning programs: {}\nCompiled programs: {}\nNew programs: {} /software",
        player.used_ram(content),
        player.ram(),
        player.used_cpu(content),
        player.cpu(),
        software.running.len(),
        software.installed.len(),
        fresh,
    );
    if let Some(slot) = &software.compiling {
        if let Some(program) = content.program(&slot.program) {
            let progress =
                slot.progress_percent(turn.now, program.compile_time, turn.rules.tick_millis());
            let _ = write!(text, "\nCompiling {}: {progress}% done", program.name);
        }
    }
    turn.notify(player, &text)
}

/// The backpack listing.
///
/// # Errors
///
/// Returns a transport error.
pub fn show_avatar(turn: &mut Turn<'_>, player: &Player) -> Result<()> {
    let inventory = player.inventory();
    let mut text = String::from("Backpack:\n");
    for (id, count) in inventory.iter() {
        let name = turn.content.item(id).map_or(id.as_str(), |item| item.name.as_str());
        let _ = writeln!(text, "{name} ({count}) /view_{id}");
    }
    let _ = write!(text, "Weight: {} / {}", inventory.weight(), inventory.max_weight());
    turn.notify(player, &text)
}
