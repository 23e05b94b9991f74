//! Software commands and item/program cards.

use std::fmt::Write as _;

use supermind_foundation::{ItemId, ProgramId, Result};
use supermind_player::{CompileStart, Player, RunResult, StopResult};

use crate::turn::Turn;

/// Lists running, installed and new programs with their commands.
///
/// # Errors
///
/// Returns a persistence or transport error.
pub fn show_software(turn: &mut Turn<'_>, player: &mut Player) -> Result<()> {
    turn.save(player, "software")?;
    let content = turn.content;
    let software = player.software();
    let name = |id: &ProgramId| content.program(id).map_or_else(|| id.to_string(), |p| p.name.clone());

    let mut text = String::new();
    if !software.running.is_empty() {
        text.push_str("Running programs:\n");
        for id in &software.running {
            let _ = writeln!(text, "{} /view_{id} /stop_{id}", name(id));
        }
        text.push('\n');
    }
    if !software.installed.is_empty() {
        text.push_str("Compiled programs:\n");
        for id in &software.installed {
            let _ = writeln!(text, "{} /view_{id} /run_{id}", name(id));
        }
        text.push('\n');
    }
    text.push_str("New programs:\n");
    for (id, program) in content.programs() {
        if !software.owns(id) {
            let _ = writeln!(text, "{} /view_{id} /compile_{id}", program.name);
        }
    }
    turn.notify(player, text.trim_end())
}

/// Starts compiling `program` if the compile slot is free.
///
/// # Errors
///
/// Returns an unknown-program error or a persistence error.
pub fn compile(turn: &mut Turn<'_>, player: &mut Player, program: &ProgramId) -> Result<()> {
    turn.save(player, "compile")?;
    if player.is_compiling() {
        return turn.notify(player, "Another program is still compiling");
    }
    let before = player.clone();
    match player.start_compile(program, turn.now, turn.content)? {
        CompileStart::InsufficientCpu => turn.notify(player, "Not enough CPU to start compiling"),
        CompileStart::AlreadyOwned => {
            let name = display_name(turn, program);
            turn.notify(player, &format!("Program {name} is already compiled"))
        }
        CompileStart::Started { cpu } => {
            turn.commit(player, before, "compile")?;
            let name = display_name(turn, program);
            turn.notify(player, &format!("Compiling {name} on {cpu} CPU"))
        }
    }
}

/// Runs an installed program.
///
/// # Errors
///
/// Returns an unknown-program error or a persistence error.
pub fn run(turn: &mut Turn<'_>, player: &mut Player, program: &ProgramId) -> Result<()> {
    turn.save(player, "run")?;
    let before = player.clone();
    match player.run(program, turn.content)? {
        RunResult::NotInstalled => turn.notify(player, "Compile the program first"),
        RunResult::Insufficient { cpu, ram } => {
            let mut text = String::from("Could not start the program");
            if cpu {
                text.push_str("\nNot enough CPU");
            }
            if ram {
                text.push_str("\nNot enough free memory");
            }
            turn.notify(player, &text)
        }
        RunResult::Started => {
            turn.commit(player, before, "run")?;
            let name = display_name(turn, program);
            turn.notify(player, &format!("Starting {name}"))
        }
    }
}

/// Stops a running program. Unknown programs are ignored.
///
/// # Errors
///
/// Returns a persistence or transport error.
pub fn stop(turn: &mut Turn<'_>, player: &mut Player, program: &ProgramId) -> Result<()> {
    turn.save(player, "stop")?;
    let Some(spec) = turn.content.program(program) else {
        log::debug!("stop of unknown program {program} ignored");
        return Ok(());
    };
    let before = player.clone();
    match player.stop(program) {
        StopResult::NotRunning => turn.notify(player, &format!("Program {} is not running", spec.name)),
        StopResult::Stopped => {
            turn.commit(player, before, "stop")?;
            turn.notify(player, &format!("Program {} stopped", spec.name))
        }
    }
}

/// Shows an item or program card. Unknown ids are ignored.
///
/// # Errors
///
/// Returns a transport error.
pub fn view_info(turn: &mut Turn<'_>, player: &Player, entity: &str) -> Result<()> {
    let card = turn
        .content
        .item(&ItemId::new(entity))
        .map(supermind_content::Item::info)
        .or_else(|| turn.content.program(&ProgramId::new(entity)).map(supermind_content::Program::info));
    match card {
        Some(card) => turn.notify(player, &card),
        None => Ok(()),
    }
}

fn display_name(turn: &Turn<'_>, program: &ProgramId) -> String {
    turn.content
        .program(program)
        .map_or_else(|| program.to_string(), |p| p.name.clone())
}
