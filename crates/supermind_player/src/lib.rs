//! Per-player mutable state for Supermind.
//!
//! This crate provides:
//! - [`Player`] - Lore accrual, derived CPU/RAM, research and discovery bonuses
//! - [`Inventory`] - The capacity-constrained backpack
//! - [`Software`] - The compile / install / run lifecycle of programs
//! - [`Action`] - The persisted schema of the buttons offered to a player
//! - [`PlayerRow`] - The row layout handed to the persistence store
//!
//! Player collections are persistent (`im`) structures, so snapshotting a
//! player before a mutation and restoring it on a failed save is cheap.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod inventory;
pub mod player;
pub mod row;
pub mod rules;
pub mod software;

pub use action::Action;
pub use inventory::{Insertion, Inventory};
pub use player::{Player, ResearchGain, derived_cpu, derived_ram};
pub use row::PlayerRow;
pub use rules::GameRules;
pub use software::{CompileSlot, CompileStart, RunResult, Software, StopResult};
