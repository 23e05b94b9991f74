//! Action dispatch, navigation, event resolution and software commands for Supermind.
//!
//! This crate provides:
//! - [`Turn`] - One inbound message handled to completion: content snapshot,
//!   collaborators, randomness and the current time
//! - [`ChoiceSet`] - The button grids offered with a message
//! - [`handle_text`] - Pure dispatch of a player's input over [`Action`] and [`Command`]
//! - [`Messenger`] / [`PlayerStore`] - The messaging and persistence collaborators
//!
//! Every mutating operation follows the same discipline: snapshot the player,
//! mutate in memory, persist, and restore the snapshot if persistence fails.
//!
//! [`Action`]: supermind_player::Action

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod choice;
pub mod command;
pub mod dispatch;
pub mod events;
pub mod navigation;
pub mod ports;
pub mod software;
pub mod turn;
pub mod views;

#[cfg(test)]
mod testing;

pub use choice::{Choice, ChoiceSet};
pub use command::Command;
pub use dispatch::{Handled, dispatch, handle_text};
pub use navigation::can_traverse;
pub use ports::{MessageHandle, Messenger, PlayerStore};
pub use turn::Turn;
pub use views::format_duration;
