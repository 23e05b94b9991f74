//! Configuration, session, console transport and REPL for Supermind.
//!
//! This crate provides:
//! - [`RuntimeConfig`] - TOML-backed settings with builder methods and presets
//! - [`Session`] - Players, content handle, clock and randomness behind one entry point
//! - [`MemoryStore`] / [`ConsoleMessenger`] - In-process stand-ins for the
//!   SQL store and the chat transport
//! - [`Repl`] - Terminal chat loop over `rustyline`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod console;
pub mod editor;
pub mod logging;
pub mod repl;
pub mod session;
pub mod store;

pub use config::RuntimeConfig;
pub use console::ConsoleMessenger;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
pub use store::MemoryStore;
