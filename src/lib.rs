//! Supermind - Resource simulation and weighted content resolution for a
//! chat-driven exploration game
//!
//! This crate re-exports all layers of the Supermind system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: supermind_runtime    — Config, session, console transport, REPL/CLI
//! Layer 3: supermind_engine     — Dispatch, navigation, events, software, views
//! Layer 2: supermind_player     — Player resources, inventory, software, row codec
//! Layer 1: supermind_content    — Content model, loader, validator, reload handle
//! Layer 0: supermind_foundation — Core types (Error, ids, Timestamp, WeightedTable)
//! ```

pub use supermind_content as content;
pub use supermind_engine as engine;
pub use supermind_foundation as foundation;
pub use supermind_player as player;
pub use supermind_runtime as runtime;
