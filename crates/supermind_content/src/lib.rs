//! Static content graph for Supermind.
//!
//! This crate provides:
//! - [`ContentModel`] - Immutable locations, venues, event texts, items and programs
//! - [`RawContent`] - The serde document content is authored in
//! - [`ValidationReport`] - Dangling references and option-label collisions
//! - [`ContentHandle`] - The process-wide content snapshot, swapped atomically on reload

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod handle;
pub mod location;
pub mod model;
pub mod raw;
pub mod text;
pub mod validate;
pub mod venue;

pub use catalog::{Item, Program};
pub use handle::{ContentHandle, ContentSource, JsonFileSource, ReloadReport, StaticSource};
pub use location::{Location, Position, Transition, VenueSlot};
pub use model::ContentModel;
pub use raw::RawContent;
pub use text::{EventTexts, Outcome, Reward, Text, TextOption};
pub use validate::ValidationReport;
pub use venue::{Venue, VenueOption};
