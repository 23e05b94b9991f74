//! Core types, errors, identifiers and weighted selection for Supermind.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - Identifier newtypes ([`LocationId`], [`VenueId`], [`EventId`], ...)
//! - [`Direction`] - Compass and vertical directions between locations
//! - [`Timestamp`] and [`Clock`] - Wall-clock time for lazy accrual
//! - [`WeightedTable`] - Cumulative-probability tables and draws

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod time;
pub mod weighted;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use ids::{ChatId, Direction, EventId, ItemId, LocationId, ProgramId, TextId, UserId, VenueId};
pub use time::{Clock, FixedClock, SystemClock, Timestamp};
pub use weighted::{PROBABILITY_TOLERANCE, WeightedTable, choose_uniform};
