//! Error types for the Supermind system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Resource shortages (CPU, RAM, backpack space) are not errors; they are
//! reported through structured outcome types in the player layer.

use std::fmt;

use thiserror::Error;

/// The main error type for Supermind operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown location error.
    #[must_use]
    pub fn unknown_location(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLocation(id.into()))
    }

    /// Creates an unknown venue error.
    #[must_use]
    pub fn unknown_venue(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownVenue(id.into()))
    }

    /// Creates an unknown event error.
    #[must_use]
    pub fn unknown_event(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownEvent(id.into()))
    }

    /// Creates an unknown item error.
    #[must_use]
    pub fn unknown_item(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownItem(id.into()))
    }

    /// Creates an unknown program error.
    #[must_use]
    pub fn unknown_program(id: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownProgram(id.into()))
    }

    /// Creates a malformed content error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedContent(message.into()))
    }

    /// Creates a persistence failure.
    #[must_use]
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Persistence(message.into()))
    }

    /// Creates a serialization failure.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an I/O failure.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config(message.into()))
    }

    /// Returns true if this error is a dangling content reference met during
    /// play. These are handled with a graceful fallback message.
    #[must_use]
    pub fn is_content_reference(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnknownLocation(_)
                | ErrorKind::UnknownVenue(_)
                | ErrorKind::UnknownEvent(_)
                | ErrorKind::UnknownText { .. }
                | ErrorKind::UnknownOption(_)
                | ErrorKind::UnknownItem(_)
                | ErrorKind::UnknownProgram(_)
        )
    }

    /// Returns true if this error came from the persistence collaborator.
    #[must_use]
    pub fn is_persistence(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Persistence(_) | ErrorKind::FieldTooLong { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Location id not present in the content model.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Venue id not present in the content model.
    #[error("unknown venue: {0}")]
    UnknownVenue(String),

    /// Event id not present in the text table.
    #[error("unknown event: {0}")]
    UnknownEvent(String),

    /// Text variant not present under an event.
    #[error("unknown text {text} for event {event}")]
    UnknownText {
        /// The event that was queried.
        event: String,
        /// The missing text variant.
        text: String,
    },

    /// Option label not known to the current location or text.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Item id not present in the item table.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// Program id not present in the program table.
    #[error("unknown program: {0}")]
    UnknownProgram(String),

    /// A probability was negative or not finite.
    #[error("invalid probability {probability} in table {table}")]
    InvalidProbability {
        /// Name of the table being built.
        table: String,
        /// The offending probability.
        probability: f64,
    },

    /// Probabilities do not sum to one within tolerance.
    #[error("probabilities of table {table} sum to {sum}, expected 1")]
    ProbabilitySum {
        /// Name of the table being built.
        table: String,
        /// The actual sum.
        sum: f64,
    },

    /// A weighted table had no drawable entries.
    #[error("weighted table {0} is empty")]
    EmptyTable(String),

    /// A draw fell past the last cumulative entry.
    #[error("draw {draw} exceeded weighted table total {total}")]
    TableExhausted {
        /// The uniform draw.
        draw: f64,
        /// The last cumulative probability.
        total: f64,
    },

    /// Content document could not be interpreted.
    #[error("malformed content: {0}")]
    MalformedContent(String),

    /// Not enough items held to remove.
    #[error("cannot remove {requested} of {item}: only {held} held")]
    InsufficientItems {
        /// The item being removed.
        item: String,
        /// Count currently held.
        held: u32,
        /// Count requested.
        requested: u32,
    },

    /// No player row exists for the user.
    #[error("unknown player: {0}")]
    UnknownPlayer(u64),

    /// The persistence collaborator reported a failure.
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// A serialized player field exceeded its maximum encoded length.
    #[error("field {field} encodes to {length} bytes (max {max})")]
    FieldTooLong {
        /// Name of the row field.
        field: &'static str,
        /// Encoded length.
        length: usize,
        /// Maximum permitted length.
        max: usize,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// File or terminal I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Player the failing operation ran for.
    pub user: Option<u64>,
    /// Operation name, e.g. `explore`.
    pub operation: Option<String>,
    /// Content source, e.g. a file path.
    pub source: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the player.
    #[must_use]
    pub fn with_user(mut self, user: u64) -> Self {
        self.user = Some(user);
        self
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the content source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut sep = |f: &mut fmt::Formatter<'_>| {
            if first {
                first = false;
                Ok(())
            } else {
                write!(f, ", ")
            }
        };
        if let Some(operation) = &self.operation {
            sep(f)?;
            write!(f, "in {operation}")?;
        }
        if let Some(user) = self.user {
            sep(f)?;
            write!(f, "for user {user}")?;
        }
        if let Some(source) = &self.source {
            sep(f)?;
            write!(f, "at {source}")?;
        }
        Ok(())
    }
}

/// Result alias used throughout Supermind.
pub type Result<T> = std::result::Result<T, Error>;
