//! A terminal stand-in for the chat transport.

use std::io::{self, Stdout, Write};

use supermind_engine::{ChoiceSet, MessageHandle, Messenger};
use supermind_foundation::{ChatId, Error, Result};

/// Writes messages to a terminal, one button row per line as `[label]`.
#[derive(Debug)]
pub struct ConsoleMessenger<W: Write = Stdout> {
    out: W,
    sent: u64,
}

impl ConsoleMessenger<Stdout> {
    /// Creates a messenger writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleMessenger<W> {
    /// Creates a messenger writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, sent: 0 }
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Number of messages sent so far.
    #[must_use]
    pub fn sent(&self) -> u64 {
        self.sent
    }
}

/// Renders `choices` as one line per row.
#[must_use]
pub fn render_choices(choices: &ChoiceSet) -> String {
    choices
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|choice| format!("[{}]", choice.label))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl<W: Write> Messenger for ConsoleMessenger<W> {
    fn send(&mut self, _chat: ChatId, text: &str, choices: Option<&ChoiceSet>) -> Result<MessageHandle> {
        let io_error = |e: io::Error| Error::io(format!("console write failed: {e}"));
        writeln!(self.out, "{text}").map_err(io_error)?;
        if let Some(choices) = choices.filter(|c| !c.is_empty()) {
            writeln!(self.out, "{}", render_choices(choices)).map_err(io_error)?;
        }
        writeln!(self.out).map_err(io_error)?;
        self.out.flush().map_err(io_error)?;
        self.sent += 1;
        Ok(MessageHandle(self.sent))
    }
}
