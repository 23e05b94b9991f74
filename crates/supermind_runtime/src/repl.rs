//! The terminal chat loop.
//!
//! The console plays the chat transport for a single local player: every
//! line typed is delivered as that player's message, and replies are printed
//! with their buttons. Lines starting with `:` are administrator commands.

use supermind_content::{ContentSource, JsonFileSource};
use supermind_engine::{Handled, Messenger, PlayerStore};
use supermind_foundation::{ChatId, Error, Result, UserId};

use crate::console::ConsoleMessenger;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use crate::store::MemoryStore;

/// User id of the local player.
pub const LOCAL_USER: UserId = UserId(1);

/// Chat id of the local player.
pub const LOCAL_CHAT: ChatId = ChatId(1);

/// What the REPL should do after one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading.
    Continue,
    /// Leave the loop.
    Quit,
}

/// The interactive terminal chat.
pub struct Repl<E: LineEditor = RustylineEditor, S: PlayerStore = MemoryStore, M: Messenger = ConsoleMessenger> {
    /// The line editor for input.
    editor: E,

    /// The game being played.
    session: Session<S, M>,

    /// Where `:reload` without an argument reads from.
    source: Option<Box<dyn ContentSource>>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl<S: PlayerStore, M: Messenger> Repl<RustylineEditor, S, M> {
    /// Creates a REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(session: Session<S, M>) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor, session))
    }
}

impl<E: LineEditor, S: PlayerStore, M: Messenger> Repl<E, S, M> {
    /// Creates a REPL with the given editor.
    pub fn with_editor(editor: E, session: Session<S, M>) -> Self {
        Self {
            editor,
            session,
            source: None,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Sets the source `:reload` reads from.
    #[must_use]
    pub fn with_source(mut self, source: impl ContentSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session<S, M> {
        &self.session
    }

    /// Runs the loop until `:quit` or end of input.
    ///
    /// The local player is started automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails or the player cannot be created.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }
        self.session.start(LOCAL_USER, LOCAL_CHAT)?;
        self.refresh_choices();

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.eval(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => print_error(&e),
            }
            self.refresh_choices();
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one line of input.
    ///
    /// # Errors
    ///
    /// Returns the session's error for player input; administrator commands
    /// report their own failures as text.
    pub fn eval(&mut self, input: &str) -> Result<Flow> {
        let input = input.trim();
        if let Some(meta) = input.strip_prefix(':') {
            return Ok(self.eval_meta(meta));
        }
        if input == "/start" {
            self.session.start(LOCAL_USER, LOCAL_CHAT)?;
            return Ok(Flow::Continue);
        }
        if self.session.handle_text(LOCAL_USER, LOCAL_CHAT, input)? == Handled::Ignored {
            println!("\x1b[2m(not one of the offered choices)\x1b[0m");
        }
        Ok(Flow::Continue)
    }

    fn eval_meta(&mut self, meta: &str) -> Flow {
        let (command, arg) = meta
            .split_once(char::is_whitespace)
            .map_or((meta, ""), |(c, a)| (c, a.trim()));
        match command {
            "q" | "quit" => return Flow::Quit,
            "status" => println!("{}", self.session.status()),
            "reload" => {
                let text = if !arg.is_empty() {
                    let source = JsonFileSource::new(arg);
                    let text = self.session.reload(&source);
                    self.source = Some(Box::new(source));
                    text
                } else if let Some(source) = &self.source {
                    self.session.reload(source.as_ref())
                } else {
                    "No content source to reload from. Use :reload <path>".to_string()
                };
                println!("{text}");
            }
            "help" => print_help(),
            other => print_error(&Error::config(format!("unknown command :{other}"))),
        }
        Flow::Continue
    }

    /// Offers the local player's current buttons for tab completion.
    fn refresh_choices(&mut self) {
        let labels = self
            .session
            .store()
            .load(LOCAL_USER)
            .ok()
            .flatten()
            .and_then(|row| row.decode().ok())
            .map(|player| player.suggested_actions().keys().cloned().collect())
            .unwrap_or_default();
        self.editor.set_choices(labels);
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_help() {
    println!(
        "Type the label of a button to press it, or a command:
    /software            List programs
    /compile_<id>        Compile a program
    /run_<id>            Run a compiled program
    /stop_<id>           Stop a running program
    /view_<id>           Show an item or program
    :status              Show the loaded content
    :reload [path]       Reload content
    :quit                Exit"
    );
}

fn print_banner() {
    println!("\x1b[1;36mSupermind\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a button label to press it, :help for commands, Ctrl+D to exit.\n");
}
