//! One running game: players, content and collaborators.
//!
//! The session is the entry point a transport calls into. Each inbound
//! message loads the player row, takes a content snapshot and hands both to
//! the engine for one [`Turn`].

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use supermind_content::{ContentHandle, ContentSource};
use supermind_engine::choice::continue_grid;
use supermind_engine::{Handled, Messenger, PlayerStore, Turn};
use supermind_foundation::{
    ChatId, Clock, Error, ErrorContext, ErrorKind, Result, SystemClock, Timestamp, UserId,
};
use supermind_player::{GameRules, Player, PlayerRow};

use crate::config::RuntimeConfig;
use crate::console::ConsoleMessenger;
use crate::store::MemoryStore;

/// Label of the button offered with the greeting.
pub const GREETING_BUTTON: &str = "Continue";

/// A running game.
pub struct Session<S: PlayerStore = MemoryStore, M: Messenger = ConsoleMessenger> {
    content: ContentHandle,
    store: S,
    messenger: M,
    clock: Box<dyn Clock>,
    rng: ChaCha8Rng,
    rules: GameRules,
}

impl<S: PlayerStore, M: Messenger> Session<S, M> {
    /// Creates a session on the system clock with an entropy-seeded RNG.
    pub fn new(content: ContentHandle, store: S, messenger: M, rules: GameRules) -> Self {
        Self {
            content,
            store,
            messenger,
            clock: Box::new(SystemClock),
            rng: ChaCha8Rng::from_entropy(),
            rules,
        }
    }

    /// Creates a session with the rules and seed of `config`.
    pub fn from_config(config: &RuntimeConfig, content: ContentHandle, store: S, messenger: M) -> Self {
        let session = Self::new(content, store, messenger, config.rules());
        match config.seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        }
    }

    /// Builder method to replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Builder method to make every draw reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// The content handle.
    #[must_use]
    pub fn content(&self) -> &ContentHandle {
        &self.content
    }

    /// The player store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The messenger.
    #[must_use]
    pub fn messenger(&self) -> &M {
        &self.messenger
    }

    /// The game rules.
    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Current time according to the session clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Handles `/start`: creates the player on first contact and greets them.
    ///
    /// Returns `false` without sending anything if the player already exists.
    ///
    /// # Errors
    ///
    /// Returns a persistence or transport error.
    pub fn start(&mut self, user: UserId, chat: ChatId) -> Result<bool> {
        if self.store.load(user)?.is_some() {
            debug!("repeated start from user {user} ignored");
            return Ok(false);
        }
        if self.content.snapshot().location(&self.rules.start_location).is_none() {
            warn!("start location {} is not in the content", self.rules.start_location);
        }

        let grid = continue_grid(GREETING_BUTTON);
        let mut player = Player::new(user, chat, &self.rules, self.clock.now());
        player.set_suggested_actions(grid.suggested_actions());
        self.store.create(&PlayerRow::encode(&player)?)?;
        info!("NEW_USER\t{user}\t{chat}");

        let text = format!("User {user} is welcome in chat {chat}");
        self.messenger.send(chat, &text, Some(&grid))?;
        Ok(true)
    }

    /// Handles one text message from `user`.
    ///
    /// # Errors
    ///
    /// Returns an unknown-player error if `user` never started, or a
    /// persistence, decoding or transport error.
    pub fn handle_text(&mut self, user: UserId, chat: ChatId, text: &str) -> Result<Handled> {
        let Some(row) = self.store.load(user)? else {
            warn!("UNEXPECTED_USER\t{user}\t{chat}");
            return Err(Error::new(ErrorKind::UnknownPlayer(user.0))
                .with_context(ErrorContext::new().with_user(user.0).with_operation("handle_text")));
        };
        let mut player = row.decode()?;
        let content = self.content.snapshot();
        let mut turn = Turn {
            content: &content,
            rules: &self.rules,
            store: &mut self.store,
            messenger: &mut self.messenger,
            rng: &mut self.rng,
            now: self.clock.now(),
        };
        supermind_engine::handle_text(&mut turn, &mut player, text)
    }

    /// Loads new content from `source` and swaps it in.
    ///
    /// Returns the text to show the administrator: the content status and
    /// validation report on success, or the failure. A failed load keeps the
    /// previous content.
    pub fn reload(&self, source: &dyn ContentSource) -> String {
        match self.content.reload(source) {
            Ok(report) => {
                let mut text = format!("Game data was updated.\n{}", report.status);
                if !report.validation.is_clean() {
                    text.push('\n');
                    text.push_str(report.validation.to_string().trim_end());
                }
                text
            }
            Err(e) => format!("Failed to load game data. Details: {e}"),
        }
    }

    /// One-line summary of the active content.
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "content generation {}: {}",
            self.content.generation(),
            self.content.snapshot().status()
        )
    }
}
