//! Slash commands typed as free text.
//!
//! Unlike buttons, commands are always accepted: they do not need to be in
//! the player's suggested actions.

use supermind_foundation::ProgramId;

/// A parsed slash command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `/software`
    Software,
    /// `/compile_<program>`
    Compile(ProgramId),
    /// `/run_<program>`
    Run(ProgramId),
    /// `/stop_<program>`
    Stop(ProgramId),
    /// `/view_<entity>`
    View(String),
}

impl Command {
    /// Parses `text`, returning `None` if it is not a known command.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text == "/software" {
            return Some(Command::Software);
        }
        let (name, arg) = text.strip_prefix('/')?.split_once('_')?;
        if arg.is_empty() {
            return None;
        }
        match name {
            "compile" => Some(Command::Compile(ProgramId::new(arg))),
            "run" => Some(Command::Run(ProgramId::new(arg))),
            "stop" => Some(Command::Stop(ProgramId::new(arg))),
            "view" => Some(Command::View(arg.to_string())),
            _ => None,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Software => "software",
            Command::Compile(_) => "compile",
            Command::Run(_) => "run",
            Command::Stop(_) => "stop",
            Command::View(_) => "view",
        }
    }
}
