//! Items and programs.

use std::fmt;

/// A carryable item.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Description shown on the item card.
    pub description: String,
    /// Weight of one unit; always positive.
    pub weight: f64,
}

impl Item {
    /// Info card shown by `/view_<id>`.
    #[must_use]
    pub fn info(&self) -> String {
        format!("{}\n{}\nWeight: {}", self.name, self.description, self.weight)
    }
}

/// A program the player can compile and run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    /// Display name.
    pub name: String,
    /// Description shown on the program card.
    pub description: String,
    /// CPU consumed while running.
    pub cpu_usage: u64,
    /// RAM consumed while running.
    pub ram_usage: u64,
    /// Compile effort in ticks at one CPU.
    pub compile_time: u64,
}

impl Program {
    /// Info card shown by `/view_<id>`.
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "{}\n{}\nCPU: {}, RAM: {}, compile time: {}",
            self.name, self.description, self.cpu_usage, self.ram_usage, self.compile_time
        )
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
