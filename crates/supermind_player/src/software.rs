//! Program lifecycle: compiling, installed, running.
//!
//! A program moves `Compiling -> Installed -> Running -> Installed -> ...`.
//! At most one program compiles at a time; completion is detected lazily by
//! [`Software::complete_compile`] when the player's state is next refreshed.

use im::OrdSet;
use serde::{Deserialize, Serialize};
use supermind_content::ContentModel;
use supermind_foundation::{ProgramId, Timestamp};

/// The single in-progress compile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileSlot {
    /// Program being compiled.
    pub program: ProgramId,
    /// CPU reserved for the compile.
    pub cpu: u64,
    /// When compilation started.
    pub started_at: Timestamp,
    /// When the slot was last examined.
    pub last_check: Timestamp,
}

impl CompileSlot {
    /// When the compile finishes: `start + compile_time / cpu * tick`.
    #[must_use]
    pub fn finish_time(&self, compile_time: u64, tick_millis: u64) -> Timestamp {
        let effort = compile_time.saturating_mul(tick_millis);
        self.started_at.plus_millis(effort.div_ceil(self.cpu.max(1)))
    }

    /// Percent complete at `now`, clamped to 100.
    #[must_use]
    pub fn progress_percent(&self, now: Timestamp, compile_time: u64, tick_millis: u64) -> u64 {
        let total = self.finish_time(compile_time, tick_millis).millis_since(self.started_at);
        if total == 0 {
            return 100;
        }
        (now.millis_since(self.started_at).saturating_mul(100) / total).min(100)
    }
}

/// Result of asking to start a compile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompileStart {
    /// Compilation started with this much CPU reserved.
    Started {
        /// Reserved CPU.
        cpu: u64,
    },
    /// Less than one CPU is free.
    InsufficientCpu,
    /// The program is already compiling, installed or running.
    AlreadyOwned,
}

/// Result of asking to run a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunResult {
    /// The program is now running.
    Started,
    /// The program has not been compiled (or is already running).
    NotInstalled,
    /// Free budget does not cover the program.
    Insufficient {
        /// CPU was short.
        cpu: bool,
        /// RAM was short.
        ram: bool,
    },
}

/// Result of asking to stop a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopResult {
    /// The program is back to installed.
    Stopped,
    /// The program was not running.
    NotRunning,
}

/// A player's programs in every lifecycle state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    /// Programs the player has ever started compiling.
    pub known: OrdSet<ProgramId>,
    /// Compiled programs not currently running.
    pub installed: OrdSet<ProgramId>,
    /// Running programs.
    pub running: OrdSet<ProgramId>,
    /// The in-progress compile, if any.
    pub compiling: Option<CompileSlot>,
}

impl Software {
    /// CPU consumed by running programs and the compile slot.
    #[must_use]
    pub fn used_cpu(&self, content: &ContentModel) -> u64 {
        let running: u64 = self
            .running
            .iter()
            .filter_map(|id| content.program(id))
            .map(|p| p.cpu_usage)
            .sum();
        running + self.compiling.as_ref().map_or(0, |slot| slot.cpu)
    }

    /// RAM consumed by running programs.
    #[must_use]
    pub fn used_ram(&self, content: &ContentModel) -> u64 {
        self.running
            .iter()
            .filter_map(|id| content.program(id))
            .map(|p| p.ram_usage)
            .sum()
    }

    /// Returns true if `program` is compiling, installed or running.
    #[must_use]
    pub fn owns(&self, program: &ProgramId) -> bool {
        self.installed.contains(program)
            || self.running.contains(program)
            || self.compiling.as_ref().is_some_and(|s| &s.program == program)
    }

    /// Moves a finished compile into `installed`.
    ///
    /// Returns the program that finished, if any. A slot whose program is no
    /// longer in the content model is left untouched.
    pub fn complete_compile(
        &mut self,
        now: Timestamp,
        content: &ContentModel,
        tick_millis: u64,
    ) -> Option<ProgramId> {
        let slot = self.compiling.as_mut()?;
        let Some(program) = content.program(&slot.program) else {
            log::warn!("compiling unknown program {}", slot.program);
            return None;
        };
        slot.last_check = now;
        if now < slot.finish_time(program.compile_time, tick_millis) {
            return None;
        }
        let finished = self.compiling.take()?.program;
        self.installed.insert(finished.clone());
        Some(finished)
    }

    /// Reserves half of the free CPU (at least one) for compiling `program`.
    ///
    /// Overwrites any previous slot; callers check occupancy first. A program
    /// the player already owns is refused and the state is left unchanged.
    pub fn start_compile(&mut self, program: ProgramId, free_cpu: u64, now: Timestamp) -> CompileStart {
        if self.owns(&program) {
            return CompileStart::AlreadyOwned;
        }
        if free_cpu < 1 {
            return CompileStart::InsufficientCpu;
        }
        let cpu = (free_cpu / 2).max(1);
        self.known.insert(program.clone());
        self.compiling = Some(CompileSlot {
            program,
            cpu,
            started_at: now,
            last_check: now,
        });
        CompileStart::Started { cpu }
    }

    /// Moves an installed program to running if the free budget covers it.
    pub fn run(
        &mut self,
        program: &ProgramId,
        cpu_usage: u64,
        ram_usage: u64,
        free_cpu: u64,
        free_ram: u64,
    ) -> RunResult {
        if !self.installed.contains(program) {
            return RunResult::NotInstalled;
        }
        let cpu_short = free_cpu < cpu_usage;
        let ram_short = free_ram < ram_usage;
        if cpu_short || ram_short {
            return RunResult::Insufficient {
                cpu: cpu_short,
                ram: ram_short,
            };
        }
        self.installed.remove(program);
        self.running.insert(program.clone());
        RunResult::Started
    }

    /// Moves a running program back to installed.
    pub fn stop(&mut self, program: &ProgramId) -> StopResult {
        if self.running.remove(program).is_none() {
            return StopResult::NotRunning;
        }
        self.installed.insert(program.clone());
        StopResult::Stopped
    }
}
