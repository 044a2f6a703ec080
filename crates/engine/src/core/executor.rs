//! Executor state machine.
//!
//! This module implements the fetch-decode-execute loop around the register
//! bank, comparison flag, and execution log. It performs the following:
//! 1. **State Management:** Program counter, executed-command counter, and the
//!    Idle / Running / Halted phases.
//! 2. **Jump Arithmetic:** 1-based source targets converted to 0-based
//!    indices; taken jumps redirect the counter instead of advancing it.
//! 3. **Halting Logic:** Unknown commands and the command budget halt the run
//!    immediately; running past the last line halts normally.
//!
//! No error values cross the host boundary: `run` always returns a
//! [`Snapshot`], and failures are visible only through [`Status`] and the
//! transcript.

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::core::bank::RegisterBank;
use crate::core::log::TraceLog;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::register::Reg;
use crate::snapshot::Snapshot;

/// Reason a run ended in [`Status::HaltedError`].
///
/// The `Display` text of each variant is the fixed message appended to the
/// log when the halt occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum Halt {
    /// A line matched no grammar rule (including case mismatches).
    #[error("*** ERROR: Unknown command. Remember: all commands and registers are case-sensitive ***")]
    UnknownCommand,
    /// The executed-command counter reached the configured budget.
    #[error("*** ERROR: Too many commands; exiting. ***")]
    CommandBudgetExhausted,
}

/// Executor phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Status {
    /// Reset state: registers, flag, and counters cleared; log reseeded.
    #[default]
    Idle,
    /// Inside the fetch-decode-execute loop.
    Running,
    /// The program counter ran past the last line with no error.
    HaltedNormal,
    /// The run was stopped by a fatal condition.
    HaltedError(Halt),
}

/// The register machine: bank, flag, log, and the execution loop.
///
/// One `Machine` processes one program at a time; a run is synchronous and
/// deterministic, and every call to [`Machine::run`] starts from a full reset.
///
/// # Examples
///
/// ```
/// use regsim_core::{Machine, Status};
/// use regsim_core::isa::Reg;
///
/// let mut machine = Machine::new();
/// let snapshot = machine.run("MOV 300, AX");
/// assert_eq!(snapshot.register(Reg::Ax), 255); // clamped
/// assert_eq!(snapshot.status, Status::HaltedNormal);
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    config: Config,
    bank: RegisterBank,
    zx: u8,
    pc: usize,
    commands_used: u64,
    log: TraceLog,
    status: Status,
}

impl Machine {
    /// Creates a machine with the default configuration, in the reset state.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a machine with an explicit configuration, in the reset state.
    pub fn with_config(config: Config) -> Self {
        let mut machine = Self {
            config,
            bank: RegisterBank::new(),
            zx: 0,
            pc: 0,
            commands_used: 0,
            log: TraceLog::new(),
            status: Status::Idle,
        };
        machine.reset();
        machine
    }

    /// Clears all registers and the flag, zeroes both counters, and reseeds
    /// the log banner. Leaves the machine in [`Status::Idle`].
    pub fn reset(&mut self) {
        self.bank.reset();
        self.zx = 0;
        self.pc = 0;
        self.commands_used = 0;
        self.log.reset();
        self.status = Status::Idle;
    }

    /// Runs a program from a fresh reset and returns the final state.
    ///
    /// The whole text is trimmed once, then split into lines; an empty
    /// program is a no-op run that halts normally. Comment lines advance the
    /// program counter without executing or counting. The first line that
    /// matches no grammar rule halts the run with
    /// [`Halt::UnknownCommand`]; exceeding the command budget halts with
    /// [`Halt::CommandBudgetExhausted`] even mid-program.
    pub fn run(&mut self, source: &str) -> Snapshot {
        self.reset();

        let trimmed = source.trim();
        if trimmed.is_empty() {
            self.status = Status::HaltedNormal;
            return self.snapshot();
        }

        let lines: Vec<&str> = trimmed.lines().collect();
        tracing::debug!(lines = lines.len(), "starting run");
        self.status = Status::Running;

        while self.pc < lines.len() {
            match decode(lines[self.pc]) {
                Instruction::Comment => {
                    self.pc += 1;
                }
                Instruction::Invalid => {
                    self.halt(Halt::UnknownCommand);
                    break;
                }
                instruction => {
                    self.pc = self.execute(instruction);
                    self.commands_used += 1;
                    if self.commands_used >= self.config.command_budget {
                        self.halt(Halt::CommandBudgetExhausted);
                        break;
                    }
                }
            }
        }

        if self.status == Status::Running {
            self.status = Status::HaltedNormal;
        }
        tracing::debug!(status = ?self.status, commands = self.commands_used, "run halted");
        self.snapshot()
    }

    /// Immutable state for the host: registers, flag, counters, status, and
    /// the transcript.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registers: self.bank.values(),
            zx: self.zx,
            commands_used: self.commands_used,
            status: self.status,
            transcript: self.log.transcript(),
        }
    }

    /// Current executor phase.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Read-only view of the execution log.
    pub fn log(&self) -> &TraceLog {
        &self.log
    }

    /// Applies one decoded instruction and returns the next program-counter
    /// value: `target − 1` for a taken jump, `pc + 1` otherwise.
    ///
    /// The source register is read before the destination is written, so
    /// reflexive forms like `ADD AX, AX` double the register. Every mutating
    /// instruction (Compare included) finishes with the bank's clamp step on
    /// its destination; a clamp warning therefore precedes the instruction's
    /// own log entry.
    fn execute(&mut self, instruction: Instruction) -> usize {
        let pc = self.pc;
        match instruction {
            Instruction::Move { value, dest } => {
                self.bank.set(dest, value, pc, &mut self.log);
                self.log.append(pc, &format!("Moving {value} into {dest}"));
            }
            Instruction::Add { src, dest } => {
                let sum = i64::from(self.bank.get(dest)) + i64::from(self.bank.get(src));
                self.bank.set(dest, sum, pc, &mut self.log);
                self.log.append(pc, &format!("Adding {src} to {dest}"));
            }
            Instruction::Subtract { src, dest } => {
                let difference = i64::from(self.bank.get(dest)) - i64::from(self.bank.get(src));
                self.bank.set(dest, difference, pc, &mut self.log);
                self.log.append(pc, &format!("Subtracting {src} to {dest}"));
            }
            Instruction::Copy { src, dest } => {
                let value = i64::from(self.bank.get(src));
                self.bank.set(dest, value, pc, &mut self.log);
                self.log.append(pc, &format!("Copying {src} to {dest}"));
            }
            Instruction::And { src, dest } => {
                let value = i64::from(self.bank.get(dest) & self.bank.get(src));
                self.bank.set(dest, value, pc, &mut self.log);
                self.log.append(pc, &format!("ANDing {src} to {dest}"));
            }
            Instruction::Or { src, dest } => {
                let value = i64::from(self.bank.get(dest) | self.bank.get(src));
                self.bank.set(dest, value, pc, &mut self.log);
                self.log.append(pc, &format!("ORing {src} to {dest}"));
            }
            Instruction::Compare { src, dest } => {
                self.zx = u8::from(self.bank.get(dest) == self.bank.get(src));
                // The uniform post-instruction clamp step runs even though CMP
                // never writes; the destination is already in range, so this
                // cannot fire.
                let unchanged = i64::from(self.bank.get(dest));
                self.bank.set(dest, unchanged, pc, &mut self.log);
                self.log.append(pc, &format!("Comparing {src} to {dest}"));
            }
            Instruction::JumpIfEqual { target } => {
                if self.zx == 1 {
                    self.log
                        .append(pc, &format!("ZX is 1 so jumping to line {target}"));
                    return target_index(target);
                }
            }
            Instruction::JumpIfNotEqual { target } => {
                if self.zx == 0 {
                    self.log
                        .append(pc, &format!("ZX is 0 so jumping to line {target}"));
                    return target_index(target);
                }
            }
            Instruction::Jump { target } => {
                self.log.append(pc, &format!("Jumping to line {target}"));
                return target_index(target);
            }
            // Comments and invalid lines never reach the dispatcher.
            Instruction::Comment | Instruction::Invalid => {}
        }
        pc + 1
    }

    /// Marks the run as failed and appends the halt's fixed log message.
    ///
    /// The message is logged against the current program counter: for an
    /// unknown command that is the offending line, and for the exhausted
    /// budget it is the line the counter had already advanced to.
    fn halt(&mut self, reason: Halt) {
        self.log.append(self.pc, &reason.to_string());
        self.status = Status::HaltedError(reason);
    }

    /// Reads a register value (test and host convenience).
    pub fn register(&self, reg: Reg) -> u8 {
        self.bank.get(reg)
    }

    /// Current comparison-flag value (0 or 1).
    pub fn zx(&self) -> u8 {
        self.zx
    }

    /// Commands executed so far in the current/last run.
    pub fn commands_used(&self) -> u64 {
        self.commands_used
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a 1-based source jump target to a 0-based line index.
///
/// A target of 0 (the grammar admits it; no source line has that number)
/// saturates to the first line. Targets past the end of the program are
/// returned as-is; the run loop then terminates normally.
fn target_index(target: i64) -> usize {
    usize::try_from(target - 1).unwrap_or(0)
}
