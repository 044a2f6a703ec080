//! Educational register-machine interpreter library.
//!
//! This crate implements a small line-oriented pseudo-assembly machine with the following:
//! 1. **ISA:** Eight 8-bit registers (`AX`-`HX`), a comparison flag (`ZX`), and a
//!    closed instruction set (`MOV`, `ADD`, `SUB`, `COPY`, `AND`, `OR`, `CMP`,
//!    `JEQ`, `JNEQ`, `JMP`, plus `#` comments).
//! 2. **Core:** Register bank with [0, 255] clamping, append-only execution log,
//!    and the fetch-decode-execute loop with jump arithmetic and halting logic.
//! 3. **Simulation:** Configurable command budget and immutable post-run snapshots
//!    for host display layers.
//!
//! A run is synchronous and deterministic: [`Machine::run`] executes the whole
//! program (or halts on the first failure) before returning, and the host observes
//! the outcome exclusively through the returned [`Snapshot`].
//!
//! # Examples
//!
//! ```
//! use regsim_core::{Machine, Status};
//! use regsim_core::isa::Reg;
//!
//! let mut machine = Machine::new();
//! let snapshot = machine.run("MOV 5, AX\nADD AX, AX");
//! assert_eq!(snapshot.status, Status::HaltedNormal);
//! assert_eq!(snapshot.register(Reg::Ax), 10);
//! ```

/// Interpreter configuration (defaults and the command budget).
pub mod config;
/// Machine core (register bank, execution log, executor).
pub mod core;
/// Instruction set (registers, instruction variants, line decoder).
pub mod isa;
/// Immutable post-run machine state published to the host.
pub mod snapshot;

/// Root configuration type; use `Config::default()` for the standard machine.
pub use crate::config::Config;
/// Halt reasons for runs that end in `Status::HaltedError`.
pub use crate::core::executor::Halt;
/// Main machine type; owns registers, flag, log, and the execution loop.
pub use crate::core::executor::Machine;
/// Executor state machine phases.
pub use crate::core::executor::Status;
/// Immutable machine state observed after a run or reset.
pub use crate::snapshot::Snapshot;
