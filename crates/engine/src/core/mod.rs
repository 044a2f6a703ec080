//! Machine core.
//!
//! This module contains the mutable machine state and the execution loop:
//! 1. **Register Bank:** Eight 8-bit registers with the [0, 255] clamp policy.
//! 2. **Execution Log:** The append-only, line-numbered diagnostic transcript.
//! 3. **Executor:** Fetch-decode-execute loop, program counter, jump
//!    arithmetic, and halting logic.

/// Register bank and clamp policy.
pub mod bank;
/// Executor state machine.
pub mod executor;
/// Append-only execution log.
pub mod log;

pub use bank::RegisterBank;
pub use executor::{Halt, Machine, Status};
pub use log::TraceLog;
