//! Register bank and clamp policy.
//!
//! This module implements the machine's eight-register bank. It performs:
//! 1. **Storage:** Eight cells, all zero after construction or reset.
//! 2. **Invariant Enforcement:** Every write is clamped into [0, 255], so the
//!    stored value is in range at every observable rest point.
//! 3. **Diagnostics:** A clamp that fires appends a warning entry to the
//!    execution log naming the register and the source line.

use crate::core::log::TraceLog;
use crate::isa::register::{REGISTER_COUNT, Reg};

/// Lower bound of a register value at rest.
pub const REGISTER_MIN: i64 = 0;

/// Upper bound of a register value at rest.
pub const REGISTER_MAX: i64 = 255;

/// The eight-register bank.
///
/// Values are stored as `u8`, which makes the [0, 255] at-rest invariant a
/// property of the type; writes pass through [`RegisterBank::set`], which
/// clamps the incoming wide value and records a warning when it had to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterBank {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterBank {
    /// Creates a bank with all eight registers at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every register to zero.
    pub fn reset(&mut self) {
        self.regs = [0; REGISTER_COUNT];
    }

    /// Reads a register value. Never fails.
    #[inline]
    pub fn get(&self, reg: Reg) -> u8 {
        self.regs[reg.index()]
    }

    /// Writes a raw (possibly out-of-range) value to a register, applying the
    /// clamp policy.
    ///
    /// A value below 0 is replaced with 0 and a value above 255 with 255; in
    /// either case a warning naming `reg` and the 1-based form of `line_index`
    /// is appended to `log` before the write is observable. In-range values
    /// are stored silently.
    pub fn set(&mut self, reg: Reg, value: i64, line_index: usize, log: &mut TraceLog) {
        let clamped = if value < REGISTER_MIN {
            log.append(
                line_index,
                &format!(
                    "*** Warning: Line {} has set {reg} to a value below 0. It has been clamped to 0",
                    line_index + 1
                ),
            );
            REGISTER_MIN
        } else if value > REGISTER_MAX {
            log.append(
                line_index,
                &format!(
                    "*** Warning: Line {} has set {reg} to a value above 255. It has been clamped to 255",
                    line_index + 1
                ),
            );
            REGISTER_MAX
        } else {
            value
        };
        self.regs[reg.index()] = clamped as u8;
    }

    /// Snapshot of all eight registers in bank order (`AX` first).
    pub fn values(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }
}
