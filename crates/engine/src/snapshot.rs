//! Immutable machine state published to the host.
//!
//! The executor's registers, flag, and log are mutable only while a run is in
//! progress; the host never holds a reference into them. After each run or
//! reset it pulls a [`Snapshot`] — a plain value it can render, serialize, or
//! keep — which keeps concurrent host writes structurally impossible.

use serde::Serialize;

use crate::core::executor::Status;
use crate::isa::register::{REGISTER_COUNT, Reg};

/// Machine state at a rest point, suitable for direct display.
///
/// Serializes to JSON for embedding hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The eight register values in bank order (`AX` first).
    pub registers: [u8; REGISTER_COUNT],
    /// Comparison flag (0 or 1).
    pub zx: u8,
    /// Commands executed in the run that produced this snapshot.
    pub commands_used: u64,
    /// Final executor phase.
    pub status: Status,
    /// The newline-joined execution transcript, banner first.
    pub transcript: String,
}

impl Snapshot {
    /// Value of a single register.
    pub fn register(&self, reg: Reg) -> u8 {
        self.registers[reg.index()]
    }

    /// Iterates registers as `(register, value)` pairs in bank order.
    pub fn iter(&self) -> impl Iterator<Item = (Reg, u8)> + '_ {
        Reg::ALL.iter().map(|&reg| (reg, self.registers[reg.index()]))
    }
}
