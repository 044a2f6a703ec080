//! Instruction variants for the machine.
//!
//! One source line decodes to exactly one `Instruction`. The set is closed:
//! anything the grammar does not recognise decodes to [`Instruction::Invalid`],
//! which the executor treats as a fatal parse failure for the whole run.

use crate::isa::register::Reg;

/// A decoded source line.
///
/// `Move` carries a literal non-negative value; the two-register instructions
/// carry `(source, destination)`; the jump variants carry a 1-based target
/// line number as written in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// `MOV <value>, <dest>` — load a literal into a register.
    Move {
        /// Literal value as written in source (clamped into [0, 255] on write).
        value: i64,
        /// Destination register.
        dest: Reg,
    },
    /// `ADD <src>, <dest>` — `dest ← dest + src`.
    Add {
        /// Source register.
        src: Reg,
        /// Destination register.
        dest: Reg,
    },
    /// `SUB <src>, <dest>` — `dest ← dest − src`.
    Subtract {
        /// Source register.
        src: Reg,
        /// Destination register.
        dest: Reg,
    },
    /// `COPY <src>, <dest>` — `dest ← src`.
    Copy {
        /// Source register.
        src: Reg,
        /// Destination register.
        dest: Reg,
    },
    /// `AND <src>, <dest>` — `dest ← dest AND src` (bitwise).
    And {
        /// Source register.
        src: Reg,
        /// Destination register.
        dest: Reg,
    },
    /// `OR <src>, <dest>` — `dest ← dest OR src` (bitwise).
    Or {
        /// Source register.
        src: Reg,
        /// Destination register.
        dest: Reg,
    },
    /// `CMP <src>, <dest>` — `ZX ← 1` if the values are equal, else `0`.
    Compare {
        /// Source register.
        src: Reg,
        /// Destination register.
        dest: Reg,
    },
    /// `JEQ <line>` — jump to the 1-based target line when `ZX == 1`.
    JumpIfEqual {
        /// 1-based target line number.
        target: i64,
    },
    /// `JNEQ <line>` — jump to the 1-based target line when `ZX == 0`.
    JumpIfNotEqual {
        /// 1-based target line number.
        target: i64,
    },
    /// `JMP <line>` — unconditional jump to the 1-based target line.
    Jump {
        /// 1-based target line number.
        target: i64,
    },
    /// A line starting with `#`. Produces no state change, no log entry, and
    /// does not count toward the command budget.
    Comment,
    /// No grammar rule matched. Fatal for the run.
    Invalid,
}
