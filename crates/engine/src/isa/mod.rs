//! Instruction set for the register machine.
//!
//! This module defines everything the executor needs to understand one line of
//! source text:
//! 1. **Registers:** The eight named 8-bit registers (`AX`-`HX`).
//! 2. **Instructions:** The closed instruction variant, including `Comment`
//!    and the `Invalid` no-match marker.
//! 3. **Decoding:** A tokenizer-based line decoder; matching is case-sensitive
//!    and whitespace-exact.

/// Line decoder for the assembly grammar.
pub mod decode;
/// Instruction variants and payloads.
pub mod instruction;
/// Register identifiers.
pub mod register;

pub use decode::decode;
pub use instruction::Instruction;
pub use register::Reg;
