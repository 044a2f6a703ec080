//! Line decoder for the assembly grammar.
//!
//! Converts one line of source text into an [`Instruction`]. The grammar is an
//! explicit tokenizer rather than a regex engine, so each rule is independently
//! testable:
//! 1. **Mnemonic match:** Case-sensitive, followed by exactly one space.
//! 2. **Field split:** Two-field instructions separate their fields with the
//!    literal `", "`.
//! 3. **Whole-line match:** Any leftover characters make the line invalid.
//!
//! `decode` never fails; unrecognised lines map to [`Instruction::Invalid`],
//! which the executor turns into a fatal halt.

use crate::isa::instruction::Instruction;
use crate::isa::register::Reg;

/// Separator between the two fields of an instruction.
const FIELD_SEPARATOR: &str = ", ";

/// Marker for comment lines; consumes the whole line.
const COMMENT_MARKER: char = '#';

/// Decodes one source line into an instruction.
///
/// Matching is case-sensitive and whitespace-exact: `mov 5, AX` or
/// `MOV 5,AX` are both [`Instruction::Invalid`].
///
/// # Examples
///
/// ```
/// use regsim_core::isa::{decode, Instruction, Reg};
///
/// assert_eq!(
///     decode("MOV 5, AX"),
///     Instruction::Move { value: 5, dest: Reg::Ax }
/// );
/// assert_eq!(decode("mov 5, AX"), Instruction::Invalid);
/// ```
pub fn decode(line: &str) -> Instruction {
    if line.starts_with(COMMENT_MARKER) {
        return Instruction::Comment;
    }

    if let Some(fields) = line.strip_prefix("MOV ") {
        if let Some((value, dest)) = value_and_register(fields) {
            return Instruction::Move { value, dest };
        }
    } else if let Some(fields) = line.strip_prefix("ADD ") {
        if let Some((src, dest)) = register_pair(fields) {
            return Instruction::Add { src, dest };
        }
    } else if let Some(fields) = line.strip_prefix("SUB ") {
        if let Some((src, dest)) = register_pair(fields) {
            return Instruction::Subtract { src, dest };
        }
    } else if let Some(fields) = line.strip_prefix("COPY ") {
        if let Some((src, dest)) = register_pair(fields) {
            return Instruction::Copy { src, dest };
        }
    } else if let Some(fields) = line.strip_prefix("AND ") {
        if let Some((src, dest)) = register_pair(fields) {
            return Instruction::And { src, dest };
        }
    } else if let Some(fields) = line.strip_prefix("OR ") {
        if let Some((src, dest)) = register_pair(fields) {
            return Instruction::Or { src, dest };
        }
    } else if let Some(fields) = line.strip_prefix("CMP ") {
        if let Some((src, dest)) = register_pair(fields) {
            return Instruction::Compare { src, dest };
        }
    } else if let Some(field) = line.strip_prefix("JEQ ") {
        if let Some(target) = decimal_literal(field) {
            return Instruction::JumpIfEqual { target };
        }
    } else if let Some(field) = line.strip_prefix("JNEQ ") {
        if let Some(target) = decimal_literal(field) {
            return Instruction::JumpIfNotEqual { target };
        }
    } else if let Some(field) = line.strip_prefix("JMP ") {
        if let Some(target) = decimal_literal(field) {
            return Instruction::Jump { target };
        }
    }

    Instruction::Invalid
}

/// Parses a `<digits>, <REG>` field pair (the `MOV` operand form).
fn value_and_register(fields: &str) -> Option<(i64, Reg)> {
    let (value, dest) = fields.split_once(FIELD_SEPARATOR)?;
    Some((decimal_literal(value)?, Reg::from_token(dest)?))
}

/// Parses a `<REG>, <REG>` field pair as `(source, destination)`.
fn register_pair(fields: &str) -> Option<(Reg, Reg)> {
    let (src, dest) = fields.split_once(FIELD_SEPARATOR)?;
    Some((Reg::from_token(src)?, Reg::from_token(dest)?))
}

/// Parses a non-negative decimal literal: one or more ASCII digits, nothing
/// else. A literal too large for `i64` is a non-match, like any other token
/// the grammar cannot capture.
fn decimal_literal(token: &str) -> Option<i64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}
