//! # Line-Decoder Grammar Tests
//!
//! One test per grammar rule, plus tables of near-miss lines that must decode
//! as `Invalid`. Matching is case-sensitive and whitespace-exact, so most of
//! the value here is in the rejection cases.

use rstest::rstest;

use regsim_core::isa::{Instruction, Reg, decode};

#[test]
fn test_mov_decodes_value_and_destination() {
    assert_eq!(
        decode("MOV 5, AX"),
        Instruction::Move {
            value: 5,
            dest: Reg::Ax
        }
    );
}

#[test]
fn test_mov_accepts_out_of_range_literals() {
    // Clamping is the executor's job; the grammar only wants digits.
    assert_eq!(
        decode("MOV 300, HX"),
        Instruction::Move {
            value: 300,
            dest: Reg::Hx
        }
    );
}

#[rstest]
#[case("ADD AX, BX", Instruction::Add { src: Reg::Ax, dest: Reg::Bx })]
#[case("SUB CX, DX", Instruction::Subtract { src: Reg::Cx, dest: Reg::Dx })]
#[case("COPY EX, FX", Instruction::Copy { src: Reg::Ex, dest: Reg::Fx })]
#[case("AND GX, HX", Instruction::And { src: Reg::Gx, dest: Reg::Hx })]
#[case("OR AX, AX", Instruction::Or { src: Reg::Ax, dest: Reg::Ax })]
#[case("CMP BX, AX", Instruction::Compare { src: Reg::Bx, dest: Reg::Ax })]
fn test_two_register_instructions(#[case] line: &str, #[case] expected: Instruction) {
    assert_eq!(decode(line), expected);
}

#[rstest]
#[case("JEQ 5", Instruction::JumpIfEqual { target: 5 })]
#[case("JNEQ 12", Instruction::JumpIfNotEqual { target: 12 })]
#[case("JMP 1", Instruction::Jump { target: 1 })]
#[case("JMP 0", Instruction::Jump { target: 0 })]
fn test_jump_instructions(#[case] line: &str, #[case] expected: Instruction) {
    assert_eq!(decode(line), expected);
}

#[rstest]
#[case("#")]
#[case("# a comment")]
#[case("#MOV 5, AX")]
fn test_comment_lines(#[case] line: &str) {
    assert_eq!(decode(line), Instruction::Comment);
}

#[rstest]
#[case::lowercase_mnemonic("mov 5, AX")]
#[case::mixed_case_mnemonic("Mov 5, AX")]
#[case::lowercase_register("MOV 5, ax")]
#[case::missing_space_after_comma("MOV 5,AX")]
#[case::double_space("MOV  5, AX")]
#[case::trailing_text("MOV 5, AX extra")]
#[case::leading_space(" MOV 5, AX")]
#[case::signed_literal("MOV -5, AX")]
#[case::plus_signed_literal("MOV +5, AX")]
#[case::hex_literal("MOV 0x10, AX")]
#[case::flag_as_destination("MOV 5, ZX")]
#[case::missing_operand("MOV 5")]
#[case::register_literal_swapped("MOV AX, 5")]
fn test_invalid_mov_forms(#[case] line: &str) {
    assert_eq!(decode(line), Instruction::Invalid);
}

#[rstest]
#[case::unknown_mnemonic("FOO 1, AX")]
#[case::empty_line("")]
#[case::bare_mnemonic("ADD")]
#[case::one_register("ADD AX")]
#[case::three_registers("ADD AX, BX, CX")]
#[case::lowercase("add AX, BX")]
#[case::jump_without_target("JMP")]
#[case::jump_register_target("JMP AX")]
#[case::jump_trailing_garbage("JEQ 5x")]
#[case::jump_negative_target("JNEQ -1")]
#[case::whitespace_only("   ")]
#[case::late_comment_marker("MOV 5, AX # trailing")]
fn test_invalid_lines(#[case] line: &str) {
    assert_eq!(decode(line), Instruction::Invalid);
}

#[test]
fn test_jneq_is_not_mistaken_for_jeq() {
    assert_eq!(decode("JNEQ 3"), Instruction::JumpIfNotEqual { target: 3 });
    assert_eq!(decode("JEQ 3"), Instruction::JumpIfEqual { target: 3 });
}

#[test]
fn test_oversized_literal_is_a_non_match() {
    // A literal the integer type cannot hold fails the rule instead of
    // wrapping.
    assert_eq!(decode("MOV 99999999999999999999, AX"), Instruction::Invalid);
    assert_eq!(decode("JMP 99999999999999999999"), Instruction::Invalid);
}
