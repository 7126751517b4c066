//! Instruction Disassembler.
//!
//! Converts one instruction at a tape position into a human-readable
//! mnemonic string for debug tracing, the `disasm` listing, and test
//! diagnostics.
//!
//! Operands are rendered with a sigil per addressing mode: `@n` for
//! position, `#n` for immediate, `~n` for relative. Words that decode to no
//! operation render as `dat` cells, since program listings freely interleave
//! code and data.

use std::fmt::Write as _;

use crate::isa::{Mode, Opcode, mode_digit};
use crate::machine::tape::Tape;

/// Disassembles the instruction at `ip`.
///
/// Returns the rendered text and the instruction's length in cells, so a
/// caller producing a listing can advance to the next instruction. Undecodable
/// words (unknown opcode or mode digit) are rendered as a single `dat` cell
/// of length 1; the run-time machine faults on these, but a listing should
/// keep going.
pub fn disassemble(tape: &Tape, ip: usize) -> (String, usize) {
    let word = tape.read(ip);
    let Ok(opcode) = Opcode::from_word(word, ip) else {
        return (format!("dat {word}"), 1);
    };

    let mut text = opcode.mnemonic().to_string();
    for param in 1..=opcode.param_count() {
        let Ok(mode) = Mode::from_digit(mode_digit(word, param), ip) else {
            return (format!("dat {word}"), 1);
        };
        let operand = tape.read(ip + param);
        let sigil = match mode {
            Mode::Position => '@',
            Mode::Immediate => '#',
            Mode::Relative => '~',
        };
        text.push_str(if param == 1 { " " } else { ", " });
        let _ = write!(text, "{sigil}{operand}");
    }

    (text, 1 + opcode.param_count())
}
