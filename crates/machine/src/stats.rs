//! Execution statistics collection and reporting.
//!
//! This module tracks what a machine did over its run. It provides:
//! 1. **Retired instructions:** Total count and a per-category mix (ALU,
//!    branch, input, output, base adjustment, halt).
//! 2. **I/O traffic:** Values consumed from and produced into the channels,
//!    and how often the machine paused for input.
//! 3. **Tape growth:** High-water mark of materialized cells.
//!
//! Statistics are plain data, updated by the machine as it steps and
//! serializable for external reporting.

use serde::Serialize;

use crate::isa::Opcode;

/// Statistics accumulated across a machine's lifetime.
///
/// An instruction is "retired" when it fully executes; an `in` that pauses
/// on an empty channel retires only once it re-executes with input
/// available.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MachineStats {
    /// Total instructions retired.
    pub instructions_retired: u64,

    /// Arithmetic and comparison instructions retired (`add`, `mul`, `lt`,
    /// `eq`).
    pub inst_alu: u64,
    /// Conditional jumps retired (`jnz`, `jz`), taken or not.
    pub inst_branch: u64,
    /// Input instructions retired.
    pub inst_input: u64,
    /// Output instructions retired.
    pub inst_output: u64,
    /// Relative-base adjustments retired (`arb`).
    pub inst_base_adjust: u64,
    /// Halt instructions retired (0 or 1).
    pub inst_halt: u64,

    /// Values consumed from the input channel.
    pub inputs_consumed: u64,
    /// Values produced into the output channel.
    pub outputs_produced: u64,
    /// Times the machine transitioned to awaiting input.
    pub pauses: u64,

    /// Largest number of tape cells materialized at any point.
    pub tape_high_water: usize,
}

impl MachineStats {
    /// Counts one retired instruction in the totals and its category.
    pub fn record(&mut self, opcode: Opcode) {
        self.instructions_retired += 1;
        match opcode {
            Opcode::Add | Opcode::Mul | Opcode::LessThan | Opcode::Equals => self.inst_alu += 1,
            Opcode::JumpIfTrue | Opcode::JumpIfFalse => self.inst_branch += 1,
            Opcode::Input => self.inst_input += 1,
            Opcode::Output => self.inst_output += 1,
            Opcode::AdjustRelativeBase => self.inst_base_adjust += 1,
            Opcode::Halt => self.inst_halt += 1,
        }
    }

    /// Raises the tape high-water mark to `len` if it grew.
    #[inline]
    pub fn observe_tape(&mut self, len: usize) {
        if len > self.tape_high_water {
            self.tape_high_water = len;
        }
    }
}
