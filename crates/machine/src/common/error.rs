//! Fault definitions.
//!
//! This module defines the error taxonomy for the interpreter. It provides:
//! 1. **Decode Faults:** Unknown opcodes and addressing modes.
//! 2. **Resolution Faults:** Illegal write destinations and negative addresses.
//! 3. **Contract Faults:** Draining an empty output channel.
//!
//! Every fault is fatal for the machine instance that raised it. Memory
//! mutated before the fault is left as-is and stays inspectable, but the
//! instance must not be stepped again; callers are expected to abort the
//! computation that was driving it.

use thiserror::Error;

use super::Word;

/// A fatal machine fault.
///
/// Each variant carries the instruction pointer at the time of the fault
/// (and the offending opcode, mode digit, or address where one exists) so
/// the failing instruction can be located in the program listing.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    /// The low two digits of the instruction word name no operation.
    #[error("unknown opcode {opcode} at ip {ip}")]
    UnknownOpcode {
        /// The unrecognized two-digit opcode value.
        opcode: Word,
        /// Instruction pointer of the faulting instruction.
        ip: usize,
    },

    /// A mode digit outside `{0, 1, 2}` was packed into the instruction word.
    #[error("unknown addressing mode {mode} at ip {ip}")]
    UnknownMode {
        /// The unrecognized mode digit.
        mode: Word,
        /// Instruction pointer of the faulting instruction.
        ip: usize,
    },

    /// A destination parameter was encoded in immediate mode.
    ///
    /// Immediate operands are literals; there is no address to store through.
    #[error("write through an immediate-mode parameter at ip {ip}")]
    ImmediateWrite {
        /// Instruction pointer of the faulting instruction.
        ip: usize,
    },

    /// An operand resolved to an address below zero.
    #[error("negative address {addr} resolved at ip {ip}")]
    NegativeAddress {
        /// The resolved (negative) address.
        addr: Word,
        /// Instruction pointer of the faulting instruction.
        ip: usize,
    },

    /// [`get_output`](crate::Machine::get_output) was called with nothing in
    /// the output channel.
    ///
    /// This is a caller contract violation rather than a program fault;
    /// check [`output_len`](crate::Machine::output_len) or use
    /// [`try_get_output`](crate::Machine::try_get_output) instead.
    #[error("output channel drained while empty")]
    OutputUnderflow,
}
