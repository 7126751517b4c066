//! Intcode virtual machine library.
//!
//! This crate implements a stack-free, register-less interpreter over a
//! growable integer tape, with the following:
//! 1. **Machine:** Instruction pointer, relative base, FIFO input/output
//!    channels, and a tri-state run loop (running, awaiting input, halted).
//! 2. **Tape:** Auto-extending zero-initialized memory with a single
//!    centralized read/write pair.
//! 3. **ISA:** A closed opcode enumeration, per-parameter addressing-mode
//!    decoding, and a disassembler for tracing and diagnostics.
//! 4. **Loader:** Program-file parsing (signed decimal tokens) and raw line
//!    reading for the drivers that feed the machine.
//! 5. **Statistics:** Retired-instruction mix, I/O traffic, and tape growth
//!    reporting.
//!
//! # Example
//!
//! ```
//! use intcode_core::{Machine, RunState};
//!
//! // Reads one value and writes it back out.
//! let mut machine = Machine::new(&[3, 0, 4, 0, 99]);
//! machine.send_input(42);
//! assert_eq!(machine.run_until_blocked(), Ok(RunState::Halted));
//! assert_eq!(machine.try_get_output(), Some(42));
//! ```

/// Common types shared across the crate (words, faults).
pub mod common;
/// Instruction set (opcodes, addressing modes, disassembler).
pub mod isa;
/// Program-file loading and token parsing.
pub mod loader;
/// The virtual machine and its memory tape.
pub mod machine;
/// Execution statistics collection and reporting.
pub mod stats;

/// Fatal machine faults; a faulted machine must be discarded.
pub use crate::common::error::Fault;
/// Main machine type; construct with [`Machine::new`].
pub use crate::machine::Machine;
/// Tri-state result of stepping or running the machine.
pub use crate::machine::RunState;
/// Growable zero-initialized memory tape.
pub use crate::machine::tape::Tape;
