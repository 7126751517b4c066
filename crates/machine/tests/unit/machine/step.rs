//! Single-Instruction Stepping Tests.
//!
//! Verifies one-instruction execution, instruction-pointer advancement,
//! halt behavior, and every fatal fault the step path can raise.

use intcode_core::{Fault, Machine, RunState};
use pretty_assertions::assert_eq;

// ══════════════════════════════════════════════════════════
// 1. Stepping and ip advancement
// ══════════════════════════════════════════════════════════

#[test]
fn one_step_executes_exactly_one_instruction() {
    let mut machine = Machine::new(&[1, 0, 0, 0, 99]);
    assert_eq!(machine.step(), Ok(RunState::Running));
    // The self-add has landed, but halt has not executed yet.
    assert_eq!(machine.read_memory(0), 2);
    assert!(!machine.is_halted());
}

#[test]
fn step_reports_halt() {
    let mut machine = Machine::new(&[99]);
    assert_eq!(machine.step(), Ok(RunState::Halted));
    assert!(machine.is_halted());
}

#[test]
fn stepping_a_halted_machine_is_a_noop() {
    let mut machine = Machine::new(&[99, 1, 0, 0, 0]);
    assert_eq!(machine.step(), Ok(RunState::Halted));
    assert_eq!(machine.step(), Ok(RunState::Halted));
    // The add after the halt never ran.
    assert_eq!(machine.read_memory(1), 1);
}

#[test]
fn memory_stays_inspectable_after_halt() {
    let mut machine = Machine::new(&[1101, 20, 22, 5, 99, 0]);
    assert_eq!(machine.run_until_blocked(), Ok(RunState::Halted));
    assert_eq!(machine.read_memory(5), 42);
    assert_eq!(machine.read_memory(0), 1101);
}

// ══════════════════════════════════════════════════════════
// 2. Jumps assign ip instead of advancing it
// ══════════════════════════════════════════════════════════

#[test]
fn taken_jump_assigns_ip() {
    // jnz #1, #4 lands directly on the halt.
    let mut machine = Machine::new(&[1105, 1, 4, 0, 99]);
    assert_eq!(machine.step(), Ok(RunState::Running));
    assert_eq!(machine.step(), Ok(RunState::Halted));
}

#[test]
fn untaken_jump_advances_normally() {
    // jz #1, #0 falls through to the halt at ip 3.
    let mut machine = Machine::new(&[1106, 1, 0, 99]);
    assert_eq!(machine.step(), Ok(RunState::Running));
    assert_eq!(machine.step(), Ok(RunState::Halted));
}

// ══════════════════════════════════════════════════════════
// 3. Decode faults
// ══════════════════════════════════════════════════════════

#[test]
fn unknown_opcode_faults_with_opcode_and_ip() {
    let mut machine = Machine::new(&[1101, 1, 1, 5, 77, 0]);
    assert_eq!(machine.step(), Ok(RunState::Running));
    assert_eq!(
        machine.step(),
        Err(Fault::UnknownOpcode { opcode: 77, ip: 4 })
    );
}

#[test]
fn unknown_mode_digit_faults() {
    let mut machine = Machine::new(&[302, 0, 0, 0]);
    assert_eq!(machine.step(), Err(Fault::UnknownMode { mode: 3, ip: 0 }));
}

// ══════════════════════════════════════════════════════════
// 4. Resolution faults
// ══════════════════════════════════════════════════════════

#[test]
fn immediate_destination_faults() {
    // add @0, @0, #0: the destination may never be immediate.
    let mut machine = Machine::new(&[10001, 0, 0, 0, 99]);
    assert_eq!(machine.step(), Err(Fault::ImmediateWrite { ip: 0 }));
}

#[test]
fn negative_position_read_faults() {
    let mut machine = Machine::new(&[4, -1, 99]);
    assert_eq!(
        machine.step(),
        Err(Fault::NegativeAddress { addr: -1, ip: 0 })
    );
}

#[test]
fn negative_relative_resolution_faults() {
    // arb #-5, then out ~0 resolves to address -5.
    let mut machine = Machine::new(&[109, -5, 204, 0, 99]);
    assert_eq!(machine.step(), Ok(RunState::Running));
    assert_eq!(
        machine.step(),
        Err(Fault::NegativeAddress { addr: -5, ip: 2 })
    );
}

#[test]
fn negative_jump_target_faults() {
    let mut machine = Machine::new(&[1105, 1, -2]);
    assert_eq!(
        machine.step(),
        Err(Fault::NegativeAddress { addr: -2, ip: 0 })
    );
}

#[test]
fn memory_mutated_before_a_fault_is_kept() {
    // The add lands, then the next word faults.
    let mut machine = Machine::new(&[1101, 2, 3, 0, 77]);
    assert_eq!(machine.step(), Ok(RunState::Running));
    assert!(machine.step().is_err());
    assert_eq!(machine.read_memory(0), 5);
}
