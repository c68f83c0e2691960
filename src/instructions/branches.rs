//! # Branch Instructions
//!
//! The eight conditional branches, one per testable flag value. All use
//! relative addressing: a signed 8-bit displacement applied to the PC after
//! the displacement byte has been consumed. A branch not taken leaves PC at
//! that already-advanced position.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes BCC (Branch if Carry Clear).
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, !cpu.flags.c);
}

/// Executes BCS (Branch if Carry Set).
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, cpu.flags.c);
}

/// Executes BEQ (Branch if Equal, Z set).
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, cpu.flags.z);
}

/// Executes BNE (Branch if Not Equal, Z clear).
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, !cpu.flags.z);
}

/// Executes BMI (Branch if Minus, N set).
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, cpu.flags.n);
}

/// Executes BPL (Branch if Plus, N clear).
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, !cpu.flags.n);
}

/// Executes BVC (Branch if Overflow Clear).
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, !cpu.flags.v);
}

/// Executes BVS (Branch if Overflow Set).
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>) {
    branch_if(cpu, cpu.flags.v);
}

/// Resolves the relative target (consuming the displacement byte) and takes
/// the branch when the condition holds. The displacement must always be
/// consumed, taken or not, so PC ends up past the instruction either way.
fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, taken: bool) {
    let target = cpu.operand_address(AddressingMode::Relative);
    if taken {
        cpu.pc = target;
    }
}
