//! # Load and Store Instructions
//!
//! - LDA / LDX / LDY: register ← operand value, Z and N set from the value
//! - STA / STX / STY: memory[address] ← register, no flags affected

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes LDA (Load Accumulator).
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a = value;
    cpu.flags.set_zn(value);
}

/// Executes LDX (Load X Register).
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.x = value;
    cpu.flags.set_zn(value);
}

/// Executes LDY (Load Y Register).
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.y = value;
    cpu.flags.set_zn(value);
}

/// Executes STA (Store Accumulator). No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.a);
}

/// Executes STX (Store X Register). No flags affected.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.x);
}

/// Executes STY (Store Y Register). No flags affected.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    cpu.memory.write(addr, cpu.y);
}
