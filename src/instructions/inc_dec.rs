//! # Increment and Decrement Instructions
//!
//! INC and DEC read-modify-write a memory byte; INX, INY, DEX, and DEY
//! operate on the index registers. All six wrap mod 256 and set Z and N
//! from the result.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes INC (Increment Memory).
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let result = cpu.memory.read(addr).wrapping_add(1);
    cpu.memory.write(addr, result);
    cpu.flags.set_zn(result);
}

/// Executes DEC (Decrement Memory).
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let result = cpu.memory.read(addr).wrapping_sub(1);
    cpu.memory.write(addr, result);
    cpu.flags.set_zn(result);
}

/// Executes INX (Increment X Register).
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.flags.set_zn(cpu.x);
}

/// Executes INY (Increment Y Register).
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.flags.set_zn(cpu.y);
}

/// Executes DEX (Decrement X Register).
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.flags.set_zn(cpu.x);
}

/// Executes DEY (Decrement Y Register).
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.flags.set_zn(cpu.y);
}
