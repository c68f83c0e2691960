//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, and ROR operate either on the accumulator or
//! read-modify-write a memory byte, depending on the addressing mode. The
//! carry flag receives the bit shifted out; the rotates additionally feed
//! the old carry into the vacated bit. Z and N are set from the result.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes ASL (Arithmetic Shift Left): C ← bit 7, bit 0 ← 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        cpu.flags.c = value & 0x80 != 0;
        value << 1
    });
}

/// Executes LSR (Logical Shift Right): C ← bit 0, bit 7 ← 0.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        cpu.flags.c = value & 0x01 != 0;
        value >> 1
    });
}

/// Executes ROL (Rotate Left): C ← bit 7, bit 0 ← old C.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        let carry_in = if cpu.flags.c { 0x01 } else { 0x00 };
        cpu.flags.c = value & 0x80 != 0;
        (value << 1) | carry_in
    });
}

/// Executes ROR (Rotate Right): C ← bit 0, bit 7 ← old C.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    modify(cpu, mode, |cpu, value| {
        let carry_in = if cpu.flags.c { 0x80 } else { 0x00 };
        cpu.flags.c = value & 0x01 != 0;
        (value >> 1) | carry_in
    });
}

/// Shared read-modify-write plumbing: applies `f` to the accumulator or to
/// the memory byte the mode resolves to, writes the result back, and sets
/// Z and N. `f` is responsible for the carry flag.
fn modify<M, F>(cpu: &mut CPU<M>, mode: AddressingMode, f: F)
where
    M: MemoryBus,
    F: FnOnce(&mut CPU<M>, u8) -> u8,
{
    let result = if mode == AddressingMode::Accumulator {
        let result = f(cpu, cpu.a);
        cpu.a = result;
        result
    } else {
        let addr = cpu.operand_address(mode);
        let value = cpu.memory.read(addr);
        let result = f(cpu, value);
        cpu.memory.write(addr, result);
        result
    };

    cpu.flags.set_zn(result);
}
