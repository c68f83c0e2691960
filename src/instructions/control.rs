//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, BRK, and NOP.
//!
//! JSR pushes the address of its own last byte (PC − 1 after the operand has
//! been consumed), not the following instruction; RTS compensates by adding
//! 1 to the popped word. RTI pops flags and then PC with no adjustment.
//!
//! BRK here is a program-terminating trap: it sets the break flag and clears
//! the running flag. The real chip's push-and-vector behavior through
//! $FFFE/$FFFF is deliberately not modeled.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes JMP (Jump): PC ← resolved address, unconditionally.
///
/// The indirect form goes through the resolver's page-wrap word read, which
/// reproduces the hardware bug for pointers ending in 0xFF.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    cpu.pc = cpu.operand_address(mode);
}

/// Executes JSR (Jump to Subroutine).
///
/// Pushes PC − 1 (the address of the last byte of the JSR instruction) high
/// byte first, then transfers control to the absolute target.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>) {
    let target = cpu.operand_address(AddressingMode::Absolute);
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push_word(return_addr);
    cpu.pc = target;
}

/// Executes RTS (Return from Subroutine): PC ← popped word + 1.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pop_word().wrapping_add(1);
}

/// Executes RTI (Return from Interrupt).
///
/// Pops the flags byte (bits 4 and 5 carry no state), then pops PC with no
/// +1 adjustment, unlike RTS.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop_byte();
    cpu.flags.set_from_byte(status);
    cpu.pc = cpu.pop_word();
}

/// Executes BRK (Force Break): sets the break flag and halts execution.
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.b = true;
    cpu.running = false;
}

/// Executes NOP (No Operation).
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) {}
