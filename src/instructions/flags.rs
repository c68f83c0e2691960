//! # Status Flag Manipulation Instructions
//!
//! Each sets or clears exactly one named flag and touches nothing else.
//! There is no SEV: the 6502 has no instruction that sets overflow.

use crate::{MemoryBus, CPU};

/// Executes CLC (Clear Carry Flag).
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.c = false;
}

/// Executes SEC (Set Carry Flag).
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.c = true;
}

/// Executes CLI (Clear Interrupt Disable).
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.i = false;
}

/// Executes SEI (Set Interrupt Disable).
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.i = true;
}

/// Executes CLD (Clear Decimal Mode).
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.d = false;
}

/// Executes SED (Set Decimal Mode).
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.d = true;
}

/// Executes CLV (Clear Overflow Flag).
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.flags.v = false;
}
