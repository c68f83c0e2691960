//! # Stack Instructions
//!
//! PHA/PLA move the accumulator through the stack; PHP/PLP move the packed
//! status byte. PHP always pushes bits 4 (break) and 5 (unused) as 1
//! regardless of the live flag state, and PLP ignores those bits on the way
//! back in.

use crate::{MemoryBus, CPU};

/// Executes PHA (Push Accumulator). No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.a);
}

/// Executes PLA (Pull Accumulator). Z and N set from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pop_byte();
    cpu.flags.set_zn(cpu.a);
}

/// Executes PHP (Push Processor Status).
///
/// The pushed byte has bits 4 and 5 forced to 1; `Flags::as_byte` does the
/// forcing.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.flags.as_byte();
    cpu.push_byte(status);
}

/// Executes PLP (Pull Processor Status).
///
/// Unpacks the popped byte into the six semantic flags; bits 4 and 5 are
/// ignored.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pop_byte();
    cpu.flags.set_from_byte(status);
}
