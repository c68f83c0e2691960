//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, and TXS copy between registers. All set Z and N
//! from the destination's new value except TXS, which touches no flags —
//! matching the real chip.

use crate::{MemoryBus, CPU};

/// Executes TAX (Transfer Accumulator to X).
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.flags.set_zn(cpu.x);
}

/// Executes TAY (Transfer Accumulator to Y).
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.flags.set_zn(cpu.y);
}

/// Executes TXA (Transfer X to Accumulator).
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.flags.set_zn(cpu.a);
}

/// Executes TYA (Transfer Y to Accumulator).
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.flags.set_zn(cpu.a);
}

/// Executes TSX (Transfer Stack Pointer to X).
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.flags.set_zn(cpu.x);
}

/// Executes TXS (Transfer X to Stack Pointer). No flags affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
