//! # Arithmetic and Logic Instructions
//!
//! ORA, AND, EOR, BIT, ADC, SBC, and the three compares. The easy parts are
//! the bitwise operations; the precise parts are the carry and overflow
//! contracts of ADC and SBC:
//!
//! - **ADC**: 9-bit intermediate `A + operand + C`. Carry is unsigned
//!   overflow of that sum; V is two's-complement overflow — set when both
//!   inputs share a sign and the truncated result's sign differs.
//! - **SBC**: borrow is the complement of carry, so the operation is
//!   `A - operand - (1 - C)`. Carry is set when no borrow occurred; V is set
//!   when the inputs have *different* signs and the result's sign differs
//!   from A's.
//! - **CMP/CPX/CPY**: carry holds `register >= operand` (unsigned), N comes
//!   from bit 7 of the 8-bit subtraction, and the register is untouched.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes ORA (Logical Inclusive OR): A ← A | operand.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a |= value;
    cpu.flags.set_zn(cpu.a);
}

/// Executes AND (Logical AND): A ← A & operand.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a &= value;
    cpu.flags.set_zn(cpu.a);
}

/// Executes EOR (Exclusive OR): A ← A ^ operand.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.a ^= value;
    cpu.flags.set_zn(cpu.a);
}

/// Executes BIT (Bit Test).
///
/// Z reflects `A & operand`; N and V are copied straight from bits 7 and 6
/// of the operand. A is unchanged.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    cpu.flags.z = cpu.a & value == 0;
    cpu.flags.n = value & 0x80 != 0;
    cpu.flags.v = value & 0x40 != 0;
}

/// Executes ADC (Add with Carry): A ← A + operand + C.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    let a = cpu.a;
    let carry_in = if cpu.flags.c { 1 } else { 0 };

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.flags.c = sum > 0xFF;
    // Signed overflow: operands agree in sign, result does not
    cpu.flags.v = (a ^ value) & 0x80 == 0 && (a ^ result) & 0x80 != 0;
    cpu.flags.set_zn(result);

    cpu.a = result;
}

/// Executes SBC (Subtract with Carry): A ← A − operand − (1 − C).
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    let a = cpu.a;
    let borrow = if cpu.flags.c { 0 } else { 1 };

    // 9-bit unsigned difference with a 0x100 bias: the bias bit survives
    // exactly when no borrow out occurred
    let diff = 0x100 + a as u16 - value as u16 - borrow;
    let result = diff as u8;

    cpu.flags.c = diff > 0xFF;
    // Signed overflow: operands differ in sign and the result's sign left A's
    cpu.flags.v = (a ^ value) & 0x80 != 0 && (a ^ result) & 0x80 != 0;
    cpu.flags.set_zn(result);

    cpu.a = result;
}

/// Executes CMP (Compare Accumulator).
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    compare(cpu, cpu.a, value);
}

/// Executes CPX (Compare X Register).
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    compare(cpu, cpu.x, value);
}

/// Executes CPY (Compare Y Register).
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let value = cpu.operand_value(mode);
    compare(cpu, cpu.y, value);
}

/// Shared compare: C ← register ≥ operand, Z ← equality, N ← bit 7 of the
/// 8-bit difference. None of A/X/Y is modified.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.flags.c = register >= value;
    cpu.flags.z = register == value;
    cpu.flags.n = register.wrapping_sub(value) & 0x80 != 0;
}
