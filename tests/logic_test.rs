//! Tests for ORA, AND, EOR, and BIT.

use emu6502::{FlatMemory, MemoryBus, CPU};

fn cpu_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    let mut cpu = CPU::new(memory);
    cpu.set_pc(0x0600);
    cpu
}

#[test]
fn test_ora_immediate() {
    let mut cpu = cpu_with_program(&[0x09, 0xF0]); // ORA #$F0
    cpu.set_a(0x0F);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flags().n);
    assert!(!cpu.flags().z);
}

#[test]
fn test_ora_zero_page() {
    let mut cpu = cpu_with_program(&[0x05, 0xA0]); // ORA $A0
    cpu.write_byte(0x00A0, 0x13);
    cpu.set_a(0x20);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_and_masks_bits() {
    let mut cpu = cpu_with_program(&[0x29, 0x0F]); // AND #$0F
    cpu.set_a(0x5A);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x0A);
    assert!(!cpu.flags().n);
}

#[test]
fn test_and_to_zero_sets_z() {
    let mut cpu = cpu_with_program(&[0x29, 0x00]); // AND #$00
    cpu.set_a(0xFF);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().z);
}

#[test]
fn test_eor_flips_bits() {
    let mut cpu = cpu_with_program(&[0x49, 0xFF]); // EOR #$FF
    cpu.set_a(0x0F);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flags().n);
}

#[test]
fn test_eor_self_is_zero() {
    let mut cpu = cpu_with_program(&[0x49, 0x42]); // EOR #$42
    cpu.set_a(0x42);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().z);
}

#[test]
fn test_bit_copies_bits_7_and_6_into_n_and_v() {
    let mut cpu = cpu_with_program(&[0x24, 0x40]); // BIT $40
    cpu.write_byte(0x0040, 0xC0); // bits 7 and 6 set
    cpu.set_a(0x01);
    cpu.step().unwrap();

    assert!(cpu.flags().n);
    assert!(cpu.flags().v);
    assert!(cpu.flags().z); // A & 0xC0 == 0
    assert_eq!(cpu.a(), 0x01); // A unchanged
}

#[test]
fn test_bit_nonzero_intersection_clears_z() {
    let mut cpu = cpu_with_program(&[0x2C, 0x00, 0x20]); // BIT $2000
    cpu.write_byte(0x2000, 0x01);
    cpu.set_a(0x01);
    cpu.step().unwrap();

    assert!(!cpu.flags().z);
    assert!(!cpu.flags().n);
    assert!(!cpu.flags().v);
}
