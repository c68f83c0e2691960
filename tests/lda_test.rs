//! Tests for LDA, LDX, and LDY across all addressing modes, including the
//! zero-page wraparound rules.

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Loads a program at 0x0600 and points PC at it.
fn cpu_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    let mut cpu = CPU::new(memory);
    cpu.set_pc(0x0600);
    cpu
}

#[test]
fn test_lda_immediate() {
    let mut cpu = cpu_with_program(&[0xA9, 0xAA]); // LDA #$AA
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAA);
    assert!(cpu.flags().n);
    assert!(!cpu.flags().z);
    assert_eq!(cpu.pc(), 0x0602);
}

#[test]
fn test_lda_zero_sets_z() {
    let mut cpu = cpu_with_program(&[0xA9, 0x00]); // LDA #$00
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().z);
    assert!(!cpu.flags().n);
}

#[test]
fn test_lda_zero_page() {
    let mut cpu = cpu_with_program(&[0xA5, 0x40]); // LDA $40
    cpu.write_byte(0x0040, 0x13);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x13);
}

#[test]
fn test_lda_zero_page_x() {
    let mut cpu = cpu_with_program(&[0xB5, 0x40]); // LDA $40,X
    cpu.set_x(0x02);
    cpu.write_byte(0x0042, 0x37);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x37);
}

#[test]
fn test_lda_zero_page_x_wraps_within_zero_page() {
    // X=0xFF with operand 0x04 wraps to 0x03, never 0x103
    let mut cpu = cpu_with_program(&[0xB5, 0x04]); // LDA $04,X
    cpu.set_x(0xFF);
    cpu.write_byte(0x0003, 0x55);
    cpu.write_byte(0x0103, 0x99); // must NOT be read
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = cpu_with_program(&[0xAD, 0x34, 0x12]); // LDA $1234
    cpu.write_byte(0x1234, 0x77);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x77);
    assert_eq!(cpu.pc(), 0x0603);
}

#[test]
fn test_lda_absolute_x_crosses_page() {
    // Absolute,X uses full 16-bit addition and may cross pages
    let mut cpu = cpu_with_program(&[0xBD, 0xFF, 0x12]); // LDA $12FF,X
    cpu.set_x(0x01);
    cpu.write_byte(0x1300, 0x44);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x44);
}

#[test]
fn test_lda_absolute_y() {
    let mut cpu = cpu_with_program(&[0xB9, 0x00, 0x20]); // LDA $2000,Y
    cpu.set_y(0x10);
    cpu.write_byte(0x2010, 0x66);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_lda_indirect_x() {
    // Pointer at (0x20 + X) mod 256 in zero page
    let mut cpu = cpu_with_program(&[0xA1, 0x20]); // LDA ($20,X)
    cpu.set_x(0x04);
    cpu.write_byte(0x0024, 0x74);
    cpu.write_byte(0x0025, 0x20); // pointer -> 0x2074
    cpu.write_byte(0x2074, 0x88);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x88);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let mut cpu = cpu_with_program(&[0xA1, 0xFF]); // LDA ($FF,X) with X=0
    cpu.write_byte(0x00FF, 0x74); // pointer low byte
    cpu.write_byte(0x0000, 0x20); // pointer high byte wraps to 0x00
    cpu.write_byte(0x2074, 0x99);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_indirect_y() {
    // Word at zero-page pointer, plus Y with 16-bit addition
    let mut cpu = cpu_with_program(&[0xB1, 0x40]); // LDA ($40),Y
    cpu.set_y(0x10);
    cpu.write_byte(0x0040, 0xF0);
    cpu.write_byte(0x0041, 0x12); // base 0x12F0, + Y = 0x1300
    cpu.write_byte(0x1300, 0xAB);
    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0xAB);
}

#[test]
fn test_ldx_immediate_and_zero_page_y() {
    let mut cpu = cpu_with_program(&[0xA2, 0x80, 0xB6, 0x10]); // LDX #$80 ; LDX $10,Y
    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flags().n);

    cpu.set_y(0x05);
    cpu.write_byte(0x0015, 0x21);
    cpu.step().unwrap();
    assert_eq!(cpu.x(), 0x21);
    assert!(!cpu.flags().n);
}

#[test]
fn test_ldy_absolute_x() {
    let mut cpu = cpu_with_program(&[0xBC, 0x00, 0x30]); // LDY $3000,X
    cpu.set_x(0x20);
    cpu.write_byte(0x3020, 0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flags().z);
}
