//! Tests for the JSR/RTS round trip: JSR pushes the address of its own last
//! byte (PC - 1) high-then-low, RTS pops it and adds 1.

use emu6502::{FlatMemory, MemoryBus, CPU};

fn cpu_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.load(0x0600, program);
    let mut cpu = CPU::new(memory);
    cpu.set_pc(0x0600);
    cpu
}

#[test]
fn test_jsr_pushes_return_address_and_jumps() {
    let mut cpu = cpu_with_program(&[0x20, 0x23, 0x01]); // JSR $0123
    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x0123);
    assert_eq!(cpu.sp(), 0xFD); // two bytes pushed

    // Pushed word is the address of the JSR's last byte (0x0602),
    // high byte first at 0x01FF, low byte at 0x01FE
    assert_eq!(cpu.read_byte(0x01FF), 0x06);
    assert_eq!(cpu.read_byte(0x01FE), 0x02);
}

#[test]
fn test_rts_resumes_after_the_jsr() {
    let mut cpu = cpu_with_program(&[0x20, 0x00, 0x07]); // JSR $0700
    cpu.write_byte(0x0700, 0x60); // RTS

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0700);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0603); // instruction after the JSR
    assert_eq!(cpu.sp(), 0xFF); // stack balanced
}

#[test]
fn test_nested_subroutine_calls() {
    // JSR $0700 ; BRK — subroutine at $0700 calls $0720, which returns
    let mut cpu = cpu_with_program(&[0x20, 0x00, 0x07, 0x00]);
    cpu.write_byte(0x0700, 0x20); // JSR $0720
    cpu.write_byte(0x0701, 0x20);
    cpu.write_byte(0x0702, 0x07);
    cpu.write_byte(0x0703, 0x60); // RTS
    cpu.write_byte(0x0720, 0xE8); // INX
    cpu.write_byte(0x0721, 0x60); // RTS

    cpu.run_until_halt().unwrap();

    assert_eq!(cpu.x(), 0x01);
    assert!(!cpu.is_running());
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_jsr_round_trip_preserves_stack_pointer() {
    let mut cpu = cpu_with_program(&[0x20, 0x00, 0x07]); // JSR $0700
    cpu.write_byte(0x0700, 0x60); // RTS
    let sp_before = cpu.sp();

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(cpu.sp(), sp_before);
}
