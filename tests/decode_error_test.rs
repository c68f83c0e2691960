//! Tests for the fatal decode path: every undocumented opcode must fail
//! deterministically and leave the CPU untouched.

use emu6502::{DecodeError, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};

fn undefined_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, e)| e.instruction.is_none())
        .map(|(i, _)| i as u8)
        .collect()
}

#[test]
fn test_undefined_opcode_returns_decode_error() {
    let mut mem = FlatMemory::new();
    mem.write(0x0600, 0x02);

    let mut cpu = CPU::new(mem);
    cpu.set_pc(0x0600);

    assert_eq!(
        cpu.step(),
        Err(DecodeError {
            opcode: 0x02,
            addr: 0x0600
        })
    );
}

#[test]
fn test_decode_error_leaves_all_registers_unchanged() {
    for opcode in undefined_opcodes() {
        let mut mem = FlatMemory::new();
        mem.write(0x0600, opcode);

        let mut cpu = CPU::new(mem);
        cpu.set_pc(0x0600);
        cpu.set_a(0x11);
        cpu.set_x(0x22);
        cpu.set_y(0x33);
        cpu.set_sp(0x44);
        cpu.flags_mut().c = true;
        cpu.flags_mut().n = true;
        let flags_before = *cpu.flags();

        let err = cpu.step().unwrap_err();
        assert_eq!(err.opcode, opcode);
        assert_eq!(err.addr, 0x0600);

        assert_eq!(cpu.a(), 0x11, "opcode {:#04X}", opcode);
        assert_eq!(cpu.x(), 0x22);
        assert_eq!(cpu.y(), 0x33);
        assert_eq!(cpu.sp(), 0x44);
        assert_eq!(cpu.pc(), 0x0600, "PC must not advance for {:#04X}", opcode);
        assert_eq!(*cpu.flags(), flags_before);
        assert!(cpu.is_running());
    }
}

#[test]
fn test_decode_error_is_repeatable() {
    let mut mem = FlatMemory::new();
    mem.write(0x0600, 0xFF);

    let mut cpu = CPU::new(mem);
    cpu.set_pc(0x0600);

    let first = cpu.step().unwrap_err();
    let second = cpu.step().unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_decode_error_display() {
    let err = DecodeError {
        opcode: 0x02,
        addr: 0x0600,
    };
    assert_eq!(
        err.to_string(),
        "undefined opcode 0x02 at address 0x0600"
    );
}

#[test]
fn test_run_until_halt_surfaces_decode_error() {
    let mut mem = FlatMemory::new();
    mem.load(0x0600, &[0xE8, 0x02]); // INX ; undefined

    let mut cpu = CPU::new(mem);
    cpu.set_pc(0x0600);

    let err = cpu.run_until_halt().unwrap_err();
    assert_eq!(err.opcode, 0x02);
    assert_eq!(err.addr, 0x0601);
    assert_eq!(cpu.x(), 0x01); // the INX before the error still ran
}
