//! # 6502 Interpreter Core
//!
//! An instruction-level emulator for the MOS Technology 6502 processor.
//! The crate provides the CPU state structure, a trait-based memory bus
//! abstraction, a table-driven opcode decoder, and the full set of documented
//! instruction semantics: addressing-mode resolution, arithmetic and flag
//! logic, and stack discipline.
//!
//! This is an instruction-level model, not a cycle-level one: each call to
//! [`CPU::step`] executes exactly one instruction, and no per-cycle timing or
//! interrupt-vector behavior is modeled. BRK is treated as a
//! program-terminating trap that halts the interpreter.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{CPU, FlatMemory};
//!
//! // Create 64KB flat memory and load a tiny program at the origin:
//! //   LDA #$05 ; ADC #$03 ; BRK
//! let mut memory = FlatMemory::new();
//! memory.load(0x0000, &[0xA9, 0x05, 0x69, 0x03, 0x00]);
//!
//! let mut cpu = CPU::new(memory);
//! cpu.run_until_halt().unwrap();
//!
//! assert_eq!(cpu.a(), 0x08);
//! assert!(!cpu.is_running()); // halted by BRK
//! ```
//!
//! ## Architecture
//!
//! - **Dispatcher** ([`CPU::step`]): fetches the opcode byte at PC, looks it
//!   up in the 256-entry [`OPCODE_TABLE`], and invokes the paired handler.
//!   An opcode with no assigned handler is a fatal [`DecodeError`].
//! - **Addressing-mode resolver** ([`addressing`]): consumes operand bytes
//!   at PC and produces either an operand value or an effective address,
//!   reproducing the zero-page wraparound rules and the indirect-JMP
//!   page-boundary hardware bug.
//! - **Instruction handlers** (internal): one function per mnemonic family,
//!   each total over all register/memory inputs.
//!
//! Program loading, disassembly, and all text output are host
//! responsibilities; the core exposes only [`CPU::read_byte`] and
//! [`CPU::write_byte`] for them.

pub mod addressing;
pub mod cpu;
pub mod flags;
pub mod memory;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use flags::Flags;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, OpcodeEntry, OPCODE_TABLE};

/// Fatal decode failure: the fetched opcode byte has no assigned
/// (addressing-mode, handler) pair.
///
/// An undefined opcode is a static program defect, not a transient condition;
/// the CPU performs no side effects for it and the caller should treat the
/// error like a crash dump (print the address and opcode, then stop or drop
/// into a debugger).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    /// The offending opcode byte.
    pub opcode: u8,
    /// The address the byte was fetched from.
    pub addr: u16,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "undefined opcode 0x{:02X} at address 0x{:04X}",
            self.opcode, self.addr
        )
    }
}

impl std::error::Error for DecodeError {}
