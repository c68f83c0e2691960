//! # Addressing Modes and Operand Resolution
//!
//! The 13 addressing modes of the 6502 and the resolver that turns the
//! byte(s) following an opcode into either an 8-bit operand value (for
//! read-only operations) or a 16-bit effective address (for read/write
//! operations).
//!
//! Resolution is fetch-style: operand bytes are consumed from memory at PC
//! and PC advances past them. Two wraparound families must never be mixed:
//!
//! - Zero-page-family address arithmetic is 8-bit modular — `$FE,X` with
//!   X = 4 lands at `$02`, never `$102`.
//! - Absolute and indirect-Y arithmetic is full 16-bit modular and may cross
//!   pages freely (the real chip's extra page-cross cycle is not modeled).
//!
//! The indirect mode used by JMP reproduces the documented hardware bug: a
//! pointer whose low byte is `$FF` reads its high byte from the start of the
//! *same* page rather than the next one.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes an instruction
/// consumes (0, 1, or 2) and how the effective address is computed from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction (CLC, RTS, NOP).
    Implicit,

    /// Operates directly on the accumulator (ASL A, LSR A).
    Accumulator,

    /// 8-bit literal operand in the instruction (LDA #$10).
    Immediate,

    /// 8-bit address into zero page (LDA $80 reads 0x0080).
    ZeroPage,

    /// Zero page address plus X, wrapping within zero page (LDA $80,X).
    ZeroPageX,

    /// Zero page address plus Y, wrapping within zero page (LDX $80,Y).
    ZeroPageY,

    /// Signed 8-bit displacement for branches, relative to the PC after the
    /// displacement byte (BEQ label).
    Relative,

    /// Full 16-bit little-endian address (JMP $1234).
    Absolute,

    /// 16-bit address plus X, full 16-bit addition (LDA $1234,X).
    AbsoluteX,

    /// 16-bit address plus Y, full 16-bit addition (LDA $1234,Y).
    AbsoluteY,

    /// Jump through a 16-bit pointer; JMP only. Subject to the page-boundary
    /// hardware bug.
    Indirect,

    /// Pre-indexed indirect: zero-page pointer at (operand + X) mod 256,
    /// then dereference (LDA ($40,X)).
    IndirectX,

    /// Post-indexed indirect: dereference zero-page pointer, then add Y with
    /// full 16-bit addition (LDA ($40),Y).
    IndirectY,
}

impl<M: MemoryBus> CPU<M> {
    /// Fetches the byte at PC and advances PC by one.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian word at PC (low byte first) and advances PC
    /// by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let low = self.fetch_byte() as u16;
        let high = self.fetch_byte() as u16;
        (high << 8) | low
    }

    /// Reads a little-endian word at `addr`, crossing pages normally.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let low = self.memory.read(addr) as u16;
        let high = self.memory.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Reads a little-endian word at `addr` with the page-wraparound quirk:
    /// when the low byte of `addr` is 0xFF, the high byte comes from the
    /// start of the same page (`addr` - 0xFF) instead of the next page.
    ///
    /// This covers both the indirect-JMP hardware bug and the zero-page wrap
    /// when indirect,X / indirect,Y pointers sit at 0xFF.
    pub(crate) fn read_word_page_wrap(&self, addr: u16) -> u16 {
        let high_addr = if addr & 0x00FF == 0x00FF {
            addr - 0x00FF
        } else {
            addr.wrapping_add(1)
        };
        let low = self.memory.read(addr) as u16;
        let high = self.memory.read(high_addr) as u16;
        (high << 8) | low
    }

    /// Resolves the effective address for the given mode, consuming operand
    /// bytes at PC and advancing PC past them.
    ///
    /// Only modes that name a memory location are valid here; Implicit,
    /// Accumulator, and Immediate operands have no address.
    pub(crate) fn operand_address(&mut self, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::ZeroPage => self.fetch_byte() as u16,
            AddressingMode::ZeroPageX => {
                // 8-bit addition: wraps within zero page
                self.fetch_byte().wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => self.fetch_byte().wrapping_add(self.y) as u16,
            AddressingMode::Absolute => self.fetch_word(),
            AddressingMode::AbsoluteX => self.fetch_word().wrapping_add(self.x as u16),
            AddressingMode::AbsoluteY => self.fetch_word().wrapping_add(self.y as u16),
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                self.read_word_page_wrap(pointer)
            }
            AddressingMode::IndirectX => {
                // Pre-indexed: pointer itself wraps within zero page
                let pointer = self.fetch_byte().wrapping_add(self.x) as u16;
                self.read_word_page_wrap(pointer)
            }
            AddressingMode::IndirectY => {
                // Post-indexed: dereference first, then 16-bit addition of Y
                let pointer = self.fetch_byte() as u16;
                self.read_word_page_wrap(pointer)
                    .wrapping_add(self.y as u16)
            }
            AddressingMode::Relative => {
                // Displacement is signed and relative to the advanced PC
                let offset = self.fetch_byte() as i8;
                self.pc.wrapping_add_signed(offset as i16)
            }
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Immediate => {
                unreachable!("addressing mode {:?} has no effective address", mode)
            }
        }
    }

    /// Resolves the operand value for the given mode, consuming operand
    /// bytes at PC and advancing PC past them.
    pub(crate) fn operand_value(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Accumulator => self.a,
            AddressingMode::Immediate => self.fetch_byte(),
            _ => {
                let addr = self.operand_address(mode);
                self.memory.read(addr)
            }
        }
    }
}
