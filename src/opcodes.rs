//! # Opcode Decode Table
//!
//! The 256-entry lookup table mapping each opcode byte to its
//! (instruction, addressing-mode) pair. The table is the single source of
//! truth for decoding: the dispatcher indexes it with the fetched byte and
//! either invokes the paired handler or reports a fatal decode error.
//!
//! The table covers the 151 documented NMOS 6502 opcodes (56 mnemonics
//! across their addressing-mode combinations). The 105 undocumented opcodes
//! carry no instruction and decode fatally — the interpreter never guesses
//! at undefined behavior.

use crate::addressing::AddressingMode;

/// The 56 documented 6502 instruction mnemonics.
///
/// Dispatch is a match on this enum rather than a function-pointer table so
/// the handler set stays monomorphic over the memory bus type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

/// Decode metadata for a single opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeEntry {
    /// Three-letter mnemonic, or "???" for undocumented opcodes.
    pub mnemonic: &'static str,

    /// The instruction to execute, or `None` for undocumented opcodes
    /// (a fatal decode error).
    pub instruction: Option<Instruction>,

    /// How the operand bytes following the opcode are interpreted.
    pub mode: AddressingMode,
}

const fn op(mnemonic: &'static str, instruction: Instruction, mode: AddressingMode) -> OpcodeEntry {
    OpcodeEntry {
        mnemonic,
        instruction: Some(instruction),
        mode,
    }
}

/// Placeholder for the 105 undocumented opcodes.
const ILLEGAL: OpcodeEntry = OpcodeEntry {
    mnemonic: "???",
    instruction: None,
    mode: AddressingMode::Implicit,
};

/// Complete 256-entry decode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.instruction, Some(Instruction::Lda));
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
///
/// // Undocumented opcodes decode to no instruction
/// assert_eq!(OPCODE_TABLE[0x02].instruction, None);
/// ```
pub const OPCODE_TABLE: [OpcodeEntry; 256] = {
    use AddressingMode::*;
    use Instruction::*;

    let mut t = [ILLEGAL; 256];

    // Load
    t[0xA9] = op("LDA", Lda, Immediate);
    t[0xA5] = op("LDA", Lda, ZeroPage);
    t[0xB5] = op("LDA", Lda, ZeroPageX);
    t[0xAD] = op("LDA", Lda, Absolute);
    t[0xBD] = op("LDA", Lda, AbsoluteX);
    t[0xB9] = op("LDA", Lda, AbsoluteY);
    t[0xA1] = op("LDA", Lda, IndirectX);
    t[0xB1] = op("LDA", Lda, IndirectY);
    t[0xA2] = op("LDX", Ldx, Immediate);
    t[0xA6] = op("LDX", Ldx, ZeroPage);
    t[0xB6] = op("LDX", Ldx, ZeroPageY);
    t[0xAE] = op("LDX", Ldx, Absolute);
    t[0xBE] = op("LDX", Ldx, AbsoluteY);
    t[0xA0] = op("LDY", Ldy, Immediate);
    t[0xA4] = op("LDY", Ldy, ZeroPage);
    t[0xB4] = op("LDY", Ldy, ZeroPageX);
    t[0xAC] = op("LDY", Ldy, Absolute);
    t[0xBC] = op("LDY", Ldy, AbsoluteX);

    // Store
    t[0x85] = op("STA", Sta, ZeroPage);
    t[0x95] = op("STA", Sta, ZeroPageX);
    t[0x8D] = op("STA", Sta, Absolute);
    t[0x9D] = op("STA", Sta, AbsoluteX);
    t[0x99] = op("STA", Sta, AbsoluteY);
    t[0x81] = op("STA", Sta, IndirectX);
    t[0x91] = op("STA", Sta, IndirectY);
    t[0x86] = op("STX", Stx, ZeroPage);
    t[0x96] = op("STX", Stx, ZeroPageY);
    t[0x8E] = op("STX", Stx, Absolute);
    t[0x84] = op("STY", Sty, ZeroPage);
    t[0x94] = op("STY", Sty, ZeroPageX);
    t[0x8C] = op("STY", Sty, Absolute);

    // Logic
    t[0x09] = op("ORA", Ora, Immediate);
    t[0x05] = op("ORA", Ora, ZeroPage);
    t[0x15] = op("ORA", Ora, ZeroPageX);
    t[0x0D] = op("ORA", Ora, Absolute);
    t[0x1D] = op("ORA", Ora, AbsoluteX);
    t[0x19] = op("ORA", Ora, AbsoluteY);
    t[0x01] = op("ORA", Ora, IndirectX);
    t[0x11] = op("ORA", Ora, IndirectY);
    t[0x29] = op("AND", And, Immediate);
    t[0x25] = op("AND", And, ZeroPage);
    t[0x35] = op("AND", And, ZeroPageX);
    t[0x2D] = op("AND", And, Absolute);
    t[0x3D] = op("AND", And, AbsoluteX);
    t[0x39] = op("AND", And, AbsoluteY);
    t[0x21] = op("AND", And, IndirectX);
    t[0x31] = op("AND", And, IndirectY);
    t[0x49] = op("EOR", Eor, Immediate);
    t[0x45] = op("EOR", Eor, ZeroPage);
    t[0x55] = op("EOR", Eor, ZeroPageX);
    t[0x4D] = op("EOR", Eor, Absolute);
    t[0x5D] = op("EOR", Eor, AbsoluteX);
    t[0x59] = op("EOR", Eor, AbsoluteY);
    t[0x41] = op("EOR", Eor, IndirectX);
    t[0x51] = op("EOR", Eor, IndirectY);
    t[0x24] = op("BIT", Bit, ZeroPage);
    t[0x2C] = op("BIT", Bit, Absolute);

    // Arithmetic
    t[0x69] = op("ADC", Adc, Immediate);
    t[0x65] = op("ADC", Adc, ZeroPage);
    t[0x75] = op("ADC", Adc, ZeroPageX);
    t[0x6D] = op("ADC", Adc, Absolute);
    t[0x7D] = op("ADC", Adc, AbsoluteX);
    t[0x79] = op("ADC", Adc, AbsoluteY);
    t[0x61] = op("ADC", Adc, IndirectX);
    t[0x71] = op("ADC", Adc, IndirectY);
    t[0xE9] = op("SBC", Sbc, Immediate);
    t[0xE5] = op("SBC", Sbc, ZeroPage);
    t[0xF5] = op("SBC", Sbc, ZeroPageX);
    t[0xED] = op("SBC", Sbc, Absolute);
    t[0xFD] = op("SBC", Sbc, AbsoluteX);
    t[0xF9] = op("SBC", Sbc, AbsoluteY);
    t[0xE1] = op("SBC", Sbc, IndirectX);
    t[0xF1] = op("SBC", Sbc, IndirectY);

    // Compare
    t[0xC9] = op("CMP", Cmp, Immediate);
    t[0xC5] = op("CMP", Cmp, ZeroPage);
    t[0xD5] = op("CMP", Cmp, ZeroPageX);
    t[0xCD] = op("CMP", Cmp, Absolute);
    t[0xDD] = op("CMP", Cmp, AbsoluteX);
    t[0xD9] = op("CMP", Cmp, AbsoluteY);
    t[0xC1] = op("CMP", Cmp, IndirectX);
    t[0xD1] = op("CMP", Cmp, IndirectY);
    t[0xE0] = op("CPX", Cpx, Immediate);
    t[0xE4] = op("CPX", Cpx, ZeroPage);
    t[0xEC] = op("CPX", Cpx, Absolute);
    t[0xC0] = op("CPY", Cpy, Immediate);
    t[0xC4] = op("CPY", Cpy, ZeroPage);
    t[0xCC] = op("CPY", Cpy, Absolute);

    // Increment / decrement
    t[0xE6] = op("INC", Inc, ZeroPage);
    t[0xF6] = op("INC", Inc, ZeroPageX);
    t[0xEE] = op("INC", Inc, Absolute);
    t[0xFE] = op("INC", Inc, AbsoluteX);
    t[0xC6] = op("DEC", Dec, ZeroPage);
    t[0xD6] = op("DEC", Dec, ZeroPageX);
    t[0xCE] = op("DEC", Dec, Absolute);
    t[0xDE] = op("DEC", Dec, AbsoluteX);
    t[0xE8] = op("INX", Inx, Implicit);
    t[0xC8] = op("INY", Iny, Implicit);
    t[0xCA] = op("DEX", Dex, Implicit);
    t[0x88] = op("DEY", Dey, Implicit);

    // Shifts and rotates
    t[0x0A] = op("ASL", Asl, Accumulator);
    t[0x06] = op("ASL", Asl, ZeroPage);
    t[0x16] = op("ASL", Asl, ZeroPageX);
    t[0x0E] = op("ASL", Asl, Absolute);
    t[0x1E] = op("ASL", Asl, AbsoluteX);
    t[0x4A] = op("LSR", Lsr, Accumulator);
    t[0x46] = op("LSR", Lsr, ZeroPage);
    t[0x56] = op("LSR", Lsr, ZeroPageX);
    t[0x4E] = op("LSR", Lsr, Absolute);
    t[0x5E] = op("LSR", Lsr, AbsoluteX);
    t[0x2A] = op("ROL", Rol, Accumulator);
    t[0x26] = op("ROL", Rol, ZeroPage);
    t[0x36] = op("ROL", Rol, ZeroPageX);
    t[0x2E] = op("ROL", Rol, Absolute);
    t[0x3E] = op("ROL", Rol, AbsoluteX);
    t[0x6A] = op("ROR", Ror, Accumulator);
    t[0x66] = op("ROR", Ror, ZeroPage);
    t[0x76] = op("ROR", Ror, ZeroPageX);
    t[0x6E] = op("ROR", Ror, Absolute);
    t[0x7E] = op("ROR", Ror, AbsoluteX);

    // Branches
    t[0x90] = op("BCC", Bcc, Relative);
    t[0xB0] = op("BCS", Bcs, Relative);
    t[0xF0] = op("BEQ", Beq, Relative);
    t[0xD0] = op("BNE", Bne, Relative);
    t[0x30] = op("BMI", Bmi, Relative);
    t[0x10] = op("BPL", Bpl, Relative);
    t[0x50] = op("BVC", Bvc, Relative);
    t[0x70] = op("BVS", Bvs, Relative);

    // Control transfer
    t[0x4C] = op("JMP", Jmp, Absolute);
    t[0x6C] = op("JMP", Jmp, Indirect);
    t[0x20] = op("JSR", Jsr, Absolute);
    t[0x60] = op("RTS", Rts, Implicit);
    t[0x40] = op("RTI", Rti, Implicit);
    t[0x00] = op("BRK", Brk, Implicit);
    t[0xEA] = op("NOP", Nop, Implicit);

    // Stack
    t[0x48] = op("PHA", Pha, Implicit);
    t[0x68] = op("PLA", Pla, Implicit);
    t[0x08] = op("PHP", Php, Implicit);
    t[0x28] = op("PLP", Plp, Implicit);

    // Register transfers
    t[0xAA] = op("TAX", Tax, Implicit);
    t[0xA8] = op("TAY", Tay, Implicit);
    t[0x8A] = op("TXA", Txa, Implicit);
    t[0x98] = op("TYA", Tya, Implicit);
    t[0xBA] = op("TSX", Tsx, Implicit);
    t[0x9A] = op("TXS", Txs, Implicit);

    // Flag sets and clears
    t[0x18] = op("CLC", Clc, Implicit);
    t[0x38] = op("SEC", Sec, Implicit);
    t[0x58] = op("CLI", Cli, Implicit);
    t[0x78] = op("SEI", Sei, Implicit);
    t[0xB8] = op("CLV", Clv, Implicit);
    t[0xD8] = op("CLD", Cld, Implicit);
    t[0xF8] = op("SED", Sed, Implicit);

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let defined = OPCODE_TABLE
            .iter()
            .filter(|e| e.instruction.is_some())
            .count();
        assert_eq!(defined, 151);
    }

    #[test]
    fn test_undocumented_entries_are_illegal() {
        // A few well-known holes in the opcode map
        for opcode in [0x02u8, 0x03, 0x04, 0x1A, 0x80, 0xFF] {
            let entry = &OPCODE_TABLE[opcode as usize];
            assert_eq!(entry.instruction, None, "opcode {:#04X}", opcode);
            assert_eq!(entry.mnemonic, "???");
        }
    }

    #[test]
    fn test_mnemonic_matches_instruction_spot_checks() {
        assert_eq!(OPCODE_TABLE[0x00].mnemonic, "BRK");
        assert_eq!(OPCODE_TABLE[0x20].instruction, Some(Instruction::Jsr));
        assert_eq!(OPCODE_TABLE[0x6C].mode, AddressingMode::Indirect);
        assert_eq!(OPCODE_TABLE[0xB6].mode, AddressingMode::ZeroPageY);
        assert_eq!(OPCODE_TABLE[0x9A].instruction, Some(Instruction::Txs));
    }
}
