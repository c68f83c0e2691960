//! # 6502 Instruction Implementations
//!
//! Handlers for all 56 documented instructions, organized by family. Each
//! handler is a standalone function taking the CPU and the addressing mode
//! the decode table paired with the opcode; the handler pulls its operand
//! through the resolver, which consumes operand bytes at PC.
//!
//! Handlers are total: every defined instruction is fully specified for all
//! 256 possible register/memory byte values (wrapping arithmetic
//! throughout), so none of them can fail.
//!
//! ## Families
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **alu**: ORA, AND, EOR, BIT, ADC, SBC, CMP, CPX, CPY
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: JMP, JSR, RTS, RTI, BRK, NOP
//! - **stack**: PHA, PLA, PHP, PLP
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::{AddressingMode, Instruction, MemoryBus, CPU};

/// Invokes the handler for a decoded instruction. Called by the dispatcher
/// after the opcode byte has been fetched and PC advanced past it.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    mode: AddressingMode,
) {
    use Instruction::*;

    match instruction {
        Lda => load_store::execute_lda(cpu, mode),
        Ldx => load_store::execute_ldx(cpu, mode),
        Ldy => load_store::execute_ldy(cpu, mode),
        Sta => load_store::execute_sta(cpu, mode),
        Stx => load_store::execute_stx(cpu, mode),
        Sty => load_store::execute_sty(cpu, mode),

        Ora => alu::execute_ora(cpu, mode),
        And => alu::execute_and(cpu, mode),
        Eor => alu::execute_eor(cpu, mode),
        Bit => alu::execute_bit(cpu, mode),
        Adc => alu::execute_adc(cpu, mode),
        Sbc => alu::execute_sbc(cpu, mode),
        Cmp => alu::execute_cmp(cpu, mode),
        Cpx => alu::execute_cpx(cpu, mode),
        Cpy => alu::execute_cpy(cpu, mode),

        Inc => inc_dec::execute_inc(cpu, mode),
        Dec => inc_dec::execute_dec(cpu, mode),
        Inx => inc_dec::execute_inx(cpu),
        Iny => inc_dec::execute_iny(cpu),
        Dex => inc_dec::execute_dex(cpu),
        Dey => inc_dec::execute_dey(cpu),

        Asl => shifts::execute_asl(cpu, mode),
        Lsr => shifts::execute_lsr(cpu, mode),
        Rol => shifts::execute_rol(cpu, mode),
        Ror => shifts::execute_ror(cpu, mode),

        Bcc => branches::execute_bcc(cpu),
        Bcs => branches::execute_bcs(cpu),
        Beq => branches::execute_beq(cpu),
        Bne => branches::execute_bne(cpu),
        Bmi => branches::execute_bmi(cpu),
        Bpl => branches::execute_bpl(cpu),
        Bvc => branches::execute_bvc(cpu),
        Bvs => branches::execute_bvs(cpu),

        Jmp => control::execute_jmp(cpu, mode),
        Jsr => control::execute_jsr(cpu),
        Rts => control::execute_rts(cpu),
        Rti => control::execute_rti(cpu),
        Brk => control::execute_brk(cpu),
        Nop => control::execute_nop(cpu),

        Pha => stack::execute_pha(cpu),
        Pla => stack::execute_pla(cpu),
        Php => stack::execute_php(cpu),
        Plp => stack::execute_plp(cpu),

        Tax => transfer::execute_tax(cpu),
        Tay => transfer::execute_tay(cpu),
        Txa => transfer::execute_txa(cpu),
        Tya => transfer::execute_tya(cpu),
        Tsx => transfer::execute_tsx(cpu),
        Txs => transfer::execute_txs(cpu),

        Clc => flags::execute_clc(cpu),
        Sec => flags::execute_sec(cpu),
        Cli => flags::execute_cli(cpu),
        Sei => flags::execute_sei(cpu),
        Cld => flags::execute_cld(cpu),
        Sed => flags::execute_sed(cpu),
        Clv => flags::execute_clv(cpu),
    }
}
