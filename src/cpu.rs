//! # CPU State and Execution
//!
//! The [`CPU`] struct is the single mutable aggregate of the interpreter:
//! registers, status flags, the halt flag, and the memory it owns. The
//! fetch-decode-execute loop lives here as [`CPU::step`], a state machine
//! with exactly two states — running and halted — and one instruction per
//! invocation.
//!
//! Execution is fully synchronous and single-threaded: `step` is a plain
//! function of the CPU state that never suspends or blocks. Hosts that need
//! to interleave rendering or debugging serialize their `step` calls and may
//! freely read the quiesced state between them.

use log::trace;

use crate::{DecodeError, Flags, MemoryBus, OPCODE_TABLE};

/// Base address of the fixed stack page; the effective stack address is
/// always `STACK_BASE + sp`.
const STACK_BASE: u16 = 0x0100;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait; the
/// CPU owns its memory for its lifetime.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x0000, &[0xE8, 0x00]); // INX ; BRK
///
/// let mut cpu = CPU::new(memory);
/// cpu.run_until_halt().unwrap();
///
/// assert_eq!(cpu.x(), 0x01);
/// assert!(!cpu.is_running());
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer: offset into the stack page 0x0100-0x01FF. Wraps
    /// silently within the byte; the stack page wraps with it.
    pub(crate) sp: u8,

    /// Program counter: address of the next byte to fetch
    pub(crate) pc: u16,

    /// Processor status flags
    pub(crate) flags: Flags,

    /// Halt flag; cleared when BRK is decoded
    pub(crate) running: bool,

    /// Memory owned by the CPU for its lifetime
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU owning the given memory, in the reset state:
    /// registers and PC zeroed, SP = 0xFF, flags cleared, running.
    ///
    /// Unlike real hardware, no reset vector is consulted — the program
    /// counter starts at 0x0000 and the host positions it with
    /// [`CPU::set_pc`] after loading its image.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: 0xFF,
            pc: 0x0000,
            flags: Flags::new(),
            running: true,
            memory,
        }
    }

    /// Returns the CPU to the reset state: A, X, Y, and PC zeroed, SP set to
    /// 0xFF, all flags cleared, running set. Memory is not touched.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFF;
        self.pc = 0x0000;
        self.flags = Flags::new();
        self.running = true;
    }

    /// Executes exactly one instruction.
    ///
    /// Fetches the opcode byte at PC, looks up its (instruction,
    /// addressing-mode) pair in [`OPCODE_TABLE`], advances PC past the
    /// opcode, and invokes the handler, which consumes any operand bytes.
    ///
    /// An opcode with no assigned instruction is a fatal [`DecodeError`]
    /// carrying the offending byte and its address. The call performs no
    /// side effects in that case: every register, flag, and memory byte is
    /// left exactly as it was, PC included.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0xA9, 0x42]); // LDA #$42
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.step().unwrap();
    ///
    /// assert_eq!(cpu.a(), 0x42);
    /// assert_eq!(cpu.pc(), 0x0002);
    /// ```
    pub fn step(&mut self) -> Result<(), DecodeError> {
        let addr = self.pc;
        let opcode = self.memory.read(addr);
        let entry = &OPCODE_TABLE[opcode as usize];

        let Some(instruction) = entry.instruction else {
            return Err(DecodeError { opcode, addr });
        };

        trace!(
            "{:04X}  {:02X}  {}",
            addr,
            opcode,
            entry.mnemonic
        );

        self.pc = self.pc.wrapping_add(1);
        crate::instructions::execute(self, instruction, entry.mode);

        Ok(())
    }

    /// Runs the CPU until BRK halts it or a decode error occurs.
    ///
    /// Convenience loop over [`CPU::step`]; callers needing per-instruction
    /// control (debuggers, tracers) drive `step` themselves.
    pub fn run_until_halt(&mut self) -> Result<(), DecodeError> {
        while self.running {
            self.step()?;
        }
        Ok(())
    }

    // ========== Host Memory Access ==========

    /// Reads a byte from memory. No side effects; reading the same address
    /// twice between steps yields identical results.
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte to memory.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Returns a reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Stack Helpers ==========

    /// Pushes a byte at 0x0100 + SP, then decrements SP (wrapping).
    pub(crate) fn push_byte(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at 0x0100 + SP.
    pub(crate) fn pop_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    /// Pushes a word high byte first, so the bytes sit little-endian in the
    /// downward-growing stack.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte((value & 0xFF) as u8);
    }

    /// Pops a word pushed by [`CPU::push_word`]: low byte first, then high.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let low = self.pop_byte() as u16;
        let high = self.pop_byte() as u16;
        (high << 8) | low
    }

    // ========== Register Accessors ==========

    /// Returns the accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the stack pointer. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the status flags.
    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    /// Returns the status flags mutably, for hosts that seed flag state.
    pub fn flags_mut(&mut self) -> &mut Flags {
        &mut self.flags
    }

    /// Packs the flags into a status byte with bits 4 and 5 forced to 1,
    /// as PHP pushes it. See [`Flags::as_byte`].
    pub fn flags_as_byte(&self) -> u8 {
        self.flags.as_byte()
    }

    /// Returns false once BRK has halted execution.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }
}
