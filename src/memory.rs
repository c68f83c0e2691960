//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from a specific memory
//! implementation, allowing flat RAM, ROM/RAM splits, or memory-mapped I/O
//! behind the same interface. The crate ships [`FlatMemory`], a single
//! contiguous 64KB array that covers the full 16-bit address space.
//!
//! The trait follows 6502 hardware behavior: there is no bus error
//! mechanism, so reads and writes always succeed and never panic. Reads have
//! no side effects on the CPU model — calling [`MemoryBus::read`] twice at
//! the same address between instructions yields identical results.

/// Memory bus trait for CPU byte reads and writes.
///
/// The CPU accesses all memory (zero page, stack page, code, data) through
/// this abstraction. The full 64KB space is always addressable, so no
/// validation beyond the `u16` address type is needed.
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the given 16-bit address. Must never panic and must
    /// have no observable side effects.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the given 16-bit address. Must never panic;
    /// implementations may silently ignore writes to read-only regions.
    fn write(&mut self, addr: u16, value: u8);
}

/// Simple 64KB flat memory: every address 0x0000-0xFFFF is writable RAM
/// initialized to zero.
///
/// Zero page (0x0000-0x00FF) and the stack page (0x0100-0x01FF) are ordinary
/// slices of the same array; their special behavior lives entirely in the
/// addressing-mode resolver and stack helpers, not in the memory itself.
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new `FlatMemory` with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies a program image into memory starting at `origin`.
    ///
    /// Wraps around the top of the address space if the image extends past
    /// 0xFFFF, matching the modular address arithmetic used everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0600, &[0xA9, 0xAA]); // LDA #$AA
    /// assert_eq!(mem.read(0x0600), 0xA9);
    /// assert_eq!(mem.read(0x0601), 0xAA);
    /// ```
    pub fn load(&mut self, origin: u16, image: &[u8]) {
        for (offset, &byte) in image.iter().enumerate() {
            let addr = origin.wrapping_add(offset as u16);
            self.data[addr as usize] = byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
