//! # Processor Status Flags
//!
//! The 6502 status register is modeled as a struct of independent booleans
//! rather than a packed byte, with explicit pack/unpack functions for the
//! places that need the byte form (PHP, PLP, RTI, and host-side trace
//! comparison). The unused bit (bit 5) is not stored; it is forced to 1 on
//! every pack.
//!
//! Bit layout of the packed byte (NV1BDIZC):
//!
//! | Bit | Flag                    |
//! |-----|-------------------------|
//! | 7   | N (Negative)            |
//! | 6   | V (Overflow)            |
//! | 5   | unused, always 1        |
//! | 4   | B (Break)               |
//! | 3   | D (Decimal)             |
//! | 2   | I (Interrupt disable)   |
//! | 1   | Z (Zero)                |
//! | 0   | C (Carry)               |

/// Processor status flags as individual boolean fields.
///
/// Only C, Z, N, and V are derived from arithmetic results; I, D, and B are
/// set or cleared exclusively by explicit instructions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Carry flag (unsigned overflow/borrow).
    pub c: bool,
    /// Zero flag.
    pub z: bool,
    /// Interrupt disable flag.
    pub i: bool,
    /// Decimal mode flag.
    pub d: bool,
    /// Break flag.
    pub b: bool,
    /// Overflow flag (signed two's-complement overflow).
    pub v: bool,
    /// Negative flag (bit 7 of the last result).
    pub n: bool,
}

impl Flags {
    /// Creates a cleared flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Packs the flags into a status byte with bits 4 (break) and 5 (unused)
    /// forced to 1, regardless of the current B flag.
    ///
    /// This is the byte PHP pushes and the byte hosts compare against
    /// reference emulator traces.
    pub fn as_byte(&self) -> u8 {
        let mut status: u8 = 0b0011_0000; // bits 4 and 5 forced

        if self.n {
            status |= 0b1000_0000;
        }
        if self.v {
            status |= 0b0100_0000;
        }
        if self.d {
            status |= 0b0000_1000;
        }
        if self.i {
            status |= 0b0000_0100;
        }
        if self.z {
            status |= 0b0000_0010;
        }
        if self.c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Unpacks a status byte into the six semantic flags.
    ///
    /// Bits 4 and 5 carry no state: the break flag is left untouched and the
    /// unused bit is not stored. This is the inverse of [`Flags::as_byte`]
    /// used by PLP and RTI.
    pub fn set_from_byte(&mut self, status: u8) {
        self.n = status & 0b1000_0000 != 0;
        self.v = status & 0b0100_0000 != 0;
        self.d = status & 0b0000_1000 != 0;
        self.i = status & 0b0000_0100 != 0;
        self.z = status & 0b0000_0010 != 0;
        self.c = status & 0b0000_0001 != 0;
    }

    /// Builds a flag set from a status byte, ignoring bits 4 and 5.
    pub fn from_byte(status: u8) -> Self {
        let mut flags = Self::new();
        flags.set_from_byte(status);
        flags
    }

    /// Updates Z and N from a result byte. Every load, logic, arithmetic,
    /// shift, increment, and transfer result goes through here.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.z = value == 0;
        self.n = value & 0x80 != 0;
    }
}
