//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the E20 machine. It includes:
//! 1. **Memory Constants:** Word count and the address mask used for wraparound.
//! 2. **Register Constants:** Register count and the architecturally special indices.
//! 3. **Word Constants:** Width and masks of the 16-bit machine word.
//! 4. **Report Constants:** Default size of the final memory dump.

/// Number of words in main memory (8K words).
pub const MEM_SIZE: usize = 1 << 13;

/// Mask applied to effective addresses (13 bits).
///
/// `MEM_SIZE` is a power of two, so masking is equivalent to `addr % MEM_SIZE`.
pub const ADDR_MASK: u16 = (MEM_SIZE - 1) as u16;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Index of the hardwired zero register (`$0`).
pub const REG_ZERO: usize = 0;

/// Index of the link register written by `jal` (`$7`).
pub const REG_LINK: usize = 7;

/// Width of a machine word in bits.
pub const WORD_BITS: u32 = 16;

/// Width of the signed immediate carried by ADDI, LW, SW, JEQ, and SLTI.
pub const IMM7_BITS: u32 = 7;

/// Sign bit of a 7-bit immediate.
pub const IMM7_SIGN_BIT: u16 = 1 << (IMM7_BITS - 1);

/// Ones written into bits 7..15 when a 7-bit immediate is negative.
pub const IMM7_EXTENSION: u16 = 0xFF80;

/// Default number of memory words shown by the state reporter.
pub const DEFAULT_DISPLAY_WORDS: usize = 128;

/// Number of memory words printed per report line.
pub const WORDS_PER_LINE: usize = 8;
