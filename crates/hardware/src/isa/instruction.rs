//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and the `InstructionBits` trait for
//! reading E20 instruction fields out of 16-bit instruction words.
//!
//! # Layout
//!
//! ```text
//!  15   13 12   10 9     7 6     4 3     0
//! [opcode][ reg A ][ reg B ][ reg D ][ func ]   three-register
//! [opcode][ reg A ][ reg B ][     imm7      ]   ADDI / LW / SW / JEQ / SLTI
//! [opcode][            imm13               ]   J / JAL
//! ```

use crate::common::constants::{IMM7_EXTENSION, IMM7_SIGN_BIT, WORD_BITS};

/// Bit mask for a 3-bit register index field.
pub const REG_MASK: u16 = 0x7;
/// Bit mask for the 4-bit function field.
pub const FUNC_MASK: u16 = 0xF;
/// Bit mask for the 7-bit immediate field.
pub const IMM7_MASK: u16 = 0x7F;
/// Bit mask for the 13-bit jump target field.
pub const IMM13_MASK: u16 = 0x1FFF;

/// Returns bits `lo..=hi` of `word`, right-justified.
///
/// Bit 0 is the least significant bit. Field ranges are fixed per
/// instruction format; an inverted or out-of-range request is a
/// programming error caught in debug builds.
///
/// # Arguments
///
/// * `word` - The instruction word.
/// * `lo` - Lowest bit of the field (inclusive).
/// * `hi` - Highest bit of the field (inclusive).
#[inline]
pub const fn extract_bits(word: u16, lo: u32, hi: u32) -> u16 {
    debug_assert!(lo <= hi && hi < WORD_BITS);
    let width = hi - lo + 1;
    let mask = if width >= WORD_BITS {
        u16::MAX
    } else {
        (1u16 << width) - 1
    };
    (word >> lo) & mask
}

/// Sign-extends a 7-bit two's-complement immediate to a 16-bit word.
///
/// Bits above bit 6 of the input are ignored. A set bit 6 fills bits 7-15
/// with ones, so `0b100_0000` becomes `0xFFC0` (-64).
#[inline]
pub const fn sign_extend7(value: u16) -> u16 {
    let value = value & IMM7_MASK;
    if value & IMM7_SIGN_BIT != 0 {
        value | IMM7_EXTENSION
    } else {
        value
    }
}

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 13-15).
    fn opcode(&self) -> u16;

    /// Extracts the first source register field (bits 10-12).
    fn reg_a(&self) -> usize;

    /// Extracts the second register field (bits 7-9).
    ///
    /// This is a source for three-register ops, SW and JEQ, and the
    /// destination for ADDI, LW and SLTI.
    fn reg_b(&self) -> usize;

    /// Extracts the three-register destination field (bits 4-6).
    fn reg_dst(&self) -> usize;

    /// Extracts the three-register function field (bits 0-3).
    fn func(&self) -> u16;

    /// Extracts the raw 7-bit immediate (bits 0-6), without sign extension.
    fn imm7(&self) -> u16;

    /// Extracts the 13-bit absolute jump target (bits 0-12).
    fn imm13(&self) -> u16;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u16 {
        extract_bits(*self, 13, 15)
    }

    #[inline(always)]
    fn reg_a(&self) -> usize {
        ((self >> 10) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_b(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn reg_dst(&self) -> usize {
        ((self >> 4) & REG_MASK) as usize
    }

    #[inline(always)]
    fn func(&self) -> u16 {
        self & FUNC_MASK
    }

    #[inline(always)]
    fn imm7(&self) -> u16 {
        self & IMM7_MASK
    }

    #[inline(always)]
    fn imm13(&self) -> u16 {
        self & IMM13_MASK
    }
}
