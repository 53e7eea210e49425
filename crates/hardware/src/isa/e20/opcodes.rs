//! E20 Major Opcodes.
//!
//! The opcode occupies bits 15-13 of every instruction word.

/// Three-register instructions (ADD, SUB, OR, AND, SLT, JR).
pub const OP_REG3: u16 = 0b000;

/// Add immediate.
pub const OP_ADDI: u16 = 0b001;

/// Absolute jump.
pub const OP_J: u16 = 0b010;

/// Absolute jump and link into `$7`.
pub const OP_JAL: u16 = 0b011;

/// Load word.
pub const OP_LW: u16 = 0b100;

/// Store word.
pub const OP_SW: u16 = 0b101;

/// PC-relative branch if equal.
pub const OP_JEQ: u16 = 0b110;

/// Set if less than immediate.
pub const OP_SLTI: u16 = 0b111;
