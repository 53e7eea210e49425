//! E20 Three-Register Function Codes.
//!
//! The function field (bits 3-0) selects the operation within `OP_REG3`.
//! Codes not listed here are architecturally defined as no-ops.

/// Add.
pub const ADD: u16 = 0b0000;
/// Subtract.
pub const SUB: u16 = 0b0001;
/// Bitwise OR.
pub const OR: u16 = 0b0010;
/// Bitwise AND.
pub const AND: u16 = 0b0011;
/// Set if less than (unsigned).
pub const SLT: u16 = 0b0100;
/// Jump to register.
pub const JR: u16 = 0b1000;
