//! E20 Instruction Set.
//!
//! Defines the encoding constants of the eight-opcode E20 instruction set.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (bits 15-13).
//! - `func`: Minor opcodes of the three-register class (bits 3-0).

/// Function codes for three-register instructions.
pub mod func;

/// Major opcodes.
pub mod opcodes;
