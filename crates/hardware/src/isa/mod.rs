//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the E20 encoding constants, bit-field extraction, decoding into
//! typed instructions, and the disassembler.
//!
//! # Modules
//!
//! * `e20`: Opcode and function code constants.
//! * `instruction`: Field extraction and sign extension.
//! * `decode`: Word to [`decode::Instruction`] conversion.
//! * `disasm`: Word to assembly text conversion.

/// Instruction decoding into typed instructions.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// E20 opcode and function code constants.
pub mod e20;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;
