//! Core processor implementation.
//!
//! This module contains the E20 CPU: its architectural state, main memory,
//! the integer ALU, and the fetch-decode-execute cycle.

/// CPU state and instruction cycle.
pub mod cpu;

/// Word-addressed main memory.
pub mod memory;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
pub use self::memory::Memory;
