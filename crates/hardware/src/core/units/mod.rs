//! Execution units.
//!
//! The E20 has a single functional unit: the 16-bit integer ALU.

/// Integer ALU.
pub mod alu;

pub use self::alu::Alu;
