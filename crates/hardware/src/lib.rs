//! E20 processor simulator library.
//!
//! This crate implements a simulator for the E20, a 16-bit teaching
//! processor with eight registers, 8K words of memory, and eight opcodes:
//! 1. **Core:** Register file, main memory, ALU, and the fetch-decode-execute cycle.
//! 2. **ISA:** Bit-field extraction, sign extension, decoding, and disassembly.
//! 3. **Simulation:** Program image loader, final state reporter, and the `Simulator` wrapper.
//! 4. **Support:** Configuration and execution statistics.
//!
//! # Example
//!
//! ```
//! use e20sim_core::{Config, Simulator};
//!
//! let image = "ram[0] = 16'b0010000010000101;\nram[1] = 16'b0100000000000001;\n";
//! let mut sim = Simulator::from_reader(image.as_bytes(), Config::default()).unwrap();
//! let cycles = sim.run().unwrap();
//! assert_eq!(cycles, 2);
//! assert_eq!(sim.cpu.regs.read(1), 5);
//! assert_eq!(sim.cpu.pc, 1);
//! ```

/// Common types and constants (registers, errors, machine dimensions).
pub mod common;
/// Simulator configuration.
pub mod config;
/// CPU core (state, memory, ALU, execution).
pub mod core;
/// Instruction set (encoding, decode, disassembly).
pub mod isa;
/// Program loader, reporter, and top-level simulator.
pub mod sim;
/// Execution statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, PC, and stats.
pub use crate::core::Cpu;
/// Top-level simulator.
pub use crate::sim::Simulator;
