//! Common utilities and types used throughout the E20 simulator.
//!
//! This module provides the building blocks shared by the decoder, the
//! execution engine and the loader. It includes:
//! 1. **Constants:** Memory size, register count, and word masks.
//! 2. **Error Handling:** Load, simulation, and configuration error types.
//! 3. **Register Management:** The eight-entry register file.

/// Machine-wide constants.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{ADDR_MASK, MEM_SIZE, NUM_REGS};
pub use error::{ConfigError, LoadError, SimError};
pub use reg::RegisterFile;
