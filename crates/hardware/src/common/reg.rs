//! E20 Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight
//! general-purpose registers `$0`-`$7`. It provides:
//! 1. **Storage:** Eight 16-bit registers, zero at reset.
//! 2. **Invariant Enforcement:** `$0` is hardwired to zero; writes to it are dropped.
//! 3. **Observability:** Read-only views used by the state reporter and tests.

use super::constants::{NUM_REGS, REG_ZERO};

/// General-purpose register file.
///
/// Register `$0` always reads as zero. All other registers hold any 16-bit value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u16; NUM_REGS],
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Register `$0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 8 or greater. Decoded register fields are three
    /// bits wide and can never exceed 7.
    #[inline]
    pub fn read(&self, idx: usize) -> u16 {
        if idx == REG_ZERO { 0 } else { self.regs[idx] }
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7). Writes to `$0` are ignored.
    /// * `val` - The 16-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: u16) {
        if idx != REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Forces `$0` back to zero at the end of a cycle.
    #[inline]
    pub fn clear_zero(&mut self) {
        self.regs[REG_ZERO] = 0;
    }

    /// Returns all eight register values in index order.
    pub fn values(&self) -> [u16; NUM_REGS] {
        self.regs
    }
}
