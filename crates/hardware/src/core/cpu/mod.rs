//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! architectural state of an E20 machine. It coordinates the following:
//! 1. **State Management:** Register file, program counter, and halt flag.
//! 2. **Memory:** The 8K-word main memory, owned exclusively by the CPU.
//! 3. **Observability:** Instruction tracing and execution statistics.

/// Fetch-decode-execute cycle.
pub mod execution;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::core::memory::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
///
/// A `Cpu` is a plain owned value; callers drive it with
/// [`Cpu::tick`] or [`Cpu::run`] and read the final state from its fields.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter. Reduced modulo memory size only when used.
    pub pc: u16,
    /// Main memory.
    pub mem: Memory,
    /// Set once an instruction jumps or branches to itself.
    pub halted: bool,
    /// Enable per-instruction trace events.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the reset PC and the tracing switch.
    pub fn new(config: &Config) -> Self {
        Self::with_memory(Memory::new(), config)
    }

    /// Creates a CPU around an already-loaded memory image.
    pub fn with_memory(mem: Memory, config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: config.general.start_pc,
            mem,
            halted: false,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
