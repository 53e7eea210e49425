//! Simulator: owns the CPU together with its configuration.
//!
//! This is the entry point used by the CLI: load an image, run to halt,
//! render the report.

use std::io::BufRead;
use std::path::Path;

use crate::common::error::{LoadError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::memory::Memory;
use crate::sim::{loader, report};

/// Top-level simulator: CPU state plus run configuration.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// CPU architectural state (registers, memory, PC, stats).
    pub cpu: Cpu,
    /// Configuration the simulator was built with.
    pub config: Config,
}

impl Simulator {
    /// Creates a simulator around a loaded memory image.
    pub fn new(mem: Memory, config: Config) -> Self {
        let cpu = Cpu::with_memory(mem, &config);
        Self { cpu, config }
    }

    /// Loads a program image from a reader and creates a simulator for it.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] raised by the loader.
    pub fn from_reader<R: BufRead>(reader: R, config: Config) -> Result<Self, LoadError> {
        let mem = loader::load_image(reader)?;
        Ok(Self::new(mem, config))
    }

    /// Loads a program image file and creates a simulator for it.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] raised by the loader.
    pub fn from_file<P: AsRef<Path>>(path: P, config: Config) -> Result<Self, LoadError> {
        let mem = loader::load_file(path)?;
        Ok(Self::new(mem, config))
    }

    /// Advances the simulator by one instruction.
    ///
    /// # Errors
    ///
    /// Propagates decode failures from the CPU.
    pub fn tick(&mut self) -> Result<(), SimError> {
        self.cpu.tick()
    }

    /// Runs to halt and returns the number of cycles executed.
    ///
    /// # Errors
    ///
    /// Propagates decode failures from the CPU.
    pub fn run(&mut self) -> Result<u64, SimError> {
        self.cpu.run()
    }

    /// Whether the program has halted.
    pub const fn is_halted(&self) -> bool {
        self.cpu.halted
    }

    /// Renders the final state report using the configured display window.
    pub fn report(&self) -> String {
        report::format_state(
            self.cpu.pc,
            &self.cpu.regs,
            &self.cpu.mem,
            self.config.report.display_words,
        )
    }
}
