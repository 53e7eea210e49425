//! Simulation statistics collection and reporting.
//!
//! This module tracks execution metrics for the E20 simulator. It provides:
//! 1. **Cycles:** Instructions retired (the E20 retires one instruction per cycle).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, jump, branch).
//! 3. **Branches:** How many JEQ instructions were taken.
//! 4. **Timing:** Host wall-clock time and simulated instructions per second.

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use crate::isa::decode::{Instruction, Reg3Func};

/// Simulation statistics structure.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total cycles executed, including the halting cycle.
    pub cycles: u64,
    /// Count of ALU instructions (three-register ops, ADDI, SLTI).
    pub inst_alu: u64,
    /// Count of LW instructions.
    pub inst_load: u64,
    /// Count of SW instructions.
    pub inst_store: u64,
    /// Count of unconditional jumps (J, JAL, JR).
    pub inst_jump: u64,
    /// Count of JEQ instructions.
    pub inst_branch: u64,
    /// Count of JEQ instructions whose condition held.
    pub branches_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_jump: 0,
            inst_branch: 0,
            branches_taken: 0,
        }
    }
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that was executed.
    /// * `taken` - For JEQ, whether the branch was taken; ignored otherwise.
    pub fn record(&mut self, inst: &Instruction, taken: bool) {
        self.cycles += 1;
        match inst {
            Instruction::Reg3 {
                func: Reg3Func::Jr, ..
            }
            | Instruction::J { .. }
            | Instruction::Jal { .. } => self.inst_jump += 1,
            Instruction::Reg3 { .. } | Instruction::Addi { .. } | Instruction::Slti { .. } => {
                self.inst_alu += 1;
            }
            Instruction::Lw { .. } => self.inst_load += 1,
            Instruction::Sw { .. } => self.inst_store += 1,
            Instruction::Jeq { .. } => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
        }
    }

    /// Host time elapsed since the statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Renders a human-readable summary block.
    pub fn summary(&self) -> String {
        let secs = self.elapsed().as_secs_f64();
        #[allow(clippy::cast_precision_loss)]
        let ips = if secs > 0.0 {
            self.cycles as f64 / secs
        } else {
            0.0
        };

        let mut out = String::new();
        let _ = writeln!(out, "cycles          {:>12}", self.cycles);
        let _ = writeln!(out, "  alu           {:>12}", self.inst_alu);
        let _ = writeln!(out, "  load          {:>12}", self.inst_load);
        let _ = writeln!(out, "  store         {:>12}", self.inst_store);
        let _ = writeln!(out, "  jump          {:>12}", self.inst_jump);
        let _ = writeln!(
            out,
            "  branch        {:>12} ({} taken)",
            self.inst_branch, self.branches_taken
        );
        let _ = write!(out, "host time       {secs:>12.6}s ({ips:.0} inst/s)");
        out
    }
}
