//! Main Execution Loop.
//!
//! This module implements the E20 instruction cycle. Each call to
//! [`Cpu::tick`] performs the following:
//! 1. **Fetch:** Read the word at `pc mod 8192`.
//! 2. **Decode:** Turn it into an [`Instruction`].
//! 3. **Execute:** Apply its effect and compute the next PC.
//! 4. **Commit:** Re-zero `$0`, test the halt condition, and advance the PC.
//!
//! The machine halts when the next PC, reduced modulo memory size, equals the
//! address of the instruction just executed. There is no halt opcode.

use super::Cpu;
use crate::common::constants::{ADDR_MASK, REG_LINK};
use crate::common::error::SimError;
use crate::core::memory::Memory;
use crate::core::units::Alu;
use crate::isa::decode::{Instruction, Reg3Func, decode};
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Runs one full instruction cycle.
    ///
    /// Does nothing if the CPU has already halted.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnknownOpcode`] if decode fails. State is left as
    /// it was before the fetch.
    pub fn tick(&mut self) -> Result<(), SimError> {
        if self.halted {
            return Ok(());
        }

        let current_pc = self.pc;
        let word = self.mem.read(current_pc);
        let inst = decode(word, current_pc)?;

        if self.trace {
            tracing::trace!(pc = current_pc, word, "{}", disassemble(word));
        }

        let (next_pc, taken) = self.execute(inst, current_pc);
        self.stats.record(&inst, taken);
        self.commit(current_pc, next_pc);
        Ok(())
    }

    /// Runs until the program halts.
    ///
    /// A program that never jumps to itself never returns.
    ///
    /// # Returns
    ///
    /// The number of cycles executed by this call.
    ///
    /// # Errors
    ///
    /// Propagates the first [`SimError`] raised by [`Cpu::tick`].
    pub fn run(&mut self) -> Result<u64, SimError> {
        let start = self.stats.cycles;
        while !self.halted {
            self.tick()?;
        }
        let cycles = self.stats.cycles - start;
        tracing::debug!(pc = self.pc, cycles, "halted");
        Ok(cycles)
    }

    /// Applies one instruction to the register file and memory.
    ///
    /// # Arguments
    ///
    /// * `inst` - The decoded instruction.
    /// * `current_pc` - Address the instruction was fetched from.
    ///
    /// # Returns
    ///
    /// `(next_pc, taken)`: the un-reduced address of the next instruction,
    /// and whether a JEQ branch was taken.
    pub fn execute(&mut self, inst: Instruction, current_pc: u16) -> (u16, bool) {
        let fallthrough = current_pc.wrapping_add(1);

        match inst {
            Instruction::Reg3 { func, ra, rb, rd } => {
                let a = self.regs.read(ra);
                let b = self.regs.read(rb);
                if let Some(result) = Alu::execute(func, a, b) {
                    self.regs.write(rd, result);
                }
                if func == Reg3Func::Jr {
                    return (a & ADDR_MASK, false);
                }
            }
            Instruction::Addi { ra, rd, imm } => {
                let result = Alu::add(self.regs.read(ra), imm);
                self.regs.write(rd, result);
            }
            Instruction::J { target } => return (target, false),
            Instruction::Jal { target } => {
                self.regs.write(REG_LINK, fallthrough);
                return (target, false);
            }
            Instruction::Lw { ra, rd, imm } => {
                let addr = self.effective_address(ra, imm);
                let val = self.mem.read(addr);
                self.regs.write(rd, val);
            }
            Instruction::Sw { ra, rb, imm } => {
                let addr = self.effective_address(ra, imm);
                self.mem.write(addr, self.regs.read(rb));
            }
            Instruction::Jeq { ra, rb, imm } => {
                if self.regs.read(ra) == self.regs.read(rb) {
                    return (fallthrough.wrapping_add(imm), true);
                }
            }
            Instruction::Slti { ra, rd, imm } => {
                let result = Alu::less_than(self.regs.read(ra), imm);
                self.regs.write(rd, result);
            }
        }

        (fallthrough, false)
    }

    /// Base register plus sign-extended offset, masked to 13 bits.
    #[inline]
    fn effective_address(&self, base: usize, imm: u16) -> u16 {
        Alu::add(self.regs.read(base), imm) & ADDR_MASK
    }

    /// Commit: `$0` is forced to zero, then the halt test runs on the
    /// reduced next PC, then the un-reduced next PC is stored.
    fn commit(&mut self, current_pc: u16, next_pc: u16) {
        self.regs.clear_zero();
        self.halted = Memory::wrap(next_pc) == usize::from(current_pc);
        self.pc = next_pc;
    }
}
