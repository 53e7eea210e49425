//! E20 Instruction Decoder.
//!
//! This module turns a 16-bit instruction word into an [`Instruction`], a
//! closed sum type with one variant per major opcode. Each variant carries
//! exactly the fields its format defines, with 7-bit immediates already
//! sign-extended to 16 bits.

use crate::common::error::SimError;
use crate::isa::e20::{func, opcodes};
use crate::isa::instruction::{InstructionBits, sign_extend7};

/// Major opcode classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Three-register ALU and JR.
    Reg3,
    /// Add immediate.
    Addi,
    /// Absolute jump.
    J,
    /// Jump and link.
    Jal,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Branch if equal.
    Jeq,
    /// Set if less than immediate.
    Slti,
}

impl Opcode {
    /// Maps a raw opcode field to its class.
    ///
    /// Returns `None` for values above 7, which a 3-bit field cannot hold.
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            opcodes::OP_REG3 => Some(Self::Reg3),
            opcodes::OP_ADDI => Some(Self::Addi),
            opcodes::OP_J => Some(Self::J),
            opcodes::OP_JAL => Some(Self::Jal),
            opcodes::OP_LW => Some(Self::Lw),
            opcodes::OP_SW => Some(Self::Sw),
            opcodes::OP_JEQ => Some(Self::Jeq),
            opcodes::OP_SLTI => Some(Self::Slti),
            _ => None,
        }
    }
}

/// Operation selected by the function field of a three-register instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reg3Func {
    /// `$dst = $a + $b`
    Add,
    /// `$dst = $a - $b`
    Sub,
    /// `$dst = $a | $b`
    Or,
    /// `$dst = $a & $b`
    And,
    /// `$dst = ($a < $b) as u16`, unsigned.
    Slt,
    /// `pc = $a & 0x1FFF`
    Jr,
    /// Any other function code. Executes as a no-op.
    Unused(u16),
}

impl Reg3Func {
    /// Maps a 4-bit function field to its operation.
    pub const fn from_bits(bits: u16) -> Self {
        match bits {
            func::ADD => Self::Add,
            func::SUB => Self::Sub,
            func::OR => Self::Or,
            func::AND => Self::And,
            func::SLT => Self::Slt,
            func::JR => Self::Jr,
            other => Self::Unused(other),
        }
    }
}

/// A decoded E20 instruction.
///
/// Register fields are indices in `0..8`. `imm` fields hold the
/// sign-extended 7-bit immediate; `target` fields hold the unsigned 13-bit
/// jump address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Three-register format.
    Reg3 {
        /// Operation.
        func: Reg3Func,
        /// First source.
        ra: usize,
        /// Second source.
        rb: usize,
        /// Destination.
        rd: usize,
    },
    /// `$rd = $ra + imm`
    Addi {
        /// Source.
        ra: usize,
        /// Destination.
        rd: usize,
        /// Sign-extended immediate.
        imm: u16,
    },
    /// `pc = target`
    J {
        /// Absolute target.
        target: u16,
    },
    /// `$7 = pc + 1; pc = target`
    Jal {
        /// Absolute target.
        target: u16,
    },
    /// `$rd = mem[($ra + imm) & 0x1FFF]`
    Lw {
        /// Base register.
        ra: usize,
        /// Destination.
        rd: usize,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `mem[($ra + imm) & 0x1FFF] = $rb`
    Sw {
        /// Base register.
        ra: usize,
        /// Value register.
        rb: usize,
        /// Sign-extended offset.
        imm: u16,
    },
    /// `if $ra == $rb { pc = pc + 1 + imm }`
    Jeq {
        /// First comparand.
        ra: usize,
        /// Second comparand.
        rb: usize,
        /// Sign-extended displacement from the following instruction.
        imm: u16,
    },
    /// `$rd = ($ra < imm) as u16`, unsigned.
    Slti {
        /// Source.
        ra: usize,
        /// Destination.
        rd: usize,
        /// Sign-extended immediate.
        imm: u16,
    },
}

impl Instruction {
    /// Returns the major opcode class of this instruction.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::Reg3 { .. } => Opcode::Reg3,
            Self::Addi { .. } => Opcode::Addi,
            Self::J { .. } => Opcode::J,
            Self::Jal { .. } => Opcode::Jal,
            Self::Lw { .. } => Opcode::Lw,
            Self::Sw { .. } => Opcode::Sw,
            Self::Jeq { .. } => Opcode::Jeq,
            Self::Slti { .. } => Opcode::Slti,
        }
    }
}

/// Decodes an instruction word.
///
/// # Arguments
///
/// * `word` - The 16-bit instruction word.
/// * `pc` - Address the word was fetched from, used only for error reporting.
///
/// # Errors
///
/// Returns [`SimError::UnknownOpcode`] if the opcode field is outside the
/// eight defined classes. This cannot happen for a 3-bit field and is kept
/// as a backstop.
pub fn decode(word: u16, pc: u16) -> Result<Instruction, SimError> {
    let opcode = word.opcode();
    let Some(class) = Opcode::from_bits(opcode) else {
        debug_assert!(opcode < 8, "3-bit opcode field produced {opcode}");
        return Err(SimError::UnknownOpcode { opcode, pc });
    };

    let ra = word.reg_a();
    let rb = word.reg_b();
    let imm = sign_extend7(word.imm7());

    Ok(match class {
        Opcode::Reg3 => Instruction::Reg3 {
            func: Reg3Func::from_bits(word.func()),
            ra,
            rb,
            rd: word.reg_dst(),
        },
        Opcode::Addi => Instruction::Addi { ra, rd: rb, imm },
        Opcode::J => Instruction::J {
            target: word.imm13(),
        },
        Opcode::Jal => Instruction::Jal {
            target: word.imm13(),
        },
        Opcode::Lw => Instruction::Lw { ra, rd: rb, imm },
        Opcode::Sw => Instruction::Sw { ra, rb, imm },
        Opcode::Jeq => Instruction::Jeq { ra, rb, imm },
        Opcode::Slti => Instruction::Slti { ra, rd: rb, imm },
    })
}
