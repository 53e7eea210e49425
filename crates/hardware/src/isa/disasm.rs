//! Instruction Disassembler for the E20.
//!
//! Converts a 16-bit instruction word into E20 assembly text for trace
//! logging and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use e20sim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b001_000_001_0000101), "addi $1, $0, 5");
//! ```

use crate::isa::decode::{Instruction, Reg3Func, decode};

/// Renders an immediate as a signed decimal.
#[inline]
fn simm(imm: u16) -> i16 {
    imm as i16
}

/// Disassembles one instruction word.
///
/// Three-register words with an unused function code have no mnemonic and
/// are rendered as `.fill <word>`.
pub fn disassemble(word: u16) -> String {
    let Ok(inst) = decode(word, 0) else {
        return "unknown".to_string();
    };

    match inst {
        Instruction::Reg3 { func, ra, rb, rd } => {
            let mnemonic = match func {
                Reg3Func::Add => "add",
                Reg3Func::Sub => "sub",
                Reg3Func::Or => "or",
                Reg3Func::And => "and",
                Reg3Func::Slt => "slt",
                Reg3Func::Jr => return format!("jr ${ra}"),
                Reg3Func::Unused(_) => return format!(".fill {word}"),
            };
            format!("{mnemonic} ${rd}, ${ra}, ${rb}")
        }
        Instruction::Addi { ra, rd, imm } => format!("addi ${rd}, ${ra}, {}", simm(imm)),
        Instruction::J { target } => format!("j {target}"),
        Instruction::Jal { target } => format!("jal {target}"),
        Instruction::Lw { ra, rd, imm } => format!("lw ${rd}, {}(${ra})", simm(imm)),
        Instruction::Sw { ra, rb, imm } => format!("sw ${rb}, {}(${ra})", simm(imm)),
        Instruction::Jeq { ra, rb, imm } => format!("jeq ${ra}, ${rb}, {}", simm(imm)),
        Instruction::Slti { ra, rd, imm } => format!("slti ${rd}, ${ra}, {}", simm(imm)),
    }
}
