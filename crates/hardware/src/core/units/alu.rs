//! Arithmetic Logic Unit (ALU).
//!
//! Implements the 16-bit integer operations of the E20. All arithmetic
//! wraps modulo 2^16 and comparisons are unsigned.

use crate::isa::decode::Reg3Func;

/// Integer ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes a three-register operation.
    ///
    /// # Arguments
    ///
    /// * `func` - The operation selected by the function field.
    /// * `a`    - Value of the first source register.
    /// * `b`    - Value of the second source register.
    ///
    /// # Returns
    ///
    /// The value to write to the destination register, or `None` for
    /// operations that produce no register result (`Jr` and unused codes).
    ///
    /// # Examples
    ///
    /// ```
    /// use e20sim_core::core::units::alu::Alu;
    /// use e20sim_core::isa::decode::Reg3Func;
    ///
    /// assert_eq!(Alu::execute(Reg3Func::Add, 0xFFFF, 1), Some(0));
    /// assert_eq!(Alu::execute(Reg3Func::Slt, 1, 2), Some(1));
    /// assert_eq!(Alu::execute(Reg3Func::Jr, 1, 2), None);
    /// ```
    #[inline]
    pub const fn execute(func: Reg3Func, a: u16, b: u16) -> Option<u16> {
        match func {
            Reg3Func::Add => Some(Self::add(a, b)),
            Reg3Func::Sub => Some(a.wrapping_sub(b)),
            Reg3Func::Or => Some(a | b),
            Reg3Func::And => Some(a & b),
            Reg3Func::Slt => Some(Self::less_than(a, b)),
            Reg3Func::Jr | Reg3Func::Unused(_) => None,
        }
    }

    /// Wrapping 16-bit addition.
    #[inline]
    pub const fn add(a: u16, b: u16) -> u16 {
        a.wrapping_add(b)
    }

    /// Unsigned set-less-than: `1` if `a < b`, else `0`.
    #[inline]
    pub const fn less_than(a: u16, b: u16) -> u16 {
        (a < b) as u16
    }
}
