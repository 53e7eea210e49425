//! # ALU Tests
//!
//! Verifies the 16-bit wrapping arithmetic and unsigned comparison.

use e20sim_core::core::units::Alu;
use e20sim_core::isa::decode::Reg3Func;
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(Reg3Func::Add, 2, 3, 5)]
#[case(Reg3Func::Add, 0xFFFF, 1, 0)]
#[case(Reg3Func::Sub, 5, 3, 2)]
#[case(Reg3Func::Sub, 0, 1, 0xFFFF)]
#[case(Reg3Func::Or, 0b1010, 0b0101, 0b1111)]
#[case(Reg3Func::And, 0b1110, 0b0111, 0b0110)]
#[case(Reg3Func::Slt, 1, 2, 1)]
#[case(Reg3Func::Slt, 2, 1, 0)]
#[case(Reg3Func::Slt, 7, 7, 0)]
fn register_operations(#[case] func: Reg3Func, #[case] a: u16, #[case] b: u16, #[case] want: u16) {
    assert_eq!(Alu::execute(func, a, b), Some(want));
}

#[test]
fn slt_compares_unsigned() {
    // 0xFFFF is 65535, not -1.
    assert_eq!(Alu::execute(Reg3Func::Slt, 0xFFFF, 1), Some(0));
    assert_eq!(Alu::execute(Reg3Func::Slt, 1, 0xFFFF), Some(1));
}

#[test]
fn jr_and_unused_codes_produce_no_result() {
    assert_eq!(Alu::execute(Reg3Func::Jr, 4, 5), None);
    assert_eq!(Alu::execute(Reg3Func::Unused(0b1001), 4, 5), None);
}

proptest! {
    #[test]
    fn add_then_sub_restores_operand(a: u16, b: u16) {
        let sum = Alu::execute(Reg3Func::Add, a, b).unwrap();
        prop_assert_eq!(Alu::execute(Reg3Func::Sub, sum, b), Some(a));
    }

    #[test]
    fn less_than_is_zero_or_one(a: u16, b: u16) {
        let r = Alu::less_than(a, b);
        prop_assert!(r <= 1);
        prop_assert_eq!(r == 1, a < b);
    }
}
