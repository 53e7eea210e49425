//! # Halt and Program Tests
//!
//! The machine halts when an instruction's next PC, reduced modulo memory
//! size, equals its own address. These tests cover that rule and complete
//! programs run to halt.

use crate::common::builder::instruction::inst;
use crate::common::harness::{CYCLE_LIMIT, TestContext};
use proptest::prelude::*;

#[test]
fn jump_to_self_halts_after_one_cycle() {
    let mut ctx = TestContext::with_program(&[inst().j(0).build()]);
    assert_eq!(ctx.run_to_halt(), 1);
    assert_eq!(ctx.pc(), 0);
    assert!(ctx.halted());
}

#[test]
fn branch_to_self_halts() {
    let mut ctx = TestContext::with_program(&[inst().jeq(0, 0, -1).build()]);
    assert_eq!(ctx.run_to_halt(), 1);
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn jr_to_self_halts() {
    let mut ctx = TestContext::with_program(&[0, inst().jr(1).build()]).with_reg(1, 1);
    assert_eq!(ctx.run_to_halt(), 2);
    assert_eq!(ctx.pc(), 1);
}

#[test]
fn not_taken_branch_does_not_halt() {
    let mut ctx = TestContext::with_program(&[inst().jeq(0, 1, -1).build()]).with_reg(1, 1);
    ctx.step();
    assert!(!ctx.halted());
    assert_eq!(ctx.pc(), 1);
}

#[test]
fn tick_after_halt_changes_nothing() {
    let mut ctx = TestContext::with_program(&[inst().j(0).build()]);
    let _ = ctx.run_to_halt();
    let cycles = ctx.cpu().stats.cycles;
    ctx.step();
    assert_eq!(ctx.pc(), 0);
    assert_eq!(ctx.cpu().stats.cycles, cycles);
}

#[test]
fn halt_compares_against_unreduced_pc() {
    // From pc 8191 the no-op falls through to 8192, which fetches address 0.
    // `j 0` there is not a self-jump until the PC itself reads 0.
    let mut ctx = TestContext::with_program(&[inst().j(0).build()]);
    ctx.cpu_mut().pc = 8191;
    assert_eq!(ctx.run_to_halt(), 3);
    assert_eq!(ctx.pc(), 0);
}

#[test]
fn straight_line_program() {
    let mut ctx = TestContext::with_program(&[
        inst().addi(1, 0, 5).build(),
        inst().addi(2, 0, 3).build(),
        inst().add(3, 1, 2).build(),
        inst().j(3).build(),
    ]);
    assert_eq!(ctx.run_to_halt(), 4);
    assert_eq!(ctx.pc(), 3);
    assert_eq!(ctx.reg(1), 5);
    assert_eq!(ctx.reg(2), 3);
    assert_eq!(ctx.reg(3), 8);
}

#[test]
fn subroutine_call_and_return() {
    let mut ctx = TestContext::with_program(&[
        inst().addi(1, 0, 3).build(),  // 0
        inst().jal(4).build(),         // 1
        inst().j(2).build(),           // 2
        0,                             // 3
        inst().addi(1, 1, -1).build(), // 4
        inst().jeq(1, 0, 1).build(),   // 5
        inst().j(4).build(),           // 6
        inst().jr(7).build(),          // 7
    ]);
    let cycles = ctx.sim.run().unwrap();
    assert_eq!(cycles, 12);
    assert_eq!(ctx.pc(), 2);
    assert_eq!(ctx.reg(1), 0);
    assert_eq!(ctx.reg(7), 2);
}

#[test]
fn run_counts_only_its_own_cycles() {
    let mut ctx = TestContext::with_program(&[0, 0, inst().j(2).build()]);
    ctx.step();
    assert_eq!(ctx.sim.run().unwrap(), 2);
    assert_eq!(ctx.cpu().stats.cycles, 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Register zero reads zero after every instruction of any program.
    #[test]
    fn register_zero_stays_zero(program in prop::collection::vec(any::<u16>(), 1..32)) {
        let mut ctx = TestContext::with_program(&program);
        for _ in 0..256 {
            if ctx.halted() {
                break;
            }
            ctx.step();
            prop_assert_eq!(ctx.reg(0), 0);
        }
    }

    /// A halted machine sits on the instruction that jumped to itself.
    #[test]
    fn halt_leaves_pc_on_self_jump(target in 0u16..8192) {
        let mut ctx = TestContext::new().with_word(target, inst().j(target).build());
        ctx.cpu_mut().pc = target;
        prop_assert!(ctx.run_to_halt() < CYCLE_LIMIT);
        prop_assert_eq!(ctx.pc(), target);
    }
}
