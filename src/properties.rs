//! Property tests for the algebraic invariants the language promises hold
//! for every valid input, not just the literal examples.

use crate::{parse, Effect, ExecutionState};
use quickcheck_macros::quickcheck;

fn run(src: &str) -> (Effect, ExecutionState) {
    let program = parse(src).unwrap();
    let mut state = ExecutionState::new(program.into());
    let effect = state.run();
    (effect, state)
}

#[quickcheck]
fn rotate_left_then_right_round_trips(a: u32, n: u32) -> bool {
    let n = n % 32;
    let src = format!("{} {} rotate_left {} rotate_right", a, n, n);
    let (effect, state) = run(&src);
    effect == Effect::Finished && state.stack_view() == [a]
}

#[quickcheck]
fn rotate_right_then_left_round_trips(a: u32, n: u32) -> bool {
    let n = n % 32;
    let src = format!("{} {} rotate_right {} rotate_left", a, n, n);
    let (effect, state) = run(&src);
    effect == Effect::Finished && state.stack_view() == [a]
}

#[quickcheck]
fn addition_wraps_like_wrapping_i32(a: i32, b: i32) -> bool {
    let src = format!("{} {} +", a as u32, b as u32);
    let (effect, state) = run(&src);
    let expected = (std::num::Wrapping(a) + std::num::Wrapping(b)).0 as u32;
    effect == Effect::Finished && state.stack_view() == [expected]
}

#[test]
fn max_plus_one_wraps_to_min() {
    let (effect, state) = run(&format!("{} 1 +", i32::MAX as u32));
    assert_eq!(effect, Effect::Finished);
    assert_eq!(state.stack_view(), &[i32::MIN as u32]);
}

#[test]
fn min_minus_one_wraps_to_max() {
    let (effect, state) = run(&format!("{} 1 -", i32::MIN as u32));
    assert_eq!(effect, Effect::Finished);
    assert_eq!(state.stack_view(), &[i32::MAX as u32]);
}

#[quickcheck]
fn binary_arithmetic_decreases_depth_by_one(a: u32, b: u32) -> bool {
    let src = format!("{} {} +", a, b);
    let (effect, state) = run(&src);
    effect == Effect::Finished && state.stack_view().len() == 1
}

#[quickcheck]
fn copy_increases_depth_by_one(a: u32, b: u32) -> bool {
    let src = format!("{} {} 0 copy", a, b);
    let (effect, state) = run(&src);
    effect == Effect::Finished && state.stack_view() == [a, b, b]
}

#[quickcheck]
fn drop_decreases_depth_by_one_and_preserves_order(a: u32, b: u32, c: u32) -> bool {
    let src = format!("{} {} {} 1 drop", a, b, c);
    let (effect, state) = run(&src);
    effect == Effect::Finished && state.stack_view() == [a, c]
}

#[quickcheck]
fn non_jump_operator_advances_pc_by_one(a: u32, b: u32) -> bool {
    let program = parse(&format!("{} {} +", a, b)).unwrap();
    let mut state = ExecutionState::new(program.into());
    state.step(); // push a
    let before = state.program_counter();
    state.step(); // push b
    assert_eq!(state.program_counter(), before + 1);
    state.step(); // +
    true
}
