//! Property-based tests for the accumulator engine

use calccore::{BinaryOp, Calculator, Input, PendingOp};
use proptest::prelude::*;

// ===== Strategy definitions =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

fn operator_strategy() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::Mod),
        Just(BinaryOp::Pow),
    ]
}

/// Any press, weighted towards digits like real use
fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        6 => digit_strategy().prop_map(Input::Digit),
        1 => Just(Input::Point),
        1 => Just(Input::Clear),
        1 => Just(Input::Backspace),
        3 => operator_strategy().prop_map(Input::Operator),
        2 => Just(Input::Equals),
        1 => Just(Input::Sqrt),
        1 => Just(Input::Ln),
        1 => Just(Input::Pow),
    ]
}

fn run(inputs: &[Input]) -> Calculator {
    let mut calc = Calculator::new();
    for &input in inputs {
        calc.press(input);
    }
    calc
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

proptest! {
    /// Typed digits show as typed, minus leading zeros
    #[test]
    fn prop_digits_concatenate(ds in prop::collection::vec(digit_strategy(), 1..15)) {
        let calc = run(&ds.iter().map(|&d| Input::Digit(d)).collect::<Vec<_>>());
        let typed: String = ds.iter().map(u8::to_string).collect();
        let trimmed = typed.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(calc.display_text(), expected);
    }

    /// Clear resets from anywhere
    #[test]
    fn prop_clear_resets(inputs in prop::collection::vec(input_strategy(), 0..40)) {
        let mut calc = run(&inputs);
        calc.press(Input::Clear);
        prop_assert_eq!(calc.display_text(), "0");
        prop_assert_eq!(calc.accumulated(), 0.0);
        prop_assert_eq!(calc.pending(), PendingOp::None);
    }

    /// The screen never holds two decimal points
    #[test]
    fn prop_single_decimal_point(inputs in prop::collection::vec(input_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for input in inputs {
            calc.press(input);
            prop_assert!(calc.display_text().matches('.').count() <= 1, "{}", calc.display_text());
        }
    }

    /// A second equals changes nothing
    #[test]
    fn prop_equals_idempotent(inputs in prop::collection::vec(input_strategy(), 0..40)) {
        let mut calc = run(&inputs);
        calc.press(Input::Equals);
        let text = calc.display_text().to_string();
        let accumulated = calc.accumulated();
        calc.press(Input::Equals);
        prop_assert_eq!(calc.display_text(), text.as_str());
        prop_assert!(same_value(calc.accumulated(), accumulated));
    }

    /// Backspace never leaves an empty screen
    #[test]
    fn prop_backspace_never_empty(inputs in prop::collection::vec(input_strategy(), 0..40), n in 1usize..20) {
        let mut calc = run(&inputs);
        for _ in 0..n {
            calc.press(Input::Backspace);
            prop_assert!(!calc.display_text().is_empty());
        }
    }

    /// Presses on a non-numeric screen leave the state alone
    #[test]
    fn prop_guard_is_silent(op in operator_strategy()) {
        let mut calc = run(&[Input::Digit(1), Input::Operator(BinaryOp::Div), Input::Digit(0), Input::Equals]);
        let pending = calc.pending();
        for input in [Input::Operator(op), Input::Equals, Input::Sqrt, Input::Ln, Input::Pow] {
            calc.press(input);
            prop_assert_eq!(calc.display_text(), "Infinity");
            prop_assert_eq!(calc.pending(), pending);
            prop_assert_eq!(calc.accumulated(), f64::INFINITY);
        }
    }

    /// a op b = matches plain f64 arithmetic
    #[test]
    fn prop_single_operation(a in 0u32..10_000, b in 1u32..10_000, op in operator_strategy()) {
        let mut calc = Calculator::new();
        for c in a.to_string().chars().chain(std::iter::once(op.symbol())).chain(b.to_string().chars()) {
            if let Some(input) = Input::from_char(c) {
                calc.press(input);
            }
        }
        calc.press(Input::Equals);
        let expected = calccore::operator::apply(f64::from(a), f64::from(b), op.into());
        prop_assert!(same_value(calc.accumulated(), expected));
        prop_assert_eq!(calc.display_text(), calccore::display::format_value(expected));
    }
}
