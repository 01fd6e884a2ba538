//! Accumulator state machine
//!
//! One accumulated value, one pending operator and the text on screen. There
//! is no expression tree: each commit folds the displayed number into the
//! accumulator with whatever operator was queued before it.
//!
//! Operator, equals and function presses first check that the screen holds a
//! numeral. When it does not (`Infinity`, `NaN`, a lone `-` left by
//! backspace) the press is ignored without touching any state.

use crate::display::{Display, InputMode};
use crate::input::Input;
use crate::operator::{apply, BinaryOp, PendingOp};

/// Where the user is in entering a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Typing a number. Digits extend the screen; an operator commits it.
    #[default]
    Entering,
    /// A result is on screen after `=`, `√` or `ln`. Digits start a new
    /// number; an operator still commits the result.
    ShowingResult,
    /// An operator was just taken. Digits start a new number; another
    /// operator only swaps the pending one.
    AwaitingOperand,
}

impl Phase {
    fn input_mode(self) -> InputMode {
        match self {
            Phase::Entering => InputMode::Extend,
            Phase::ShowingResult | Phase::AwaitingOperand => InputMode::Replace,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    accumulated: f64,
    pending: PendingOp,
    phase: Phase,
    display: Display,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatch one press.
    pub fn press(&mut self, input: Input) {
        tracing::trace!(?input, "press");
        match input {
            Input::Digit(d) => self.digit(d),
            Input::Point => self.point(),
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
            Input::Operator(op) => self.operator(op),
            Input::Equals => self.equals(),
            Input::Sqrt => self.sqrt(),
            Input::Ln => self.ln(),
            Input::Pow => self.power(),
        }
    }

    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn pending(&self) -> PendingOp {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether an operator press would fold the screen into the accumulator.
    pub fn ready_to_commit(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::ShowingResult)
    }

    /// Whether digits extend the screen instead of replacing it.
    pub fn append_mode(&self) -> bool {
        self.phase == Phase::Entering
    }

    pub fn digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            tracing::debug!(digit, "ignoring out-of-range digit");
            return;
        };
        let mut buf = [0u8; 4];
        self.display.append(c.encode_utf8(&mut buf), self.phase.input_mode());
        self.phase = Phase::Entering;
    }

    pub fn point(&mut self) {
        self.display.append_decimal_point(self.phase.input_mode());
        self.phase = Phase::Entering;
    }

    /// Reset screen, accumulator and pending operator. The entry phase is
    /// left as it was.
    pub fn clear(&mut self) {
        self.display.reset();
        self.pending = PendingOp::None;
        self.accumulated = 0.0;
        tracing::debug!("cleared");
    }

    pub fn backspace(&mut self) {
        self.display.backspace();
    }

    pub fn operator(&mut self, op: BinaryOp) {
        let Some(value) = self.screen_value() else {
            return;
        };
        if self.ready_to_commit() {
            self.commit(value);
            self.phase = Phase::AwaitingOperand;
        }
        self.pending = op.into();
    }

    /// Commit with the pending operator. Does nothing unless a number has
    /// been entered (or a result shown) since the last operator, so repeated
    /// presses fold with the identity and leave the result alone.
    pub fn equals(&mut self) {
        let Some(value) = self.screen_value() else {
            return;
        };
        if !self.ready_to_commit() {
            return;
        }
        self.commit(value);
        self.pending = PendingOp::Equals;
        self.phase = Phase::ShowingResult;
    }

    /// Square root of the screen value. The accumulator and pending operator
    /// are not consulted.
    pub fn sqrt(&mut self) {
        self.unary(f64::sqrt, PendingOp::Sqrt);
    }

    /// Natural log of the screen value, like [`Calculator::sqrt`].
    pub fn ln(&mut self) {
        self.unary(f64::ln, PendingOp::Ln);
    }

    /// The `pow` button: commits against the accumulator with the operator
    /// pending before it, then queues a power for the next commit.
    pub fn power(&mut self) {
        let Some(value) = self.screen_value() else {
            return;
        };
        self.commit(value);
        self.pending = PendingOp::Pow;
        self.phase = Phase::AwaitingOperand;
    }

    fn unary(&mut self, f: fn(f64) -> f64, marker: PendingOp) {
        let Some(value) = self.screen_value() else {
            return;
        };
        self.accumulated = f(value);
        self.display.set_formatted(self.accumulated);
        self.pending = marker;
        // Readiness survives; only append mode is dropped.
        if self.phase == Phase::Entering {
            self.phase = Phase::ShowingResult;
        }
        tracing::debug!(?marker, value, result = self.accumulated, "function");
    }

    fn commit(&mut self, value: f64) {
        let result = apply(self.accumulated, value, self.pending);
        tracing::debug!(
            accumulated = self.accumulated,
            value,
            pending = ?self.pending,
            result,
            "commit"
        );
        self.accumulated = result;
        self.display.set_formatted(result);
    }

    fn screen_value(&self) -> Option<f64> {
        let value = self.display.value();
        if value.is_none() {
            tracing::debug!(text = self.display.text(), "screen is not a number, ignoring");
        }
        value
    }
}
