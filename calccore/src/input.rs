//! The input alphabet shared by buttons and the keyboard

use crate::operator::BinaryOp;

/// One discrete press delivered to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A digit 0-9.
    Digit(u8),
    Point,
    Clear,
    Backspace,
    Operator(BinaryOp),
    Equals,
    Sqrt,
    Ln,
    /// The scientific `pow` button, distinct from the `^` operator.
    Pow,
}

impl Input {
    /// Map a typed character. `,` is accepted as a decimal separator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Input::Digit(d as u8)),
            '.' | ',' => Some(Input::Point),
            '=' => Some(Input::Equals),
            _ => BinaryOp::from_symbol(c).map(Input::Operator),
        }
    }

    /// Button caption.
    pub fn label(self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Point => ".".to_string(),
            Input::Clear => "C".to_string(),
            Input::Backspace => "<-".to_string(),
            Input::Operator(op) => op.symbol().to_string(),
            Input::Equals => "=".to_string(),
            Input::Sqrt => "√".to_string(),
            Input::Ln => "ln".to_string(),
            Input::Pow => "pow".to_string(),
        }
    }

    /// Inputs whose buttons only show in scientific mode.
    pub fn is_scientific(self) -> bool {
        matches!(self, Input::Sqrt | Input::Ln | Input::Pow)
    }
}
