//! Display buffer
//!
//! Holds the literal text on the calculator screen. The buffer never decides
//! on its own whether a press extends or replaces the text; the engine passes
//! an [`InputMode`] derived from its phase.

use regex::Regex;
use std::sync::LazyLock;

/// A signed decimal numeral: `-?digits[.digits]`, trailing point allowed.
static NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d*)?$").expect("numeral pattern compiles"));

const ZERO: &str = "0";

/// Whether a digit or point press extends the current text or starts over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Extend,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    text: String,
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

impl Display {
    pub fn new() -> Self {
        Self { text: ZERO.to_string() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(ZERO);
    }

    /// Append a token (a digit label). A screen of only zeros is replaced
    /// rather than extended so leading zeros collapse.
    pub fn append(&mut self, token: &str, mode: InputMode) {
        match mode {
            InputMode::Extend if !self.text.chars().all(|c| c == '0') => self.text.push_str(token),
            _ => self.replace(token),
        }
    }

    pub fn append_decimal_point(&mut self, mode: InputMode) {
        match mode {
            InputMode::Extend => {
                if !self.text.contains('.') {
                    self.text.push('.');
                }
            }
            InputMode::Replace => self.replace("0."),
        }
    }

    pub fn backspace(&mut self) {
        if self.text.chars().count() > 1 {
            self.text.pop();
        } else {
            self.reset();
        }
    }

    pub fn set_formatted(&mut self, value: f64) {
        self.text = format_value(value);
    }

    pub fn is_valid_number(&self) -> bool {
        NUMERAL.is_match(&self.text)
    }

    /// The numeric value on screen, or `None` when the text is not a numeral.
    pub fn value(&self) -> Option<f64> {
        if !self.is_valid_number() {
            return None;
        }
        self.text.parse().ok()
    }

    fn replace(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Format a result for the screen.
///
/// Whole numbers that fit an `i64` drop their fractional part. Everything else
/// uses the standard `f64` formatting, which never switches to exponent
/// notation, so finite results always read back as numerals.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
