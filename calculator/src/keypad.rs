//! Keypad layout and keyboard mapping

use calccore::{BinaryOp, CalcMode, Input, Palette};
use egui::{Color32, Event, Key};

/// How a button is coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonRole {
    Number,
    Operator,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub input: Input,
    /// Columns taken by the button.
    pub span: usize,
}

impl KeypadButton {
    const fn new(input: Input) -> Self {
        Self { input, span: 1 }
    }

    const fn wide(input: Input) -> Self {
        Self { input, span: 2 }
    }

    pub fn role(&self) -> ButtonRole {
        match self.input {
            Input::Digit(_) | Input::Point => ButtonRole::Number,
            Input::Equals => ButtonRole::Equals,
            _ => ButtonRole::Operator,
        }
    }

    /// (fill, text) colours for this button
    pub fn colors(&self, palette: &Palette) -> (Color32, Color32) {
        match self.role() {
            ButtonRole::Number => (palette.numbers_background, palette.text),
            ButtonRole::Operator => (palette.operator_background, palette.text),
            ButtonRole::Equals => (palette.equals_background, palette.equals_text),
        }
    }
}

/// Columns in the standard grid; scientific mode adds one.
pub const STANDARD_COLUMNS: usize = 4;

const fn op(op: BinaryOp) -> KeypadButton {
    KeypadButton::new(Input::Operator(op))
}

const fn digit(d: u8) -> KeypadButton {
    KeypadButton::new(Input::Digit(d))
}

/// Standard grid, row by row. The trailing entry of each row is the
/// scientific column, when the row has one.
const ROWS: [&[KeypadButton]; 5] = [
    &[
        KeypadButton::new(Input::Clear),
        KeypadButton::new(Input::Backspace),
        op(BinaryOp::Mod),
        op(BinaryOp::Div),
        KeypadButton::new(Input::Sqrt),
    ],
    &[digit(7), digit(8), digit(9), op(BinaryOp::Mul), KeypadButton::new(Input::Pow)],
    &[digit(4), digit(5), digit(6), op(BinaryOp::Sub), KeypadButton::new(Input::Ln)],
    &[digit(1), digit(2), digit(3), op(BinaryOp::Add)],
    &[
        KeypadButton::new(Input::Point),
        digit(0),
        KeypadButton::wide(Input::Equals),
    ],
];

/// Rows of buttons visible in `mode`.
pub fn rows(mode: CalcMode) -> Vec<Vec<KeypadButton>> {
    ROWS.iter()
        .map(|row| {
            row.iter()
                .copied()
                .filter(|b| mode.shows_scientific() || !b.input.is_scientific())
                .collect()
        })
        .collect()
}

pub fn columns(mode: CalcMode) -> usize {
    if mode.shows_scientific() {
        STANDARD_COLUMNS + 1
    } else {
        STANDARD_COLUMNS
    }
}

/// Translate this frame's keyboard events into presses.
///
/// Characters come from text events so layouts that need shift for `+` or
/// `*` work; Enter, Backspace, Escape and Delete come from key events.
pub fn inputs_from_events(events: &[Event]) -> Vec<Input> {
    let mut inputs = Vec::new();
    for event in events {
        match event {
            Event::Text(text) => inputs.extend(text.chars().filter_map(Input::from_char)),
            Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => {
                let input = match key {
                    Key::Enter => Some(Input::Equals),
                    Key::Backspace => Some(Input::Backspace),
                    Key::Escape | Key::Delete => Some(Input::Clear),
                    _ => None,
                };
                inputs.extend(input);
            }
            _ => {}
        }
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use calccore::ThemeKind;

    #[test]
    fn test_standard_hides_functions() {
        let rows = rows(CalcMode::Standard);
        assert!(rows.iter().flatten().all(|b| !b.input.is_scientific()));
        for row in &rows {
            let width: usize = row.iter().map(|b| b.span).sum();
            assert_eq!(width, STANDARD_COLUMNS);
        }
    }

    #[test]
    fn test_scientific_shows_functions() {
        let rows = rows(CalcMode::Scientific);
        let scientific: Vec<_> = rows.iter().flatten().filter(|b| b.input.is_scientific()).collect();
        assert_eq!(scientific.len(), 3);
        assert_eq!(rows[0].last().map(|b| b.input), Some(Input::Sqrt));
        assert!(rows.iter().all(|row| row.iter().map(|b| b.span).sum::<usize>() <= columns(CalcMode::Scientific)));
    }

    #[test]
    fn test_every_digit_present_once() {
        for d in 0..=9 {
            let count = rows(CalcMode::Standard)
                .iter()
                .flatten()
                .filter(|b| b.input == Input::Digit(d))
                .count();
            assert_eq!(count, 1, "digit {d}");
        }
    }

    #[test]
    fn test_roles_and_colors() {
        let palette = ThemeKind::Dark.palette();
        let equals = KeypadButton::wide(Input::Equals);
        assert_eq!(equals.role(), ButtonRole::Equals);
        assert_eq!(equals.colors(&palette), (palette.equals_background, palette.equals_text));
        assert_eq!(digit(3).role(), ButtonRole::Number);
        assert_eq!(KeypadButton::new(Input::Point).role(), ButtonRole::Number);
        assert_eq!(KeypadButton::new(Input::Clear).role(), ButtonRole::Operator);
        assert_eq!(op(BinaryOp::Add).colors(&palette).0, palette.operator_background);
    }

    #[test]
    fn test_text_events() {
        let events = vec![Event::Text("12+3".to_string()), Event::Text("=".to_string())];
        assert_eq!(
            inputs_from_events(&events),
            vec![
                Input::Digit(1),
                Input::Digit(2),
                Input::Operator(BinaryOp::Add),
                Input::Digit(3),
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_key_events() {
        let key = |key, pressed, modifiers| Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers,
        };
        let events = vec![
            key(Key::Enter, true, egui::Modifiers::NONE),
            key(Key::Enter, false, egui::Modifiers::NONE),
            key(Key::Backspace, true, egui::Modifiers::NONE),
            key(Key::Escape, true, egui::Modifiers::NONE),
            key(Key::Delete, true, egui::Modifiers::COMMAND),
            key(Key::A, true, egui::Modifiers::NONE),
        ];
        assert_eq!(
            inputs_from_events(&events),
            vec![Input::Equals, Input::Backspace, Input::Clear]
        );
    }
}
