//! calccore — engine and shared pieces for the calculator
//!
//! The [`engine::Calculator`] turns button presses into screen text. It keeps
//! one accumulated value and one pending operator; there is no operator
//! precedence and no expression parsing.
//!
//! ```
//! use calccore::{BinaryOp, Calculator, Input};
//!
//! let mut calc = Calculator::new();
//! for input in [
//!     Input::Digit(5),
//!     Input::Operator(BinaryOp::Add),
//!     Input::Digit(3),
//!     Input::Equals,
//! ] {
//!     calc.press(input);
//! }
//! assert_eq!(calc.display_text(), "8");
//! ```

pub mod display;
pub mod engine;
pub mod input;
pub mod logging;
pub mod mode;
pub mod operator;
pub mod storage;
pub mod theme;

pub use engine::{Calculator, Phase};
pub use input::Input;
pub use mode::CalcMode;
pub use operator::{BinaryOp, PendingOp};
pub use storage::Preferences;
pub use theme::{Palette, ThemeKind};
