//! Keystroke-driven calculator core.
//!
//! This module provides functionality to:
//! - Parse keypad tokens and split typed lines into them
//! - Accumulate the operand being typed
//! - Evaluate two-operand calculations with decimal precision correction
//! - Format values for the display, including overflow in exponential form
//! - Copy the displayed value to the clipboard

mod clipboard;
mod detection;
mod display;
mod entry;
mod evaluation;
mod format;
mod machine;
mod precision;
mod token;

pub use clipboard::copy_to_clipboard;
pub use detection::{looks_like_tokens, tokenize};
pub use display::DisplaySnapshot;
pub use entry::{Entry, MAX_DIGITS};
pub use evaluation::{CalcResult, apply, evaluate};
pub use format::{
    DEFAULT_MIN_MAGNITUDE, MAX_VALUE, format_raw, format_value, insert_separators, parse_display,
    strip_separators,
};
pub use machine::{CalcState, Calculator, LastAction, Phase};
pub use precision::correct;
pub use token::{Digit, Operator, Token, operator_symbol};
