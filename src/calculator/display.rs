//! What the calculator hands to whatever draws it.

use super::token::{Operator, operator_symbol};

/// The display after one token has been processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// Numeric display text, or the error message.
    pub text: String,
    /// Glyph of the pending operator, shown next to the operand.
    pub operator: Option<&'static str>,
    /// The shown value without separators. None in the error state.
    pub clipboard: Option<String>,
    /// Whether this is the error display.
    pub is_error: bool,
}

impl DisplaySnapshot {
    pub fn value(text: String, clipboard: String, operator: Option<Operator>) -> Self {
        Self {
            text,
            operator: operator.map(operator_symbol),
            clipboard: Some(clipboard),
            is_error: false,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            text: message.to_string(),
            operator: None,
            clipboard: None,
            is_error: true,
        }
    }

    /// Get the text to copy. Errors copy their message.
    pub fn text_for_clipboard(&self) -> &str {
        self.clipboard.as_deref().unwrap_or(&self.text)
    }

    /// Single-line rendering: the operator glyph, if any, before the text.
    pub fn render(&self) -> String {
        match self.operator {
            Some(symbol) => format!("{symbol} {}", self.text),
            None => self.text.clone(),
        }
    }
}
