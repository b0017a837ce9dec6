//! The operand currently being typed.
//!
//! Typed digits are kept structurally (integral digits plus optional
//! fractional digits) so precision and formatting never have to sniff a
//! formatted string. The sign lives with the calculator state, not here.

use super::format::{format_raw, format_value, insert_separators};
use super::token::Digit;

/// Maximum number of digits in a typed operand, counting the leading zero
/// of a pure fraction.
pub const MAX_DIGITS: usize = 9;

/// The pending operand.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Entry {
    #[default]
    Empty,
    /// Digits typed by the user.
    Typed {
        integer: String,
        fraction: Option<String>,
    },
    /// A value produced by a command (percent) rather than typed. Holds the
    /// magnitude; typing after it starts a new entry.
    Computed(f64),
}

impl Entry {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Number of digits held, excluding separators and sign.
    pub fn digit_count(&self) -> usize {
        match self {
            Self::Typed { integer, fraction } => {
                integer.len() + fraction.as_ref().map_or(0, String::len)
            }
            _ => 0,
        }
    }

    /// Append a digit. Returns `false` when the digit budget is exhausted.
    pub fn push_digit(&mut self, digit: Digit) -> bool {
        if !matches!(self, Self::Typed { .. }) {
            *self = Self::Typed {
                integer: String::new(),
                fraction: None,
            };
        }
        if self.digit_count() >= MAX_DIGITS {
            return false;
        }

        let Self::Typed { integer, fraction } = self else {
            return false;
        };
        match fraction {
            Some(fraction) => fraction.push(digit.as_char()),
            None if integer.as_str() == "0" => {
                if digit == Digit::ZERO {
                    return true;
                }
                integer.clear();
                integer.push(digit.as_char());
            }
            None => integer.push(digit.as_char()),
        }
        true
    }

    /// Start the fractional part. A second point is rejected, as is a point
    /// once the digit budget is exhausted.
    pub fn push_point(&mut self) -> bool {
        match self {
            Self::Typed {
                fraction: Some(_), ..
            } => false,
            Self::Typed { integer, fraction } => {
                if integer.is_empty() {
                    integer.push('0');
                }
                if integer.len() >= MAX_DIGITS {
                    return false;
                }
                *fraction = Some(String::new());
                true
            }
            Self::Empty | Self::Computed(_) => {
                *self = Self::Typed {
                    integer: "0".to_string(),
                    fraction: Some(String::new()),
                };
                true
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// Magnitude of the entry; an empty entry is zero.
    pub fn magnitude(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Computed(value) => *value,
            Self::Typed { integer, fraction } => {
                let text = match fraction {
                    Some(fraction) if !fraction.is_empty() => format!("{integer}.{fraction}"),
                    _ => integer.clone(),
                };
                text.parse().unwrap_or(0.0)
            }
        }
    }

    /// Signed value of the entry.
    pub fn value(&self, negative: bool) -> f64 {
        let magnitude = self.magnitude();
        if negative { -magnitude } else { magnitude }
    }

    /// Display text, with the sign re-applied to match `negative`.
    ///
    /// Typed entries keep what was typed (a trailing `.` or trailing zeros
    /// stay visible); computed entries go through the number formatter.
    pub fn display(&self, negative: bool, min_magnitude: f64) -> String {
        let unsigned = match self {
            Self::Empty => "0".to_string(),
            Self::Computed(value) => format_value(*value, min_magnitude),
            Self::Typed { integer, fraction } => {
                let mut text = insert_separators(integer);
                if let Some(fraction) = fraction {
                    text.push('.');
                    text.push_str(fraction);
                }
                text
            }
        };
        if negative {
            format!("-{unsigned}")
        } else {
            unsigned
        }
    }

    /// Text without separators, for copying elsewhere.
    pub fn raw(&self, negative: bool, min_magnitude: f64) -> String {
        format_raw(self.value(negative), min_magnitude)
    }
}
