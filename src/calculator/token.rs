//! Keypad tokens.
//!
//! Every keystroke or button press reaches the calculator as exactly one
//! [`Token`]. The set is closed, so the state machine never has to deal with
//! an unknown operator.

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// Create a digit from its numeric value.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

/// One of the four binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The ASCII character used on the keyboard for this operator.
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Parse an operator from its keyboard character or display glyph.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// Map an operator to the glyph shown next to the pending operand.
///
/// Multiplication and division get their typographic signs; addition and
/// subtraction pass through unchanged.
pub fn operator_symbol(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => "-",
        Operator::Multiply => "×",
        Operator::Divide => "÷",
    }
}

/// One discrete unit of calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Digit(Digit),
    Point,
    Operator(Operator),
    Equals,
    Percent,
    ToggleSign,
    /// Clear the pending entry (`c`).
    Clear,
    /// Reset everything (`ac`).
    AllClear,
}

impl Token {
    /// Whether this token extends the pending entry.
    pub fn is_entry(self) -> bool {
        matches!(self, Self::Digit(_) | Self::Point)
    }
}

impl From<Digit> for Token {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        let token = match lower.as_str() {
            "." => Self::Point,
            "=" => Self::Equals,
            "%" => Self::Percent,
            "+/-" | "±" | "neg" => Self::ToggleSign,
            "c" => Self::Clear,
            "ac" => Self::AllClear,
            _ => {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        if let Some(digit) = Digit::from_char(c) {
                            Self::Digit(digit)
                        } else if let Some(op) = Operator::from_char(c) {
                            Self::Operator(op)
                        } else {
                            return Err(CalcError::UnknownToken(s.to_string()));
                        }
                    }
                    _ => return Err(CalcError::UnknownToken(s.to_string())),
                }
            }
        };

        Ok(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{}", d.as_char()),
            Self::Point => f.write_str("."),
            Self::Operator(op) => write!(f, "{}", op.as_char()),
            Self::Equals => f.write_str("="),
            Self::Percent => f.write_str("%"),
            Self::ToggleSign => f.write_str("+/-"),
            Self::Clear => f.write_str("c"),
            Self::AllClear => f.write_str("ac"),
        }
    }
}
