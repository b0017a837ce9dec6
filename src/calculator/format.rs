//! Conversion between numeric values and display strings.
//!
//! Display strings carry `,` thousands separators in the integral part only.
//! Values outside the displayable range switch to exponential notation
//! (`1e+9`), in which case separators are never inserted.

use crate::error::{CalcError, Result};

/// Largest magnitude shown in positional notation.
pub const MAX_VALUE: f64 = 999_999_999.0;

/// Default smallest non-zero magnitude shown in positional notation.
pub const DEFAULT_MIN_MAGNITUDE: f64 = 1e-8;

const SEPARATOR: char = ',';

/// Whether `value` must be rendered in exponential form.
pub fn is_exponential(value: f64, min_magnitude: f64) -> bool {
    let magnitude = value.abs();
    magnitude > MAX_VALUE || (magnitude != 0.0 && magnitude < min_magnitude)
}

/// Format a value for the display.
pub fn format_value(value: f64, min_magnitude: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if is_exponential(value, min_magnitude) {
        return to_exponential(value);
    }
    insert_separators(&value.to_string())
}

/// Format a value without separators, for copying elsewhere.
pub fn format_raw(value: f64, min_magnitude: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if is_exponential(value, min_magnitude) {
        return to_exponential(value);
    }
    value.to_string()
}

/// Render with no fractional mantissa digits and a signed exponent.
fn to_exponential(value: f64) -> String {
    let formatted = format!("{:.0e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Re-derive separator placement from scratch.
///
/// Existing separators in the integral part are discarded and a new one is
/// placed every three digits counting from the least significant digit. The
/// fractional part is left alone. Exponential strings are returned unchanged.
pub fn insert_separators(text: &str) -> String {
    if text.contains(['e', 'E']) {
        return text.to_string();
    }

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integral, fraction) = match unsigned.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integral.chars().filter(|&c| c != SEPARATOR).collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(SEPARATOR);
        }
        grouped.push(*c);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Remove every thousands separator.
pub fn strip_separators(text: &str) -> String {
    text.chars().filter(|&c| c != SEPARATOR).collect()
}

/// Parse a display string back into a value.
///
/// A leading `-` in the text or a set `negative` flag both make the result
/// negative.
pub fn parse_display(text: &str, negative: bool) -> Result<f64> {
    let stripped = strip_separators(text.trim());
    let (negative, unsigned) = match stripped.strip_prefix('-') {
        Some(rest) => (true, rest.to_string()),
        None => (negative, stripped),
    };

    let magnitude: f64 = unsigned
        .parse()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))?;

    Ok(if negative { -magnitude } else { magnitude })
}
