//! Decimal precision correction for arithmetic results.
//!
//! Binary floating point leaves noise in the last bits of results such as
//! `0.1 + 0.2`. The corrector picks the number of fractional digits the
//! result can legitimately have, from the operands' own precision and the
//! nine-digit display budget, and re-rounds the raw result to it.

use super::entry::MAX_DIGITS;
use super::format::{MAX_VALUE, is_exponential};
use super::token::Operator;

/// Number of fractional digits in the shortest representation of `value`.
pub fn fraction_digits(value: f64) -> usize {
    value
        .abs()
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Number of digits in the integral part of `value`; a pure fraction counts
/// its leading zero.
pub fn integer_digits(value: f64) -> usize {
    let integral = value.abs().trunc();
    if integral < 1.0 {
        1
    } else {
        integral.to_string().len()
    }
}

/// Fractional digits left over once the integral part of `value` has taken
/// its share of the display budget.
pub fn max_fraction_digits(value: f64) -> usize {
    MAX_DIGITS.saturating_sub(integer_digits(value))
}

/// Round to `digits` fractional digits through the decimal representation.
pub fn round_to(value: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, value).parse().unwrap_or(value)
}

/// Correct the raw result of `left op right`.
///
/// Integral results and zero come back unchanged. Results that need
/// exponential rendering lose their fractional digits: overflowed values are
/// rounded to an integer, tiny values keep a single significant digit.
pub fn correct(left: f64, op: Operator, right: f64, raw: f64, min_magnitude: f64) -> f64 {
    if !raw.is_finite() || raw == 0.0 || raw.fract() == 0.0 {
        return raw;
    }

    if is_exponential(raw, min_magnitude) {
        let collapsed = if raw.abs() > MAX_VALUE {
            raw.round()
        } else {
            format!("{:.0e}", raw).parse().unwrap_or(raw)
        };
        tracing::trace!(raw, collapsed, "collapsed exponential result");
        return collapsed;
    }

    let allowed = max_fraction_digits(raw);
    let (left_digits, right_digits) = (fraction_digits(left), fraction_digits(right));
    let digits = match op {
        Operator::Add | Operator::Subtract => left_digits.max(right_digits).min(allowed),
        Operator::Multiply => (left_digits + right_digits).min(allowed),
        Operator::Divide => allowed,
    };

    let corrected = round_to(raw, digits);
    tracing::trace!(raw, digits, corrected, "corrected precision");
    corrected
}
