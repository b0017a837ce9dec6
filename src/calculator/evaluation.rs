//! Applying a binary operator to two operands.
//!
//! [`apply`] is plain IEEE arithmetic: dividing by zero yields an infinity.
//! [`evaluate`] adds precision correction and classifies the outcome so the
//! state machine can tell a displayable value from an invalid one.

use super::format::is_exponential;
use super::precision::correct;
use super::token::Operator;

/// Outcome of one calculation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalcResult {
    /// A finite value, already precision-corrected.
    Success { value: f64 },
    /// NaN or an infinity; the calculation cannot continue.
    Invalid { raw: f64 },
}

impl CalcResult {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The value, for successful results only.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Success { value } => Some(*value),
            Self::Invalid { .. } => None,
        }
    }

    /// Short description of an invalid result, for logging.
    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Success { .. } => None,
            Self::Invalid { raw } if raw.is_nan() => Some("Not a Number"),
            Self::Invalid { raw } if raw.is_sign_positive() => Some("Infinity"),
            Self::Invalid { .. } => Some("-Infinity"),
        }
    }
}

/// Apply `op` to the two operands.
pub fn apply(left: f64, op: Operator, right: f64) -> f64 {
    match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left / right,
    }
}

/// Apply `op` and correct the result's decimal precision.
///
/// Quotients already below `min_magnitude` are left as computed; the
/// formatter shows them in exponential form.
pub fn evaluate(left: f64, op: Operator, right: f64, min_magnitude: f64) -> CalcResult {
    let raw = apply(left, op, right);
    if !raw.is_finite() {
        return CalcResult::Invalid { raw };
    }

    let value = if op == Operator::Divide && raw.abs() < min_magnitude {
        raw
    } else {
        correct(left, op, right, raw, min_magnitude)
    };

    if is_exponential(value, min_magnitude) {
        tracing::debug!(value, "result exceeds positional display range");
    }

    CalcResult::Success { value }
}
