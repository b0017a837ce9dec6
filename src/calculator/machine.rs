//! The calculation state machine.
//!
//! [`CalcState`] is an explicit value: [`CalcState::next`] maps a state and
//! a token to the following state without touching anything else, and
//! [`CalcState::display`] derives what should be shown. [`Calculator`] owns
//! one state plus its configuration and is what front ends talk to.
//!
//! Operators are applied strictly left to right as they are entered; there
//! is no precedence.

use std::fmt;

use super::display::DisplaySnapshot;
use super::entry::Entry;
use super::evaluation::{CalcResult, evaluate};
use super::format::{format_raw, format_value};
use super::token::{Operator, Token};
use crate::config::CalculatorConfig;

/// What the previous non-entry action was. Decides whether the next digit
/// extends the calculation or starts a new one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LastAction {
    #[default]
    Entry,
    /// A result is on display; the next digit starts over.
    Equals,
}

/// Coarse phase of the calculation, derived from the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    EnteringOperand1,
    OperatorPending,
    EnteringOperand2,
    Result,
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::EnteringOperand1 => "entering first operand",
            Self::OperatorPending => "operator pending",
            Self::EnteringOperand2 => "entering second operand",
            Self::Result => "showing result",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

/// Complete calculator state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalcState {
    entry: Entry,
    accumulator: Option<f64>,
    operator: Option<Operator>,
    negative_entry: bool,
    last_action: LastAction,
    error: bool,
}

impl CalcState {
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The committed left operand, if any.
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn negative_entry(&self) -> bool {
        self.negative_entry
    }

    pub fn last_action(&self) -> LastAction {
        self.last_action
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn phase(&self) -> Phase {
        let entering = !self.entry.is_empty() || self.negative_entry;
        match (self.error, self.accumulator, self.operator) {
            (true, _, _) => Phase::Error,
            (false, None, _) if entering => Phase::EnteringOperand1,
            (false, None, _) => Phase::Idle,
            (false, Some(_), Some(_)) if entering => Phase::EnteringOperand2,
            (false, Some(_), Some(_)) => Phase::OperatorPending,
            (false, Some(_), None) if entering => Phase::EnteringOperand1,
            (false, Some(_), None) => Phase::Result,
        }
    }

    /// The state after `token`.
    pub fn next(&self, token: Token, config: &CalculatorConfig) -> Self {
        self.clone().step(token, config)
    }

    /// What the display shows in this state.
    pub fn display(&self, config: &CalculatorConfig) -> DisplaySnapshot {
        if self.error {
            return DisplaySnapshot::error(&config.error_message);
        }

        let min = config.min_magnitude;
        if !self.entry.is_empty() || self.negative_entry {
            let text = self.entry.display(self.negative_entry, min);
            let raw = self.entry.raw(self.negative_entry, min);
            DisplaySnapshot::value(text, raw, self.operator)
        } else if let Some(value) = self.accumulator {
            DisplaySnapshot::value(
                format_value(value, min),
                format_raw(value, min),
                self.operator,
            )
        } else {
            DisplaySnapshot::value("0".to_string(), "0".to_string(), self.operator)
        }
    }

    fn step(self, token: Token, config: &CalculatorConfig) -> Self {
        if self.error {
            // Any token leaves the error state; only entry keys go on to
            // start the next number.
            let fresh = Self::default();
            return if token.is_entry() {
                fresh.step(token, config)
            } else {
                fresh
            };
        }

        match token {
            Token::Digit(digit) => self.push_entry(|entry| entry.push_digit(digit)),
            Token::Point => self.push_entry(Entry::push_point),
            Token::Operator(op) => self.press_operator(op, config),
            Token::Equals => self.press_equals(config),
            Token::Percent => self.press_percent(config),
            Token::ToggleSign => self.toggle_sign(),
            Token::Clear => self.clear(),
            Token::AllClear => Self::default(),
        }
    }

    fn push_entry(mut self, push: impl FnOnce(&mut Entry) -> bool) -> Self {
        if self.last_action == LastAction::Equals {
            self = Self::default();
        }
        if matches!(self.entry, Entry::Computed(_)) {
            self.negative_entry = false;
        }

        if !push(&mut self.entry) {
            tracing::trace!(digits = self.entry.digit_count(), "entry key ignored");
        }
        self.last_action = LastAction::Entry;
        self
    }

    fn press_operator(mut self, op: Operator, config: &CalculatorConfig) -> Self {
        if self.entry.is_empty() {
            // Nothing typed: change the pending operator, committing zero
            // if there is no left operand yet.
            if self.accumulator.is_none() {
                self.accumulator = Some(self.take_entry());
            }
        } else {
            let right = self.take_entry();
            match (self.accumulator, self.operator) {
                (Some(left), Some(pending)) => {
                    if let Err(state) = self.calculate(left, pending, right, config) {
                        return state;
                    }
                }
                _ => self.accumulator = Some(right),
            }
        }

        self.operator = Some(op);
        self.last_action = LastAction::Entry;
        self
    }

    fn press_equals(mut self, config: &CalculatorConfig) -> Self {
        match (self.accumulator, self.operator) {
            (Some(left), Some(op)) => {
                // With nothing typed the accumulator is its own right operand.
                let right = if self.entry.is_empty() {
                    self.negative_entry = false;
                    left
                } else {
                    self.take_entry()
                };
                if let Err(state) = self.calculate(left, op, right, config) {
                    return state;
                }
                self.operator = None;
            }
            (_, None) if !self.entry.is_empty() => {
                self.accumulator = Some(self.take_entry());
            }
            _ => {}
        }

        self.last_action = LastAction::Equals;
        self
    }

    fn press_percent(mut self, config: &CalculatorConfig) -> Self {
        let (base, into_entry) = if !self.entry.is_empty() {
            (self.entry.value(self.negative_entry), true)
        } else {
            match (self.accumulator, self.operator) {
                (Some(value), Some(_)) => (value, true),
                (Some(value), None) => (value, false),
                (None, _) => return self,
            }
        };

        let percent = match evaluate(base, Operator::Multiply, 0.01, config.min_magnitude) {
            CalcResult::Success { value } => value,
            invalid => return Self::invalid(invalid),
        };

        if into_entry {
            self.negative_entry = percent < 0.0;
            self.entry = Entry::Computed(percent.abs());
            self.last_action = LastAction::Entry;
        } else {
            // A result is showing: the percentage replaces it.
            self.accumulator = Some(percent);
            self.last_action = LastAction::Equals;
        }
        self
    }

    fn toggle_sign(mut self) -> Self {
        match (self.accumulator, self.operator) {
            (Some(value), None) if self.entry.is_empty() => {
                self.accumulator = Some(-value);
            }
            (Some(value), Some(_)) if self.entry.is_empty() => {
                // The shown left operand, re-signed, becomes the right operand.
                self.entry = Entry::Computed(value.abs());
                self.negative_entry = value >= 0.0;
            }
            _ => self.negative_entry = !self.negative_entry,
        }
        self
    }

    fn clear(mut self) -> Self {
        if self.entry.is_empty() {
            return Self::default();
        }
        self.entry.clear();
        self.negative_entry = false;
        self
    }

    /// Take the entry's signed value and empty it.
    fn take_entry(&mut self) -> f64 {
        let value = self.entry.value(self.negative_entry);
        self.entry.clear();
        self.negative_entry = false;
        value
    }

    /// Store `left op right` in the accumulator, or hand back the error state.
    fn calculate(
        &mut self,
        left: f64,
        op: Operator,
        right: f64,
        config: &CalculatorConfig,
    ) -> Result<(), Self> {
        match evaluate(left, op, right, config.min_magnitude) {
            CalcResult::Success { value } => {
                self.accumulator = Some(value);
                Ok(())
            }
            invalid => Err(Self::invalid(invalid)),
        }
    }

    fn invalid(result: CalcResult) -> Self {
        tracing::warn!(
            reason = result.reason().unwrap_or("invalid"),
            "calculation failed, reset required"
        );
        Self {
            error: true,
            ..Self::default()
        }
    }
}

/// A calculator session: one state, driven one token at a time.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    state: CalcState,
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalcState::default(),
            config,
        }
    }

    /// Process one token and return the resulting display.
    pub fn press(&mut self, token: Token) -> DisplaySnapshot {
        self.state = self.state.next(token, &self.config);
        let snapshot = self.display();
        tracing::debug!(
            %token,
            phase = %self.state.phase(),
            display = %snapshot.text,
            "token processed"
        );
        snapshot
    }

    /// Process tokens in order and return the final display.
    pub fn press_all(&mut self, tokens: impl IntoIterator<Item = Token>) -> DisplaySnapshot {
        for token in tokens {
            self.press(token);
        }
        self.display()
    }

    pub fn display(&self) -> DisplaySnapshot {
        self.state.display(&self.config)
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Back to the initial state, as if all-clear had been pressed.
    pub fn reset(&mut self) {
        self.state = CalcState::default();
    }
}
