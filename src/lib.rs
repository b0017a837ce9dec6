//! A four-function calculator driven one keystroke at a time.
//!
//! The [`calculator`] module holds the core: feed it [`Token`]s and read
//! back a [`DisplaySnapshot`] after each one. [`repl`] is a line-oriented
//! terminal front end on top of it.

pub mod calculator;
pub mod config;
pub mod error;
pub mod repl;

pub use calculator::{Calculator, DisplaySnapshot, Operator, Token};
pub use config::Config;
pub use error::{CalcError, Result};
