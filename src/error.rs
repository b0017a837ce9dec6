//! Error type shared by the calculator library.
//!
//! Calculator semantics never produce an `Err`: ignored keystrokes, overflow
//! and the NaN/Infinity display state are all part of normal operation.
//! Errors are reserved for malformed input text, configuration and the
//! clipboard.

use std::path::PathBuf;

/// Errors produced outside the keystroke pipeline itself.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// A single token string that is not part of the keypad vocabulary.
    #[error("unknown token {0:?}")]
    UnknownToken(String),

    /// An input line with a character that cannot start any token.
    #[error("unexpected {found:?} at column {position}")]
    Tokenize { position: usize, found: char },

    /// A display string that does not hold a number.
    #[error("not a number: {0:?}")]
    InvalidNumber(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
