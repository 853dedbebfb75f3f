// cardform/src/error.rs
//! Advisory field errors and host-boundary errors.

use thiserror::Error;

/// Advisory, field-scoped validation failure. These live in an `ErrorMap`
/// as data; they are never returned as `Err`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    /// Empty after trimming.
    #[error("Can't be blank")]
    Blank,

    /// Wrong character pattern or length.
    #[error("Wrong format, numbers only")]
    FormatMismatch,
}

impl FieldError {
    /// User-facing message for this failure kind.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Blank => crate::constants::MSG_BLANK,
            FieldError::FormatMismatch => crate::constants::MSG_FORMAT,
        }
    }
}

/// Errors raised at the host boundary (string keys, text commands, output).
#[derive(Error, Debug)]
pub enum Error {
    /// Field key not one of the five inputs.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Error slot key not recognized.
    #[error("unknown error key: {0}")]
    UnknownErrorKey(String),

    /// Line command not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Renderer output failed.
    #[error("render output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
