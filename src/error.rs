//! Crate-level error types.

use std::fmt;

/// Errors produced by the knotpick crate.
#[derive(Debug)]
pub enum KnotpickError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// The host document has no element with the expected id.
    MissingContainer(String),
    /// A browser API call failed.
    Web(String),
}

impl fmt::Display for KnotpickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::MissingContainer(id) => {
                write!(f, "no element with id '{id}' in the document")
            }
            Self::Web(msg) => write!(f, "web error: {msg}"),
        }
    }
}

impl std::error::Error for KnotpickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KnotpickError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
