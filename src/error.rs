//! Error types for jumbomoji.

use std::fmt;
use std::io;

/// Result type alias for jumbomoji operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for jumbomoji operations.
///
/// Classification itself never fails; these cover constructing codepoints
/// from untrusted input and the command-line front end.
#[derive(Debug)]
pub enum Error {
    /// I/O error while reading input.
    Io(io::Error),
    /// Malformed codepoint text (e.g., missing `U+` prefix, non-hex digits).
    InvalidCodepoint(String),
    /// Scalar value is a surrogate or lies above U+10FFFF.
    CodepointOutOfRange(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidCodepoint(s) => write!(f, "invalid codepoint format: {s:?}"),
            Self::CodepointOutOfRange(value) => {
                write!(f, "codepoint out of range: 0x{value:X}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
