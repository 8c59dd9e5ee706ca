//! Error types.

use core::fmt;

/// Errors raised by the [`crate::Integer`] facade.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A decimal or hexadecimal string did not parse as a non-negative
    /// integer.
    Parse,

    /// The inverse of zero was requested. Zero has no multiplicative
    /// inverse modulo any prime.
    InverseOfZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse => write!(f, "malformed integer literal"),
            Error::InverseOfZero => write!(f, "attempted modular inverse of zero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for fallible [`crate::Integer`] operations.
pub type Result<T> = core::result::Result<T, Error>;
