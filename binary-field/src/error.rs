//! Error types.

use core::fmt;

/// Errors raised by [`crate::BinaryFieldElement`] operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The requested extension degree `m` is not one of the supported
    /// Koblitz degrees (163, 233, 283, 409, 571).
    UnsupportedDegree(usize),

    /// Attempted inversion of the zero element; zero has no multiplicative
    /// inverse in `F_{2^m}`.
    InverseOfZero,

    /// A mismatched-degree operand was passed to a binary operation.
    DegreeMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedDegree(m) => write!(f, "unsupported binary field degree m={m}"),
            Error::InverseOfZero => write!(f, "attempted inverse of zero in F_2^m"),
            Error::DegreeMismatch => write!(f, "operands belong to different F_2^m degrees"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for fallible [`crate::BinaryFieldElement`] operations.
pub type Result<T> = core::result::Result<T, Error>;
