//! Error types.

use core::fmt;

/// Errors raised by [`crate::AffinePoint`] operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// `P + Q` was requested with `Q == -P`; the mathematical result is the
    /// point at infinity, which this crate does not materialize.
    PointsNotAddable,

    /// `2·P` was requested with `P`'s `y`-coordinate `== 0`; the
    /// mathematical result is the point at infinity.
    DoublingAtInfinity,

    /// An underlying big-integer operation failed. Reachable only if `p`
    /// is not actually prime, which is a caller bug, not a runtime
    /// condition this crate expects to hit.
    Integer(bigint::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PointsNotAddable => {
                write!(f, "sum of the two points is the point at infinity")
            }
            Error::DoublingAtInfinity => {
                write!(f, "doubling this point yields the point at infinity")
            }
            Error::Integer(e) => write!(f, "integer arithmetic error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<bigint::Error> for Error {
    fn from(e: bigint::Error) -> Self {
        Error::Integer(e)
    }
}

/// Result type alias for fallible [`crate::AffinePoint`] operations.
pub type Result<T> = core::result::Result<T, Error>;
