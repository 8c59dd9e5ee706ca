//! Error types.

use core::fmt;

/// Errors raised by [`crate::ProjectivePoint`] operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Normalization was attempted on a point with `Z == 0`, which has no
    /// affine representative.
    ZAtInfinity,

    /// `P + Q` was requested with `Q == P`; use
    /// [`crate::ProjectivePoint::double`] instead.
    PointsNotAddable,

    /// An underlying `F_{2^m}` operation failed.
    Field(binary_field::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZAtInfinity => write!(f, "cannot normalize a point with Z == 0"),
            Error::PointsNotAddable => write!(f, "the two points are equal: use double instead"),
            Error::Field(e) => write!(f, "binary field arithmetic error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<binary_field::Error> for Error {
    fn from(e: binary_field::Error) -> Self {
        Error::Field(e)
    }
}

/// Result type alias for fallible [`crate::ProjectivePoint`] operations.
pub type Result<T> = core::result::Result<T, Error>;
