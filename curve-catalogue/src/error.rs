//! Error types.

use alloc::string::String;
use core::fmt;

/// Errors raised while resolving or constructing named-curve parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// No curve is registered under the given name.
    UnknownCurve(String),

    /// A curve name was recognized but resolved against the wrong family
    /// (e.g. asking [`crate::prime::PrimeCurveParams`] for `K-163`).
    WrongFamily,

    /// A hardcoded domain-parameter literal failed to parse. This
    /// indicates a bug in this crate, not caller error.
    Malformed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCurve(name) => write!(f, "unknown curve name: {name}"),
            Error::WrongFamily => write!(f, "curve name resolved against the wrong family"),
            Error::Malformed => write!(f, "malformed built-in curve parameter literal"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<bigint::Error> for Error {
    fn from(_: bigint::Error) -> Self {
        Error::Malformed
    }
}

impl From<binary_field::Error> for Error {
    fn from(_: binary_field::Error) -> Self {
        Error::Malformed
    }
}

/// Result type alias for fallible curve-catalogue operations.
pub type Result<T> = core::result::Result<T, Error>;
