//! The unified error type at the host API boundary.

use std::fmt;

/// Errors raised by [`crate::mul`], [`crate::add`], [`crate::sign`], and
/// [`crate::verify`].
///
/// This folds every component-local error from the inner crates into one
/// taxonomy. New variants may be added without a breaking change.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// A decimal or hex integer parameter was ill-formed.
    Parse,

    /// The curve name did not resolve to any entry in the catalogue.
    UnknownCurve,

    /// A zero inverse, a zero `r`, or a zero `s` was produced where the
    /// algorithm requires a nonzero value.
    Arithmetic,

    /// `verify` was called with `r` or `s` outside `[1, n)`.
    ///
    /// Distinguished from a plain `false` verdict: this is a structural
    /// fault in the inputs, not the outcome of checking a well-formed
    /// signature against the curve equation.
    Precondition,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse => write!(f, "ill-formed decimal or hex integer parameter"),
            Error::UnknownCurve => write!(f, "curve name not in the catalogue"),
            Error::Arithmetic => write!(f, "arithmetic error: zero inverse, or zero r/s"),
            Error::Precondition => write!(f, "verify precondition failed: r or s outside [1, n)"),
        }
    }
}

impl std::error::Error for Error {}

impl From<bigint::Error> for Error {
    fn from(e: bigint::Error) -> Self {
        match e {
            bigint::Error::Parse => Error::Parse,
            bigint::Error::InverseOfZero => Error::Arithmetic,
        }
    }
}

impl From<curve_catalogue::Error> for Error {
    fn from(_: curve_catalogue::Error) -> Self {
        Error::UnknownCurve
    }
}

impl From<prime_points::Error> for Error {
    fn from(_: prime_points::Error) -> Self {
        Error::Arithmetic
    }
}

impl From<binary_points::Error> for Error {
    fn from(_: binary_points::Error) -> Self {
        Error::Arithmetic
    }
}

impl From<binary_field::Error> for Error {
    fn from(_: binary_field::Error) -> Self {
        Error::Arithmetic
    }
}

impl From<ecdsa_core::Error> for Error {
    fn from(e: ecdsa_core::Error) -> Self {
        match e {
            ecdsa_core::Error::ZeroR | ecdsa_core::Error::ZeroS => Error::Arithmetic,
            ecdsa_core::Error::MalformedDigest => Error::Parse,
            ecdsa_core::Error::Precondition => Error::Precondition,
            ecdsa_core::Error::Curve(_) => Error::UnknownCurve,
            ecdsa_core::Error::Prime(_) | ecdsa_core::Error::Binary(_) | ecdsa_core::Error::Integer(_) => {
                Error::Arithmetic
            }
        }
    }
}

/// Result type alias for fallible host-boundary operations.
pub type Result<T> = core::result::Result<T, Error>;
