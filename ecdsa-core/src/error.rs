//! Error types.

use core::fmt;

/// Errors raised by [`crate::sign`] and [`crate::verify`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// `sign` produced `r == 0`; the caller should retry with a fresh
    /// nonce `k`.
    ZeroR,

    /// `sign` produced `s == 0`; the caller should retry with a fresh
    /// nonce `k`.
    ZeroS,

    /// A curve name did not resolve, or resolved to the wrong family.
    Curve(curve_catalogue::Error),

    /// A prime-curve point operation failed.
    Prime(prime_points::Error),

    /// A binary-curve point operation failed.
    Binary(binary_points::Error),

    /// An underlying big-integer operation failed.
    Integer(bigint::Error),

    /// A digest hex string was malformed.
    MalformedDigest,

    /// `verify` was called with `r` or `s` outside `1 <= r, s < n`.
    Precondition,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroR => write!(f, "signing produced r == 0; retry with a fresh nonce"),
            Error::ZeroS => write!(f, "signing produced s == 0; retry with a fresh nonce"),
            Error::Curve(e) => write!(f, "curve resolution error: {e}"),
            Error::Prime(e) => write!(f, "prime-curve point arithmetic error: {e}"),
            Error::Binary(e) => write!(f, "binary-curve point arithmetic error: {e}"),
            Error::Integer(e) => write!(f, "integer arithmetic error: {e}"),
            Error::MalformedDigest => write!(f, "malformed digest hex string"),
            Error::Precondition => write!(f, "verify precondition failed: r or s outside [1, n)"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<curve_catalogue::Error> for Error {
    fn from(e: curve_catalogue::Error) -> Self {
        Error::Curve(e)
    }
}

impl From<prime_points::Error> for Error {
    fn from(e: prime_points::Error) -> Self {
        Error::Prime(e)
    }
}

impl From<binary_points::Error> for Error {
    fn from(e: binary_points::Error) -> Self {
        Error::Binary(e)
    }
}

impl From<bigint::Error> for Error {
    fn from(e: bigint::Error) -> Self {
        Error::Integer(e)
    }
}

/// Result type alias for fallible ECDSA operations.
pub type Result<T> = core::result::Result<T, Error>;
