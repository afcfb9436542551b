//! Crate custom errors.

use cryptraits_macros::Error;

/// KDF algorithm error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// Hash selector does not name a supported hash function.
    UnsupportedHash,
    /// Requested output length is zero.
    InvalidLength,
    /// Requested output length exceeds `255 * HashLen`.
    LengthTooLong,
}

/// HMAC algorithm errors.
#[derive(Debug, Error, PartialEq)]
pub enum HmacError {
    InvalidLength,
    MacError,
}
