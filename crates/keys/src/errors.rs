//! Error types for key handling, point recovery and the multikey codec.

use thiserror::Error;

/// Errors raised while recovering a curve point from its x-coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointError {
    /// The x-coordinate is not 32 bytes, is zero, or is not below the field prime.
    #[error("x-coordinate is out of range")]
    OutOfRange,

    /// `x^3 + 7` has no square root in the field, so no point has this x-coordinate.
    #[error("x-coordinate is not on the curve")]
    NotOnCurve,
}

/// Errors raised while constructing or using key objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// The input had the wrong shape (length, prefix byte, missing keys).
    #[error("invalid key input: {0}")]
    Constructor(String),

    /// The input had the right shape but its value is outside the valid range.
    #[error("key value out of range: {0}")]
    Range(String),

    /// The curve backend did not produce a valid compressed point.
    #[error("public key derivation failed: {0}")]
    Derivation(String),

    /// A private key was requested from a key pair that only holds a public key.
    #[error("private key is not available")]
    Unavailable,

    /// Point recovery failed.
    #[error("point recovery failed: {0}")]
    Point(#[from] PointError),
}

/// Errors raised by the multikey codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MultikeyError {
    /// The key could not be encoded.
    #[error("multikey encode failed: {0}")]
    Encode(String),

    /// The string is not a well-formed multikey.
    #[error("multikey decode failed: {0}")]
    Decode(String),

    /// The decoded key material is not a valid public key.
    #[error(transparent)]
    Key(#[from] KeyError),
}
