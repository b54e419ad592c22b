//! Error types for timelock encryption.
//!
//! Every failure is a deterministic function of the input: retrying with the same input fails
//! the same way. [`Error::IntegrityCheckFailed`] is the only variant that signals tampering (or a
//! signature for the wrong round); all others report badly formed input.

use thiserror::Error;

/// Reasons why a byte string is not an acceptable group element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PointError {
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("bytes do not encode a point on the curve")]
    InvalidEncoding,

    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,

    #[error("point is the identity element")]
    Identity,
}

/// Failures of the ciphertext codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("ciphertext of {actual} bytes is shorter than the {needed} bytes required")]
    TooShort { needed: usize, actual: usize },

    #[error("cannot split {remaining} bytes evenly between V and W")]
    AmbiguousLength { remaining: usize },

    #[error("{extra} unexpected bytes after W")]
    TrailingBytes { extra: usize },

    #[error("invalid hex encoding")]
    InvalidHex,
}

/// The part of a ciphertext (or its decryption key) that is malformed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("U: {0}")]
    U(PointError),

    #[error("round signature: {0}")]
    Signature(PointError),

    #[error("V has {v} bytes but W has {w}")]
    MaskLengthMismatch { v: usize, w: usize },

    #[error("masks of {len} bytes exceed the {max}-byte limit")]
    MaskTooLong { len: usize, max: usize },
}

/// Errors returned by encryption, decryption and the beacon adapters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(PointError),

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(Malformed),

    #[error("empty plaintexts are rejected by the configured policy")]
    EmptyPlaintext,

    #[error("plaintext of {len} bytes exceeds the {max}-byte limit")]
    MessageTooLong { len: usize, max: usize },

    /// The recomputed encapsulation did not match `U`.
    ///
    /// Either the ciphertext was modified or the signature belongs to another round.
    #[error("ciphertext failed the integrity check")]
    IntegrityCheckFailed,

    #[error("could not derive a scalar from the blinding value")]
    ScalarDerivation,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("beacon uses scheme {actual:?}, expected {expected:?}")]
    SchemeMismatch {
        expected: &'static str,
        actual: alloc::string::String,
    },

    #[error("signature does not verify for round {round}")]
    InvalidRoundSignature { round: u64 },

    #[error("round {round} has not been reached, current round is {current}")]
    RoundNotReached { round: u64, current: u64 },

    #[error("plaintext is not valid UTF-8")]
    NotUtf8,
}
