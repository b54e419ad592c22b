//! Timelock encryption to rounds of the [drand](https://drand.love) randomness beacon, using
//! Boneh-Franklin identity-based encryption on the BLS12-381 pairing-friendly elliptic curve.
//!
//! A message is encrypted to the identity of a future beacon round using only the beacon's
//! public key. Once the round has passed, the beacon publishes a threshold BLS signature on that
//! identity, which is exactly the private key needed to decrypt. The construction follows
//! * "[Identity-Based Encryption from the Weil Pairing](https://crypto.stanford.edu/~dabo/papers/bfibe.pdf)" (Boneh, Franklin),
//!   with CCA security through the Fujisaki-Okamoto transform;
//! * "[tlock: Practical Timelock Encryption from Threshold BLS](https://eprint.iacr.org/2023/189)",
//!   whose hash functions and wire format this crate reproduces bit for bit.
//!
//! Ciphertexts are `U ‖ V ‖ W`: a compressed group element followed by two masks as long as the
//! plaintext. Plaintexts are at most 32 bytes, which is enough for a symmetric key or a small
//! vote.
//!
//! The crate contains the following beacon schemes (see [the scheme module](`crate::scheme`)):
//! * quicknet (`bls-unchained-g1-rfc9380`, the default drand network),
//! * fastnet (`bls-unchained-on-g1`),
//! * `pedersen-bls-unchained` (public key on G1).
//!
//! # Examples
//!
//! ```ignore
//! use tlock_ibe::scheme::Quicknet;
//! use tlock_ibe::tlock::Timelock;
//!
//! let mut rng = rand::thread_rng();
//!
//! // The beacon's public key, as found in its chain info.
//! let tlock = Timelock::<Quicknet>::new(&public_key_bytes)?;
//!
//! // Encrypt to round 128 with only the public key.
//! let ct = tlock.encrypt(128, b"Hello, world!", &mut rng)?;
//! let wire = ct.to_bytes();
//!
//! // Once the beacon publishes the signature for round 128, anyone can decrypt.
//! let m = tlock.decrypt(&round_128_signature, &ct)?;
//! assert_eq!(m, b"Hello, world!");
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[cfg(test)]
#[macro_use]
mod test_macros;

#[macro_use]
mod macros;

mod util;

pub mod beacon;
pub mod ciphertext;
pub mod curve;
pub mod error;
pub mod ibe;
pub mod identity;
pub mod scheme;
pub mod tlock;

pub use ciphertext::{Ciphertext, HexCiphertext};
pub use error::{CodecError, Error, Malformed, PointError};
pub use ibe::{Config, IntegrityCheck};
pub use identity::Identity;
pub use tlock::Timelock;

/// Artifacts of the system that can be compressed should implement this trait.
///
/// Decompression is the validation boundary for untrusted input: it must reject encodings that
/// are not canonical, not on the curve, or not in the prime-order subgroup.
pub trait Compress: Sized + Copy {
    const OUTPUT_SIZE: usize;
    type Output: Sized
        + Copy
        + Clone
        + AsRef<[u8]>
        + core::fmt::Debug
        + PartialEq
        + Eq
        + Send
        + Sync;

    /// Compresses this artifact to a short serialized byte representation.
    fn to_bytes(&self) -> Self::Output;

    /// Decompresses a serialized artifact.
    fn from_bytes(output: &Self::Output) -> Result<Self, PointError>;

    /// Copies a slice of exactly [`Self::OUTPUT_SIZE`] bytes into an [`Self::Output`].
    fn output_from_slice(bytes: &[u8]) -> Result<Self::Output, PointError>;

    /// Decompresses a serialized artifact from a slice of any length.
    fn from_slice(bytes: &[u8]) -> Result<Self, PointError> {
        Self::from_bytes(&Self::output_from_slice(bytes)?)
    }
}

/// Trait that is used to derive identities.
pub trait Derive: Sized {
    /// Derive an identity from a byte slice.
    fn derive(b: &[u8]) -> Self;

    /// Derive an identity from a string.
    /// Internally uses UTF-8 encoding `as_bytes()`.
    fn derive_str(s: &str) -> Self {
        Self::derive(s.as_bytes())
    }
}
