//! Round identities.
//!
//! drand signs the SHA-256 digest of the big-endian round number for every unchained scheme,
//! so that digest is the identity a timelock ciphertext is encrypted to. Any deviation from this
//! layout yields ciphertexts that the beacon's signatures cannot open.

use crate::util::sha256;
use crate::Derive;
use byteorder::{BigEndian, ByteOrder};

/// Size of an identity in bytes.
pub const IDENTITY_BYTES: usize = 32;

/// Identity a ciphertext is encrypted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity(pub [u8; IDENTITY_BYTES]);

impl Identity {
    /// Identity of a beacon round: `SHA-256(round as u64 big-endian)`.
    pub fn from_round(round: u64) -> Self {
        let mut buf = [0u8; 8];
        BigEndian::write_u64(&mut buf, round);

        Self::derive(&buf)
    }
}

impl Derive for Identity {
    fn derive(b: &[u8]) -> Self {
        Identity(sha256(b))
    }
}

impl AsRef<[u8]> for Identity {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<u64> for Identity {
    fn from(round: u64) -> Self {
        Self::from_round(round)
    }
}
