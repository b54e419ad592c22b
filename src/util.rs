use crate::error::CodecError;
use alloc::string::String;
use alloc::vec::Vec;
use sha2::{Digest, Sha256};

/// Size of a serialized target group element.
pub(crate) const GT_BYTES: usize = 576;

/// Size of a compressed G1 group element.
pub(crate) const G1_BYTES: usize = 48;

/// Size of a compressed G2 group element.
pub(crate) const G2_BYTES: usize = 96;

/// Output size of the mask hashes, which bounds the message length.
pub(crate) const HASH_BYTES: usize = 32;

pub fn sha256(slice: &[u8]) -> [u8; 32] {
    Sha256::digest(slice).into()
}

/// SHA-256 over the concatenation of `parts`.
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; HASH_BYTES] {
    let mut digest = Sha256::new();
    for part in parts {
        digest.update(part);
    }

    digest.finalize().into()
}

/// XOR of two equally long slices.
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Renders bytes as `0x` followed by lowercase hex.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(2 + 2 * bytes.len());
    s.push_str("0x");
    s.push_str(&hex::encode(bytes));

    s
}

/// Parses hex with or without a `0x` prefix.
pub fn from_hex(s: &str) -> Result<Vec<u8>, CodecError> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(digits).map_err(|_| CodecError::InvalidHex)
}
