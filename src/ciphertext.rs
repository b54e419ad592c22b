//! Ciphertexts and their encodings.
//!
//! The wire form is the plain concatenation `U ‖ V ‖ W` without length prefixes. `U` has a fixed
//! size for a given pairing convention (96 bytes when public keys are on G2), while `V` and `W`
//! are as long as the plaintext, so the serialized size is `U_BYTES + 2 · len(plaintext)`.
//!
//! Proof systems and contracts consume the three components separately, each as `0x`-prefixed
//! lowercase hex; [`HexCiphertext`] is that form.

use crate::curve::PairingEngine;
use crate::error::{CodecError, Error, Malformed};
use crate::util::{from_hex, to_prefixed_hex};
use crate::Compress;
use alloc::string::String;
use alloc::vec::Vec;

/// Compressed encapsulation `U` for a pairing convention.
pub type Encapsulation<E> = <<E as PairingEngine>::Public as Compress>::Output;

/// Ciphertext `(U, V, W)`.
///
/// `U` is kept in compressed form: it is only decoded, and validated, when decrypting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext<E: PairingEngine> {
    /// `U = r · generator`, the encapsulation.
    pub u: Encapsulation<E>,
    /// `V = σ ⊕ H2(e(r · pk, Q))`, the masked blinding value.
    pub v: Vec<u8>,
    /// `W = m ⊕ H4(σ)`, the masked message.
    pub w: Vec<u8>,
}

impl<E: PairingEngine> Ciphertext<E> {
    /// Size of `U` in bytes.
    pub const U_BYTES: usize = <E::Public as Compress>::OUTPUT_SIZE;

    /// Size of the serialized ciphertext for a plaintext of `len` bytes.
    pub const fn size_for(len: usize) -> usize {
        Self::U_BYTES + 2 * len
    }

    /// Size of this ciphertext when serialized.
    pub fn size(&self) -> usize {
        Self::U_BYTES + self.v.len() + self.w.len()
    }

    /// Serializes to `U ‖ V ‖ W`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.size());
        buf.extend_from_slice(self.u.as_ref());
        buf.extend_from_slice(&self.v);
        buf.extend_from_slice(&self.w);

        buf
    }

    /// Deserializes `U ‖ V ‖ W`.
    ///
    /// Without `v_len`, `V` and `W` are assumed to split the bytes after `U` evenly, which holds
    /// for every ciphertext this crate produces. `w_len` defaults to `v_len`. When lengths are
    /// given the input must have exactly the implied size.
    pub fn from_bytes(
        bytes: &[u8],
        v_len: Option<usize>,
        w_len: Option<usize>,
    ) -> Result<Self, CodecError> {
        let u_bytes = Self::U_BYTES;
        if bytes.len() < u_bytes {
            return Err(CodecError::TooShort {
                needed: u_bytes,
                actual: bytes.len(),
            });
        }

        let (u, rest) = bytes.split_at(u_bytes);

        let v_len = match v_len {
            Some(v_len) => v_len,
            None if rest.len() % 2 == 0 => rest.len() / 2,
            None => {
                return Err(CodecError::AmbiguousLength {
                    remaining: rest.len(),
                })
            }
        };
        let w_len = w_len.unwrap_or(v_len);

        let needed = v_len.saturating_add(w_len);
        if rest.len() < needed {
            return Err(CodecError::TooShort {
                needed: u_bytes.saturating_add(needed),
                actual: bytes.len(),
            });
        }
        if rest.len() > needed {
            return Err(CodecError::TrailingBytes {
                extra: rest.len() - needed,
            });
        }

        let u = <E::Public as Compress>::output_from_slice(u).map_err(|_| {
            CodecError::TooShort {
                needed: u_bytes,
                actual: bytes.len(),
            }
        })?;
        let (v, w) = rest.split_at(v_len);

        Ok(Ciphertext {
            u,
            v: v.to_vec(),
            w: w.to_vec(),
        })
    }

    /// Renders every component as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> HexCiphertext {
        HexCiphertext {
            u: to_prefixed_hex(self.u.as_ref()),
            v: to_prefixed_hex(&self.v),
            w: to_prefixed_hex(&self.w),
        }
    }
}

/// A ciphertext with hex encoded components, as stored by contracts and proof systems.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCiphertext {
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    pub u: String,
    #[cfg_attr(feature = "serde", serde(rename = "V"))]
    pub v: String,
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    pub w: String,
}

impl<E: PairingEngine> From<&Ciphertext<E>> for HexCiphertext {
    fn from(ct: &Ciphertext<E>) -> Self {
        ct.to_hex()
    }
}

impl<E: PairingEngine> TryFrom<&HexCiphertext> for Ciphertext<E> {
    type Error = Error;

    fn try_from(hex: &HexCiphertext) -> Result<Self, Error> {
        let u = from_hex(&hex.u)?;
        let u = <E::Public as Compress>::output_from_slice(&u)
            .map_err(|e| Error::MalformedCiphertext(Malformed::U(e)))?;

        Ok(Ciphertext {
            u,
            v: from_hex(&hex.v)?,
            w: from_hex(&hex.w)?,
        })
    }
}
