//! Boneh-Franklin identity-based encryption with the Fujisaki-Okamoto transform, as used by
//! drand's tlock.
//! * From: "[Identity-Based Encryption from the Weil Pairing](https://crypto.stanford.edu/~dabo/papers/bfibe.pdf)"
//!
//! CCA security due to a general approach by Fujisaki and Okamoto: the encryption randomness is
//! derived from the blinding value and the message, so decryption can recompute `U` and reject
//! anything that was not honestly produced.
//! * From: "[Secure Integration of Asymmetric and Symmetric Encryption Schemes](https://link.springer.com/article/10.1007/s00145-011-9114-1)"
//!
//! Symmetric primitives H2, H3 and H4 instantiated using SHA-256 with the `IBE-H*` prefixes of
//! drand's tlock, so ciphertexts interoperate with tlock, tlock-js and tlock-rs.

use crate::ciphertext::Ciphertext;
use crate::curve::{PairingEngine, Point, Scalar};
use crate::error::{Error, Malformed, PointError};
use crate::identity::Identity;
use crate::scheme::{PublicKey, Scheme, Signature};
use crate::util::{sha256_concat, xor, GT_BYTES, HASH_BYTES};
use crate::Compress;
use alloc::vec;
use alloc::vec::Vec;
use arrayref::array_refs;
use ark_ff::{BigInt, PrimeField};
use byteorder::{BigEndian, ByteOrder};
use core::marker::PhantomData;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::debug;

/// Maximum plaintext size in bytes.
///
/// The masks are single SHA-256 outputs, so longer messages would be padded with
/// unmasked bytes.
pub const MAX_MSG_BYTES: usize = HASH_BYTES;

const H2_TAG: &[u8] = b"IBE-H2";
const H3_TAG: &[u8] = b"IBE-H3";
const H4_TAG: &[u8] = b"IBE-H4";

/// Whether decryption re-encrypts the recovered message and compares with `U`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegrityCheck {
    /// Recompute `U = H3(σ, m) · generator` and reject the ciphertext if it differs.
    ///
    /// This is the Fujisaki-Okamoto check: with it the scheme is IND-ID-CCA secure in the
    /// random oracle model, and decrypting with the signature of another round fails instead of
    /// returning garbage.
    #[default]
    Enforced,

    /// Return `W ⊕ H4(σ)` without any check.
    ///
    /// The scheme is then only IND-ID-CPA secure: a modified ciphertext decrypts to a related
    /// message, and a wrong signature yields random looking bytes rather than an error.
    Skipped,
}

/// Policies of the encryption engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub integrity: IntegrityCheck,
    /// Accept zero-length plaintexts when encrypting. Off by default, since an empty ciphertext
    /// reveals its content by its size.
    pub allow_empty: bool,
}

impl Config {
    pub const fn new() -> Self {
        Config {
            integrity: IntegrityCheck::Enforced,
            allow_empty: false,
        }
    }

    pub const fn with_integrity(self, integrity: IntegrityCheck) -> Self {
        Config { integrity, ..self }
    }

    pub const fn with_allow_empty(self, allow_empty: bool) -> Self {
        Config {
            allow_empty,
            ..self
        }
    }
}

/// The encryption engine for a beacon scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ibe<S: Scheme> {
    config: Config,
    _scheme: PhantomData<S>,
}

impl<S: Scheme> Ibe<S> {
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub const fn with_config(config: Config) -> Self {
        Ibe {
            config,
            _scheme: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Encrypts `msg` to `id` under a compressed public key.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        pk: &[u8],
        id: &Identity,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Ciphertext<S::Engine>, Error> {
        let pk = decode_public_key::<S>(pk)?;
        self.encrypt_with_key(&pk, id, msg, rng)
    }

    /// Encrypts `msg` to `id` under an already validated public key.
    pub fn encrypt_with_key<R: RngCore + CryptoRng>(
        &self,
        pk: &PublicKey<S>,
        id: &Identity,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Ciphertext<S::Engine>, Error> {
        if msg.is_empty() && !self.config.allow_empty {
            debug!("rejecting empty plaintext");
            return Err(Error::EmptyPlaintext);
        }
        if msg.len() > MAX_MSG_BYTES {
            debug!(len = msg.len(), "rejecting oversized plaintext");
            return Err(Error::MessageTooLong {
                len: msg.len(),
                max: MAX_MSG_BYTES,
            });
        }

        let mut sigma = vec![0u8; msg.len()];
        rng.fill_bytes(&mut sigma);

        encrypt_with_sigma::<S>(pk, id, msg, &sigma)
    }

    /// Decrypts a ciphertext with the compressed round signature for its identity.
    pub fn decrypt(&self, sig: &[u8], ct: &Ciphertext<S::Engine>) -> Result<Vec<u8>, Error> {
        let sig = decode_signature::<S>(sig)?;
        self.decrypt_with_key(&sig, ct)
    }

    /// Decrypts a ciphertext with an already validated round signature.
    ///
    /// This function returns [`Error::IntegrityCheckFailed`] when the integrity check is
    /// enforced and an illegitimate ciphertext is encountered (explicit rejection).
    pub fn decrypt_with_key(
        &self,
        sig: &Signature<S>,
        ct: &Ciphertext<S::Engine>,
    ) -> Result<Vec<u8>, Error> {
        let len = ct.v.len();
        if len != ct.w.len() {
            debug!(v = len, w = ct.w.len(), "rejecting ciphertext with unequal masks");
            return Err(Error::MalformedCiphertext(Malformed::MaskLengthMismatch {
                v: len,
                w: ct.w.len(),
            }));
        }
        if len > MAX_MSG_BYTES {
            debug!(len, "rejecting ciphertext with oversized masks");
            return Err(Error::MalformedCiphertext(Malformed::MaskTooLong {
                len,
                max: MAX_MSG_BYTES,
            }));
        }

        let u = decode_point::<PublicKey<S>>(ct.u.as_ref())
            .map_err(|e| Error::MalformedCiphertext(Malformed::U(e)))?;

        let gt = S::Engine::pairing(&u, sig);
        let sigma = xor(&ct.v, &h2(&gt.to_bytes(), len));
        let m = xor(&ct.w, &h4(&sigma, len));

        if self.config.integrity == IntegrityCheck::Enforced {
            let r = h3(&sigma, &m)?;
            let u2 = PublicKey::<S>::generator().mul(&r).to_bytes();

            if !bool::from(u2.as_ref().ct_eq(ct.u.as_ref())) {
                debug!("recomputed encapsulation differs");
                return Err(Error::IntegrityCheckFailed);
            }
        }

        Ok(m)
    }
}

/// Encryption with caller supplied blinding value; `sigma` must be as long as `msg`.
pub(crate) fn encrypt_with_sigma<S: Scheme>(
    pk: &PublicKey<S>,
    id: &Identity,
    msg: &[u8],
    sigma: &[u8],
) -> Result<Ciphertext<S::Engine>, Error> {
    debug_assert_eq!(msg.len(), sigma.len());

    let q = Signature::<S>::hash_to_curve(id.as_ref(), S::DST);
    let r = h3(sigma, msg)?;

    let u = PublicKey::<S>::generator().mul(&r);

    // e(r · pk, Q) = e(pk, Q)^r, which the holder of the round signature recovers as e(U, sig).
    let gt = S::Engine::pairing(&pk.mul(&r), &q);

    Ok(Ciphertext {
        u: u.to_bytes(),
        v: xor(sigma, &h2(&gt.to_bytes(), msg.len())),
        w: xor(msg, &h4(sigma, msg.len())),
    })
}

/// Decompresses a point that may not be the identity.
fn decode_point<P: Point>(bytes: &[u8]) -> Result<P, PointError> {
    let p = P::from_slice(bytes)?;
    if p.is_identity() {
        return Err(PointError::Identity);
    }

    Ok(p)
}

/// Decompresses and validates a beacon public key.
pub fn decode_public_key<S: Scheme>(bytes: &[u8]) -> Result<PublicKey<S>, Error> {
    decode_point(bytes).map_err(|e| {
        debug!(error = %e, "invalid public key");
        Error::InvalidPublicKey(e)
    })
}

/// Decompresses and validates a round signature.
pub fn decode_signature<S: Scheme>(bytes: &[u8]) -> Result<Signature<S>, Error> {
    decode_point(bytes).map_err(|e| {
        debug!(error = %e, "invalid round signature");
        Error::MalformedCiphertext(Malformed::Signature(e))
    })
}

/// `H2(g, n) = SHA-256("IBE-H2" ‖ g)[..n]`.
fn h2(gt: &[u8; GT_BYTES], n: usize) -> Vec<u8> {
    sha256_concat(&[H2_TAG, &gt[..]])[..n].to_vec()
}

/// `H3(σ, m)`: a scalar, by rejection sampling over SHA-256 outputs with the top bit cleared.
fn h3(sigma: &[u8], msg: &[u8]) -> Result<Scalar, Error> {
    let h = sha256_concat(&[H3_TAG, sigma, msg]);

    for i in 1..u16::MAX {
        let mut d = sha256_concat(&[&i.to_le_bytes()[..], &h[..]]);
        d[0] >>= 1;

        if let Some(r) = scalar_from_be(&d) {
            return Ok(r);
        }
    }

    debug!("exhausted scalar derivation attempts");
    Err(Error::ScalarDerivation)
}

/// `H4(σ, n) = SHA-256("IBE-H4" ‖ σ)[..n]`.
fn h4(sigma: &[u8], n: usize) -> Vec<u8> {
    sha256_concat(&[H4_TAG, sigma])[..n].to_vec()
}

/// Reads 32 big-endian bytes as a scalar, if they are below the modulus.
fn scalar_from_be(bytes: &[u8; 32]) -> Option<Scalar> {
    let (hi, b, c, lo) = array_refs![bytes, 8, 8, 8, 8];
    let limbs = [
        BigEndian::read_u64(lo),
        BigEndian::read_u64(c),
        BigEndian::read_u64(b),
        BigEndian::read_u64(hi),
    ];

    Scalar::from_bigint(BigInt::new(limbs))
}
