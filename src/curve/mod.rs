//! Group arithmetic on BLS12-381.
//!
//! The IBE scheme only needs a small capability set from the curve: validated (de)compression,
//! scalar multiplication, addition, hashing to the curve and the pairing. [`Point`] and
//! [`PairingEngine`] capture that set, so that the scheme code never touches the backend
//! directly. The backend is arkworks' `ark-bls12-381`, whose scalar multiplication is variable
//! time (see [`Point::mul`]).
//!
//! Two pairing conventions exist among drand networks:
//! * [`MinSig`]: signatures (and hashed identities) in G1, public keys in G2,
//! * [`MinPk`]: public keys in G1, signatures (and hashed identities) in G2.

pub mod hash;

use crate::util::{G1_BYTES, G2_BYTES, GT_BYTES};
use crate::Compress;
use ark_bls12_381::{Bls12_381, G1Affine, G2Affine};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_serialize::CanonicalSerialize;
use core::fmt::Debug;

/// Scalar field of BLS12-381.
pub use ark_bls12_381::Fr as Scalar;

/// A point of one of the source groups.
pub trait Point: Compress + Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Human readable group name.
    const NAME: &'static str;

    /// The canonical generator of the group.
    fn generator() -> Self;

    /// The identity element.
    fn identity() -> Self;

    fn is_identity(&self) -> bool;

    /// Scalar multiplication.
    ///
    /// # Security
    ///
    /// The arkworks backend is not constant time: the running time of this function depends on
    /// the scalar. Encryption multiplies by the secret `r = H3(σ, m)`, and whoever learns `r`
    /// can recover `σ` and then the plaintext. Do not encrypt where an attacker can time
    /// individual encryptions precisely, or implement [`Point`] on a constant-time backend.
    fn mul(&self, scalar: &Scalar) -> Self;

    /// Group addition.
    fn add(&self, rhs: &Self) -> Self;

    /// Hashes a message to the group, see [`hash`].
    fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Self;
}

/// A point in G1, 48 bytes compressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1(G1Affine);

/// A point in G2, 96 bytes compressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2(G2Affine);

impl_point!(G1, G1Affine, G1_BYTES, hash::hash_to_g1);
impl_point!(G2, G2Affine, G2_BYTES, hash::hash_to_g2);

/// An element of the target group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt(PairingOutput<Bls12_381>);

impl Gt {
    /// Serializes to the 576-byte form used by the drand implementations: the twelve base field
    /// coefficients from the highest tower position down, each big-endian.
    ///
    /// arkworks writes the same coefficients lowest first and little-endian, so the drand form
    /// is its exact byte reversal.
    pub fn to_bytes(&self) -> [u8; GT_BYTES] {
        let mut buf = [0u8; GT_BYTES];
        (self.0)
            .0
            .serialize_uncompressed(&mut buf[..])
            .expect("target group elements fill the buffer exactly");
        buf.reverse();

        buf
    }
}

/// Pairing convention: which group holds the public key and which one the signatures.
///
/// Public keys, and the encapsulation `U` of a ciphertext, live in [`Self::Public`]. Round
/// signatures, and the hashed round identities they sign, live in [`Self::Signature`].
pub trait PairingEngine:
    Clone + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    type Public: Point;
    type Signature: Point;

    /// `e(public, signature)`, with the arguments put in G1 × G2 order.
    fn pairing(public: &Self::Public, signature: &Self::Signature) -> Gt;
}

/// Short signatures: public keys in G2, signatures in G1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinSig;

/// Short public keys: public keys in G1, signatures in G2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinPk;

impl PairingEngine for MinSig {
    type Public = G2;
    type Signature = G1;

    fn pairing(public: &G2, signature: &G1) -> Gt {
        Gt(Bls12_381::pairing(signature.0, public.0))
    }
}

impl PairingEngine for MinPk {
    type Public = G1;
    type Signature = G2;

    fn pairing(public: &G1, signature: &G2) -> Gt {
        Gt(Bls12_381::pairing(public.0, signature.0))
    }
}
