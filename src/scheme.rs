//! drand beacon schemes usable for timelock encryption.
//!
//! A scheme fixes the pairing convention and the domain separation tag that the beacon uses to
//! hash round identities onto the curve. Both must match the beacon exactly, otherwise its
//! signatures do not open the ciphertexts.
//!
//! Chained schemes (`pedersen-bls-chained`) sign the previous signature together with the round,
//! so their signatures cannot be predicted from the round alone and they have no implementation
//! here.

use crate::curve::hash::{DST_G1, DST_G2};
use crate::curve::{MinPk, MinSig, PairingEngine};
use core::fmt::Debug;

/// A beacon scheme.
pub trait Scheme: Clone + Copy + Debug + Default + Send + Sync + 'static {
    /// Scheme identifier, the `schemeID` field of the beacon's chain info.
    const IDENTIFIER: &'static str;

    /// Domain separation tag for hashing round identities to the signature group.
    const DST: &'static [u8];

    /// Pairing convention.
    type Engine: PairingEngine;
}

/// Public key of a scheme.
pub type PublicKey<S> = <<S as Scheme>::Engine as PairingEngine>::Public;

/// Round signature of a scheme.
pub type Signature<S> = <<S as Scheme>::Engine as PairingEngine>::Signature;

/// Unchained signatures on G1 with the RFC 9380 tag (drand quicknet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Quicknet;

/// Unchained signatures on G1 under the tag meant for G2 (drand fastnet).
///
/// Superseded by [`Quicknet`]; kept to open ciphertexts made for the older network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fastnet;

/// Unchained signatures on G2, public key on G1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnchainedOnG2;

impl Scheme for Quicknet {
    const IDENTIFIER: &'static str = "bls-unchained-g1-rfc9380";
    const DST: &'static [u8] = DST_G1;
    type Engine = MinSig;
}

impl Scheme for Fastnet {
    const IDENTIFIER: &'static str = "bls-unchained-on-g1";
    const DST: &'static [u8] = DST_G2;
    type Engine = MinSig;
}

impl Scheme for UnchainedOnG2 {
    const IDENTIFIER: &'static str = "pedersen-bls-unchained";
    const DST: &'static [u8] = DST_G2;
    type Engine = MinPk;
}
