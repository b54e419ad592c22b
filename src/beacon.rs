//! Typed views of the data a drand beacon publishes.
//!
//! Fetching is left to the caller: these are the `/info` and `/public/{round}` JSON documents of
//! the HTTP API, deserializable with the `serde` feature. Hex fields are accepted with or
//! without a `0x` prefix.

use crate::error::{CodecError, Error};
use crate::scheme::Scheme;
use crate::util::from_hex;
use alloc::string::String;
use alloc::vec::Vec;
use tracing::debug;

/// Chain hash of drand quicknet, the network timelock ciphertexts are usually made for.
pub const QUICKNET_CHAIN_HASH: &str =
    "52db9ba70e0cc0f6eaf7803dd07447a1f5477735fd3f661792ba94600c84e971";

/// Chain information, the `/info` document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainInfo {
    /// Compressed group public key, hex.
    pub public_key: String,
    /// Seconds between rounds.
    pub period: u64,
    /// Unix time of round 1.
    pub genesis_time: u64,
    /// Chain hash, hex.
    pub hash: String,
    #[cfg_attr(feature = "serde", serde(rename = "groupHash", default))]
    pub group_hash: String,
    #[cfg_attr(feature = "serde", serde(rename = "schemeID"))]
    pub scheme_id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: Metadata,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    #[cfg_attr(feature = "serde", serde(rename = "beaconID", default))]
    pub beacon_id: String,
}

/// A published round, the `/public/{round}` document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundData {
    pub round: u64,
    /// SHA-256 of the signature, hex.
    #[cfg_attr(feature = "serde", serde(default))]
    pub randomness: String,
    /// Compressed round signature, hex. This is the decryption key for the round.
    pub signature: String,
}

impl ChainInfo {
    pub fn public_key_bytes(&self) -> Result<Vec<u8>, CodecError> {
        from_hex(&self.public_key)
    }

    /// Checks that the chain signs with the scheme `S`.
    pub fn check_scheme<S: Scheme>(&self) -> Result<(), Error> {
        if self.scheme_id != S::IDENTIFIER {
            debug!(expected = S::IDENTIFIER, actual = %self.scheme_id, "scheme mismatch");
            return Err(Error::SchemeMismatch {
                expected: S::IDENTIFIER,
                actual: self.scheme_id.clone(),
            });
        }

        Ok(())
    }

    /// The round current at `unix_time`; times before genesis map to round 1.
    pub fn round_at(&self, unix_time: u64) -> u64 {
        if unix_time < self.genesis_time || self.period == 0 {
            return 1;
        }

        (unix_time - self.genesis_time) / self.period + 1
    }

    /// Unix time at which `round` is published.
    pub fn time_of_round(&self, round: u64) -> u64 {
        let elapsed = round.saturating_sub(1).saturating_mul(self.period);
        self.genesis_time.saturating_add(elapsed)
    }

    /// Fails with [`Error::RoundNotReached`] if `round` is still in the future at `unix_time`.
    pub fn ensure_reached(&self, round: u64, unix_time: u64) -> Result<(), Error> {
        let current = self.round_at(unix_time);
        if unix_time < self.genesis_time || round > current {
            return Err(Error::RoundNotReached { round, current });
        }

        Ok(())
    }
}

impl RoundData {
    pub fn signature_bytes(&self) -> Result<Vec<u8>, CodecError> {
        from_hex(&self.signature)
    }
}
