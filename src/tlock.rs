//! Timelock encryption to beacon rounds.
//!
//! [`Timelock`] binds the encryption engine to one beacon: its validated public key and its
//! scheme. Ciphertexts do not record the round they are locked to; callers keep track of it.
//!
//! # Examples
//!
//! ```ignore
//! let info: ChainInfo = serde_json::from_str(&chain_info_json)?;
//! let tlock = Timelock::<Quicknet>::from_chain_info(&info)?;
//!
//! let round = info.round_at(unix_now + 3600);
//! let ct = tlock.encrypt(round, b"sealed bid: 42", &mut rng)?;
//!
//! // An hour later.
//! let data: RoundData = serde_json::from_str(&round_json)?;
//! let bid = tlock.decrypt_round(&data, &ct)?;
//! ```

use crate::beacon::{ChainInfo, RoundData};
use crate::ciphertext::Ciphertext;
use crate::curve::{PairingEngine, Point};
use crate::error::Error;
use crate::ibe::{decode_public_key, decode_signature, Config, Ibe};
use crate::identity::Identity;
use crate::scheme::{PublicKey, Scheme, Signature};
use alloc::string::String;
use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info_span};

/// Timelock encryption for the beacon with the given public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timelock<S: Scheme> {
    public_key: PublicKey<S>,
    ibe: Ibe<S>,
}

impl<S: Scheme> Timelock<S> {
    /// Validates a compressed beacon public key.
    pub fn new(public_key: &[u8]) -> Result<Self, Error> {
        Ok(Timelock {
            public_key: decode_public_key::<S>(public_key)?,
            ibe: Ibe::new(),
        })
    }

    /// Takes the public key from chain info, after checking that the chain uses scheme `S`.
    pub fn from_chain_info(info: &ChainInfo) -> Result<Self, Error> {
        info.check_scheme::<S>()?;
        Self::new(&info.public_key_bytes()?)
    }

    pub fn with_config(self, config: Config) -> Self {
        Timelock {
            ibe: Ibe::with_config(config),
            ..self
        }
    }

    pub fn public_key(&self) -> &PublicKey<S> {
        &self.public_key
    }

    pub fn config(&self) -> &Config {
        self.ibe.config()
    }

    /// Encrypts `msg` so that it opens with the beacon's signature for `round`.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        round: u64,
        msg: &[u8],
        rng: &mut R,
    ) -> Result<Ciphertext<S::Engine>, Error> {
        info_span!("tlock::encrypt", scheme = S::IDENTIFIER, round).in_scope(|| {
            let id = Identity::from_round(round);
            self.ibe.encrypt_with_key(&self.public_key, &id, msg, rng)
        })
    }

    /// Whether `sig` is the beacon's signature for `round`.
    pub fn verify(&self, round: u64, sig: &Signature<S>) -> bool {
        verify_round_signature::<S>(&self.public_key, round, sig)
    }

    /// Decrypts with a compressed round signature.
    ///
    /// The signature is not verified: a signature for another round is caught by the integrity
    /// check, if enforced.
    pub fn decrypt(&self, sig: &[u8], ct: &Ciphertext<S::Engine>) -> Result<Vec<u8>, Error> {
        info_span!("tlock::decrypt", scheme = S::IDENTIFIER)
            .in_scope(|| self.ibe.decrypt(sig, ct))
    }

    /// Decrypts with published round data, verifying the signature for its round first.
    pub fn decrypt_round(
        &self,
        round: &RoundData,
        ct: &Ciphertext<S::Engine>,
    ) -> Result<Vec<u8>, Error> {
        info_span!("tlock::decrypt", scheme = S::IDENTIFIER, round = round.round).in_scope(
            || -> Result<Vec<u8>, Error> {
                let sig = decode_signature::<S>(&round.signature_bytes()?)?;
                if !self.verify(round.round, &sig) {
                    debug!("round signature does not verify");
                    return Err(Error::InvalidRoundSignature { round: round.round });
                }

                self.ibe.decrypt_with_key(&sig, ct)
            },
        )
    }

    /// Like [`Self::decrypt`], for plaintexts that are UTF-8 text.
    pub fn decrypt_to_string(
        &self,
        sig: &[u8],
        ct: &Ciphertext<S::Engine>,
    ) -> Result<String, Error> {
        let m = self.decrypt(sig, ct)?;
        String::from_utf8(m).map_err(|_| Error::NotUtf8)
    }
}

/// BLS signature verification of a round signature: `e(pk, H(round)) == e(generator, sig)`.
pub fn verify_round_signature<S: Scheme>(
    pk: &PublicKey<S>,
    round: u64,
    sig: &Signature<S>,
) -> bool {
    let id = Identity::from_round(round);
    let q = Signature::<S>::hash_to_curve(id.as_ref(), S::DST);

    S::Engine::pairing(pk, &q) == S::Engine::pairing(&PublicKey::<S>::generator(), sig)
}
