/// Stamps the encryption test suite for a beacon scheme.
///
/// The beacon is simulated: a random secret key whose round signatures are `sk · H(round)`.
macro_rules! test_scheme {
    ($scheme: ty) => {
        use crate::ciphertext::Ciphertext;
        use crate::curve::{Point, Scalar};
        use crate::error::{Error, Malformed, PointError};
        use crate::ibe::{encrypt_with_sigma, Config, Ibe, IntegrityCheck};
        use crate::identity::Identity;
        use crate::scheme::{PublicKey, Scheme, Signature};
        use crate::Compress;
        use alloc::vec::Vec;
        use ark_ff::UniformRand;

        type S = $scheme;
        type Ct = Ciphertext<<S as Scheme>::Engine>;

        const HELLO: &[u8] = b"Hello, world!";

        struct Beacon {
            sk: Scalar,
            pk: PublicKey<S>,
        }

        impl Beacon {
            fn new() -> Self {
                let sk = Scalar::rand(&mut rand::thread_rng());
                Beacon {
                    sk,
                    pk: PublicKey::<S>::generator().mul(&sk),
                }
            }

            fn sign(&self, round: u64) -> Signature<S> {
                let id = Identity::from_round(round);
                Signature::<S>::hash_to_curve(id.as_ref(), <S as Scheme>::DST).mul(&self.sk)
            }
        }

        fn encrypt_with(ibe: &Ibe<S>, beacon: &Beacon, round: u64, msg: &[u8]) -> Ct {
            let id = Identity::from_round(round);
            ibe.encrypt_with_key(&beacon.pk, &id, msg, &mut rand::thread_rng())
                .unwrap()
        }

        fn encrypt(beacon: &Beacon, round: u64, msg: &[u8]) -> Ct {
            encrypt_with(&Ibe::new(), beacon, round, msg)
        }

        #[test]
        fn eq_encrypt_decrypt() {
            let beacon = Beacon::new();
            let ibe = Ibe::<S>::new();

            let id = Identity::from_round(128);
            let c = ibe
                .encrypt(beacon.pk.to_bytes().as_ref(), &id, HELLO, &mut rand::thread_rng())
                .unwrap();

            assert_eq!(c.u.as_ref().len(), Ct::U_BYTES);
            assert_eq!(c.v.len(), 13);
            assert_eq!(c.w.len(), 13);
            assert_ne!(&c.w[..], HELLO);

            let sig = beacon.sign(128).to_bytes();
            assert_eq!(ibe.decrypt(sig.as_ref(), &c), Ok(HELLO.to_vec()));
        }

        #[test]
        fn eq_encrypt_decrypt_binary() {
            let beacon = Beacon::new();
            let sig = beacon.sign(7);

            let m: Vec<u8> = (0u8..32).collect();
            let c = encrypt(&beacon, 7, &m);
            assert_eq!(Ibe::<S>::new().decrypt_with_key(&sig, &c), Ok(m));

            for len in [1, 2, 16, 31] {
                let m = alloc::vec![0xa5; len];
                let c = encrypt(&beacon, 7, &m);
                assert_eq!(Ibe::<S>::new().decrypt_with_key(&sig, &c), Ok(m));
            }
        }

        #[test]
        fn encryption_is_randomized() {
            let beacon = Beacon::new();

            let c1 = encrypt(&beacon, 1, HELLO);
            let c2 = encrypt(&beacon, 1, HELLO);
            assert_ne!(c1, c2);

            let id = Identity::from_round(1);
            let sigma = [3u8; 13];
            assert_eq!(
                encrypt_with_sigma::<S>(&beacon.pk, &id, HELLO, &sigma),
                encrypt_with_sigma::<S>(&beacon.pk, &id, HELLO, &sigma)
            );
        }

        #[test]
        fn wrong_round_is_rejected() {
            let beacon = Beacon::new();
            let c = encrypt(&beacon, 128, HELLO);
            let sig = beacon.sign(129);

            assert_eq!(
                Ibe::<S>::new().decrypt_with_key(&sig, &c),
                Err(Error::IntegrityCheckFailed)
            );

            let unchecked = Ibe::<S>::with_config(
                Config::new().with_integrity(IntegrityCheck::Skipped),
            );
            let m = unchecked.decrypt_with_key(&sig, &c).unwrap();
            assert_eq!(m.len(), HELLO.len());
            assert_ne!(&m[..], HELLO);
        }

        #[test]
        fn tampering_is_detected() {
            let beacon = Beacon::new();
            let sig = beacon.sign(5);
            let c = encrypt(&beacon, 5, HELLO);
            let ibe = Ibe::<S>::new();

            for i in 0..HELLO.len() {
                let mut t = c.clone();
                t.v[i] ^= 1 << (i % 8);
                assert_eq!(ibe.decrypt_with_key(&sig, &t), Err(Error::IntegrityCheckFailed));

                let mut t = c.clone();
                t.w[i] ^= 1 << (i % 8);
                assert_eq!(ibe.decrypt_with_key(&sig, &t), Err(Error::IntegrityCheckFailed));
            }

            // A valid encapsulation from another ciphertext.
            let mut t = c.clone();
            t.u = encrypt(&beacon, 5, HELLO).u;
            assert_eq!(ibe.decrypt_with_key(&sig, &t), Err(Error::IntegrityCheckFailed));

            // Without the check a flipped bit in W flips the same bit of the plaintext.
            let unchecked = Ibe::<S>::with_config(
                Config::new().with_integrity(IntegrityCheck::Skipped),
            );
            let mut t = c;
            t.w[0] ^= 0x80;
            let m = unchecked.decrypt_with_key(&sig, &t).unwrap();
            assert_eq!(m[0], HELLO[0] ^ 0x80);
            assert_eq!(&m[1..], &HELLO[1..]);
        }

        #[test]
        fn empty_plaintext_follows_policy() {
            let beacon = Beacon::new();
            let id = Identity::from_round(3);

            assert_eq!(
                Ibe::<S>::new().encrypt_with_key(&beacon.pk, &id, b"", &mut rand::thread_rng()),
                Err(Error::EmptyPlaintext)
            );

            let ibe = Ibe::<S>::with_config(Config::new().with_allow_empty(true));
            let c = encrypt_with(&ibe, &beacon, 3, b"");
            assert_eq!(c.to_bytes().len(), Ct::U_BYTES);
            assert_eq!(ibe.decrypt_with_key(&beacon.sign(3), &c), Ok(Vec::new()));
        }

        #[test]
        fn long_plaintext_is_rejected() {
            let beacon = Beacon::new();
            let id = Identity::from_round(3);

            assert_eq!(
                Ibe::<S>::new().encrypt_with_key(
                    &beacon.pk,
                    &id,
                    &[0u8; 33],
                    &mut rand::thread_rng()
                ),
                Err(Error::MessageTooLong { len: 33, max: 32 })
            );
        }

        #[test]
        fn invalid_keys_are_rejected() {
            let ibe = Ibe::<S>::new();
            let id = Identity::from_round(3);
            let mut rng = rand::thread_rng();
            let pk_bytes = <PublicKey<S> as Compress>::OUTPUT_SIZE;

            assert_eq!(
                ibe.encrypt(&alloc::vec![0u8; pk_bytes], &id, HELLO, &mut rng),
                Err(Error::InvalidPublicKey(PointError::InvalidEncoding))
            );
            assert_eq!(
                ibe.encrypt(&alloc::vec![0u8; pk_bytes - 1], &id, HELLO, &mut rng),
                Err(Error::InvalidPublicKey(PointError::InvalidLength {
                    expected: pk_bytes,
                    actual: pk_bytes - 1
                }))
            );
            assert_eq!(
                ibe.encrypt(PublicKey::<S>::identity().to_bytes().as_ref(), &id, HELLO, &mut rng),
                Err(Error::InvalidPublicKey(PointError::Identity))
            );

            let beacon = Beacon::new();
            let c = encrypt(&beacon, 3, HELLO);
            assert_eq!(
                ibe.decrypt(Signature::<S>::identity().to_bytes().as_ref(), &c),
                Err(Error::MalformedCiphertext(Malformed::Signature(
                    PointError::Identity
                )))
            );
        }

        #[test]
        fn malformed_ciphertexts_are_rejected() {
            let beacon = Beacon::new();
            let sig = beacon.sign(9);
            let c = encrypt(&beacon, 9, HELLO);
            let ibe = Ibe::<S>::new();

            let mut t = c.clone();
            t.w.pop();
            assert_eq!(
                ibe.decrypt_with_key(&sig, &t),
                Err(Error::MalformedCiphertext(Malformed::MaskLengthMismatch {
                    v: 13,
                    w: 12
                }))
            );

            let mut t = c.clone();
            t.v = alloc::vec![0; 33];
            t.w = alloc::vec![0; 33];
            assert_eq!(
                ibe.decrypt_with_key(&sig, &t),
                Err(Error::MalformedCiphertext(Malformed::MaskTooLong {
                    len: 33,
                    max: 32
                }))
            );

            let mut t = c;
            t.u = PublicKey::<S>::identity().to_bytes();
            assert_eq!(
                ibe.decrypt_with_key(&sig, &t),
                Err(Error::MalformedCiphertext(Malformed::U(PointError::Identity)))
            );
        }

        #[test]
        fn eq_serialize_deserialize() {
            let beacon = Beacon::new();
            let sig = beacon.sign(42);
            let c = encrypt(&beacon, 42, HELLO);

            let bytes = c.to_bytes();
            assert_eq!(bytes.len(), Ct::U_BYTES + 2 * HELLO.len());

            let decoded = Ct::from_bytes(&bytes, None, None).unwrap();
            assert_eq!(decoded, c);
            assert_eq!(Ct::from_bytes(&bytes, Some(13), Some(13)), Ok(c.clone()));
            assert_eq!(
                Ibe::<S>::new().decrypt_with_key(&sig, &decoded),
                Ok(HELLO.to_vec())
            );

            let hex = c.to_hex();
            let decoded = Ct::try_from(&hex).unwrap();
            assert_eq!(decoded, c);
            assert_eq!(
                Ibe::<S>::new().decrypt_with_key(&sig, &decoded),
                Ok(HELLO.to_vec())
            );
        }

        #[test]
        fn aggregated_shares_decrypt() {
            // Two shares of an additively shared beacon key.
            let mut rng = rand::thread_rng();
            let (a, b) = (Scalar::rand(&mut rng), Scalar::rand(&mut rng));
            let beacon = Beacon {
                sk: a + b,
                pk: PublicKey::<S>::generator().mul(&(a + b)),
            };
            let c = encrypt(&beacon, 11, HELLO);

            let q = Signature::<S>::hash_to_curve(
                Identity::from_round(11).as_ref(),
                <S as Scheme>::DST,
            );
            let sig = q.mul(&a).add(&q.mul(&b));

            assert_eq!(sig, beacon.sign(11));
            assert_eq!(Ibe::<S>::new().decrypt_with_key(&sig, &c), Ok(HELLO.to_vec()));
        }
    };
}
