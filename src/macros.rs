/// Implements [`crate::Compress`] and [`crate::curve::Point`] for a newtype around an arkworks
/// affine point.
///
/// Decompression uses the zcash encoding of `ark-bls12-381` without its built-in validation, so
/// that an encoding that is off the curve can be told apart from one outside the subgroup.
macro_rules! impl_point {
    ($name: ident, $affine: ty, $bytes: expr, $hash: path) => {
        impl $crate::Compress for $name {
            const OUTPUT_SIZE: usize = $bytes;
            type Output = [u8; $bytes];

            fn to_bytes(&self) -> [u8; $bytes] {
                let mut buf = [0u8; $bytes];
                ark_serialize::CanonicalSerialize::serialize_compressed(&self.0, &mut buf[..])
                    .expect("compressed points fill the buffer exactly");

                buf
            }

            fn from_bytes(bytes: &[u8; $bytes]) -> Result<Self, $crate::PointError> {
                let p = <$affine as ark_serialize::CanonicalDeserialize>::deserialize_with_mode(
                    &bytes[..],
                    ark_serialize::Compress::Yes,
                    ark_serialize::Validate::No,
                )
                .map_err(|_| $crate::PointError::InvalidEncoding)?;

                if !p.is_on_curve() {
                    return Err($crate::PointError::InvalidEncoding);
                }
                if !p.is_in_correct_subgroup_assuming_on_curve() {
                    return Err($crate::PointError::NotInSubgroup);
                }

                Ok($name(p))
            }

            fn output_from_slice(bytes: &[u8]) -> Result<[u8; $bytes], $crate::PointError> {
                if bytes.len() != $bytes {
                    return Err($crate::PointError::InvalidLength {
                        expected: $bytes,
                        actual: bytes.len(),
                    });
                }

                Ok(*arrayref::array_ref![bytes, 0, $bytes])
            }
        }

        impl $crate::curve::Point for $name {
            const NAME: &'static str = stringify!($name);

            fn generator() -> Self {
                $name(<$affine as ark_ec::AffineRepr>::generator())
            }

            fn identity() -> Self {
                $name(<$affine as ark_ec::AffineRepr>::zero())
            }

            fn is_identity(&self) -> bool {
                ark_ec::AffineRepr::is_zero(&self.0)
            }

            fn mul(&self, scalar: &$crate::curve::Scalar) -> Self {
                $name(ark_ec::CurveGroup::into_affine(self.0 * scalar))
            }

            fn add(&self, rhs: &Self) -> Self {
                let sum = ark_ec::AffineRepr::into_group(self.0) + rhs.0;
                $name(ark_ec::CurveGroup::into_affine(sum))
            }

            fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Self {
                $name($hash(msg, dst))
            }
        }

        impl From<$affine> for $name {
            fn from(p: $affine) -> Self {
                $name(p)
            }
        }

        impl From<$name> for $affine {
            fn from(p: $name) -> Self {
                p.0
            }
        }
    };
}
