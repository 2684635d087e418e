/// Implement `serde::Serialize` and `serde::Deserialize` for a type that implements
/// [`FromToBytes`](crate::serialization::FromToBytes).
///
/// Human-readable formats get a url-safe base64 string, binary formats get the raw bytes.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes = $crate::serialization::FromToBytes::to_bytes_repr(self);
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&bytes))
                } else {
                    serializer.serialize_bytes(&bytes)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::obj_serde::BytesVisitor)?
                } else {
                    deserializer
                        .deserialize_bytes($crate::serialization::obj_serde::BytesVisitor)?
                };
                <$t as $crate::serialization::FromToBytes>::from_bytes_repr(bytes.as_slice())
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Wrap a prime field of arkworks into a type implementing [`Scalar`](crate::traits::Scalar).
macro_rules! scalar_wrapper {
    ($(#[$attr:meta])* $name:ident, $inner:ty) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) $inner);

        impl ark_std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                let v: num_bigint::BigUint = ark_ff::PrimeField::into_bigint(self.0).into();
                <num_bigint::BigUint as ark_std::fmt::Debug>::fmt(&v, f)
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::errors::AlgebraError;

            fn from_str(string: &str) -> core::result::Result<Self, Self::Err> {
                <$inner as core::str::FromStr>::from_str(string)
                    .map(Self)
                    .map_err(|_| $crate::errors::AlgebraError::DeserializationError)
            }
        }

        impl From<$name> for num_bigint::BigUint {
            #[inline]
            fn from(src: $name) -> num_bigint::BigUint {
                ark_ff::PrimeField::into_bigint(src.0).into()
            }
        }

        impl<'a> From<&'a num_bigint::BigUint> for $name {
            #[inline]
            fn from(src: &num_bigint::BigUint) -> Self {
                Self(<$inner>::from(src.clone()))
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(value: u32) -> Self {
                Self(<$inner>::from(value as u64))
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(value: u64) -> Self {
                Self(<$inner>::from(value))
            }
        }

        impl $crate::One for $name {
            #[inline]
            fn one() -> Self {
                Self(<$inner as $crate::One>::one())
            }
        }

        impl $crate::Zero for $name {
            #[inline]
            fn zero() -> Self {
                Self(<$inner as $crate::Zero>::zero())
            }

            #[inline]
            fn is_zero(&self) -> bool {
                <$inner as $crate::Zero>::is_zero(&self.0)
            }
        }

        impl core::ops::Add for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl core::ops::Sub for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl core::ops::Mul for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> core::ops::Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl<'a> core::ops::Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl<'a> core::ops::Mul<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &Self) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> core::ops::AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += rhs.0;
            }
        }

        impl<'a> core::ops::SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= rhs.0;
            }
        }

        impl<'a> core::ops::MulAssign<&'a $name> for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: &Self) {
                self.0 *= rhs.0;
            }
        }

        impl core::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl core::iter::Sum<$name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = $name>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Zero>::zero(), core::ops::Add::add)
            }
        }

        impl<'a> core::iter::Sum<&'a $name> for $name {
            #[inline]
            fn sum<I: Iterator<Item = &'a $name>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Zero>::zero(), |acc, x| acc + x)
            }
        }

        impl $crate::traits::Scalar for $name {
            #[inline]
            fn random<R: $crate::rand::CryptoRng + $crate::rand::RngCore>(rng: &mut R) -> Self {
                Self(<$inner as $crate::UniformRand>::rand(rng))
            }

            #[inline]
            fn multiplicative_generator() -> Self {
                Self(<$inner as ark_ff::FftField>::GENERATOR)
            }

            #[inline]
            fn get_field_size_biguint() -> num_bigint::BigUint {
                <$inner as ark_ff::PrimeField>::MODULUS.into()
            }

            #[inline]
            fn get_little_endian_u64(&self) -> ark_std::vec::Vec<u64> {
                ark_ff::PrimeField::into_bigint(self.0).as_ref().to_vec()
            }

            #[inline]
            fn bytes_len() -> usize {
                ((<$inner as ark_ff::PrimeField>::MODULUS_BIT_SIZE + 7) / 8) as usize
            }

            fn to_bytes(&self) -> ark_std::vec::Vec<u8> {
                let bytes = ark_ff::BigInteger::to_bytes_be(&ark_ff::PrimeField::into_bigint(self.0));
                bytes[bytes.len() - Self::bytes_len()..].to_vec()
            }

            fn from_bytes(bytes: &[u8]) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                if bytes.len() != Self::bytes_len() {
                    return Err($crate::errors::AlgebraError::DeserializationError);
                }
                let value = num_bigint::BigUint::from_bytes_be(bytes);
                if value >= Self::get_field_size_biguint() {
                    return Err($crate::errors::AlgebraError::DeserializationError);
                }
                Ok(Self::from(&value))
            }

            #[inline]
            fn from_be_bytes_mod_order(bytes: &[u8]) -> Self {
                Self(<$inner as ark_ff::PrimeField>::from_be_bytes_mod_order(bytes))
            }

            #[inline]
            fn from_le_bytes_mod_order(bytes: &[u8]) -> Self {
                Self(<$inner as ark_ff::PrimeField>::from_le_bytes_mod_order(bytes))
            }

            #[inline]
            fn inv(&self) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                ark_ff::Field::inverse(&self.0)
                    .map(Self)
                    .ok_or($crate::errors::AlgebraError::DivisionByZero)
            }

            #[inline]
            fn square(&self) -> Self {
                Self(ark_ff::Field::square(&self.0))
            }

            #[inline]
            fn legendre(&self) -> ark_ff::LegendreSymbol {
                ark_ff::Field::legendre(&self.0)
            }

            #[inline]
            fn pow(&self, exponent: &[u64]) -> Self {
                Self(ark_ff::Field::pow(&self.0, exponent))
            }
        }

        impl $crate::serialization::FromToBytes for $name {
            fn to_bytes_repr(&self) -> ark_std::vec::Vec<u8> {
                $crate::traits::Scalar::to_bytes(self)
            }

            fn from_bytes_repr(bytes: &[u8]) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                <$name as $crate::traits::Scalar>::from_bytes(bytes)
            }
        }

        $crate::serialize_deserialize!($name);
    };
}

/// Wrap the projective form of an arkworks short Weierstrass curve into a type
/// implementing [`Group`](crate::traits::Group).
macro_rules! curve_group_wrapper {
    ($(#[$attr:meta])* $name:ident, $projective:ty, $affine:ty, $scalar:ident, $compressed:expr, $uncompressed:expr) => {
        $(#[$attr])*
        #[derive(Copy, Default, Clone, PartialEq, Eq)]
        pub struct $name(pub(crate) $projective);

        impl ark_std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ark_std::fmt::Formatter<'_>) -> ark_std::fmt::Result {
                let affine: $affine = ark_ec::CurveGroup::into_affine(self.0);
                <$affine as ark_std::fmt::Display>::fmt(&affine, f)
            }
        }

        impl $crate::traits::Group for $name {
            type ScalarType = $scalar;
            const COMPRESSED_LEN: usize = $compressed;
            const UNCOMPRESSED_LEN: usize = $uncompressed;

            #[inline]
            fn double(&self) -> Self {
                Self(ark_ec::Group::double(&self.0))
            }

            #[inline]
            fn get_identity() -> Self {
                Self(<$projective as $crate::Zero>::zero())
            }

            #[inline]
            fn get_base() -> Self {
                Self(<$projective as ark_ec::Group>::generator())
            }

            #[inline]
            fn random<R: $crate::rand::CryptoRng + $crate::rand::RngCore>(prng: &mut R) -> Self {
                Self(<$projective as $crate::UniformRand>::rand(prng))
            }

            #[inline]
            fn mul_bigint(&self, limbs: &[u64]) -> Self {
                Self(ark_ec::Group::mul_bigint(&self.0, limbs))
            }

            fn to_compressed_bytes(&self) -> ark_std::vec::Vec<u8> {
                let affine: $affine = ark_ec::CurveGroup::into_affine(self.0);
                let mut buf = ark_std::vec::Vec::with_capacity(Self::COMPRESSED_LEN);
                // writing into a vector cannot fail
                let _ = ark_serialize::CanonicalSerialize::serialize_with_mode(
                    &affine,
                    &mut buf,
                    ark_serialize::Compress::Yes,
                );
                buf
            }

            fn from_compressed_bytes(
                bytes: &[u8],
            ) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                let affine = <$affine as ark_serialize::CanonicalDeserialize>::deserialize_with_mode(
                    bytes,
                    ark_serialize::Compress::Yes,
                    ark_serialize::Validate::Yes,
                )
                .map_err(|_| $crate::errors::AlgebraError::DeserializationError)?;
                Ok(Self(<$projective>::from(affine)))
            }

            fn to_unchecked_bytes(&self) -> ark_std::vec::Vec<u8> {
                let affine: $affine = ark_ec::CurveGroup::into_affine(self.0);
                let mut buf = ark_std::vec::Vec::with_capacity(Self::UNCOMPRESSED_LEN);
                let _ = ark_serialize::CanonicalSerialize::serialize_with_mode(
                    &affine,
                    &mut buf,
                    ark_serialize::Compress::No,
                );
                buf
            }

            fn from_unchecked_bytes(
                bytes: &[u8],
            ) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                let affine = <$affine as ark_serialize::CanonicalDeserialize>::deserialize_with_mode(
                    bytes,
                    ark_serialize::Compress::No,
                    ark_serialize::Validate::No,
                )
                .map_err(|_| $crate::errors::AlgebraError::DeserializationError)?;
                Ok(Self(<$projective>::from(affine)))
            }

            #[inline]
            fn unchecked_size() -> usize {
                ark_serialize::CanonicalSerialize::serialized_size(
                    &<$affine>::default(),
                    ark_serialize::Compress::No,
                )
            }

            fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
                if scalars.is_empty() {
                    return Self::get_identity();
                }
                let scalars_raw: ark_std::vec::Vec<_> =
                    scalars.iter().map(|r| ark_ff::PrimeField::into_bigint(r.0)).collect();
                let points_raw = ark_ec::CurveGroup::normalize_batch(
                    &points.iter().map(|r| r.0).collect::<ark_std::vec::Vec<$projective>>(),
                );
                Self(<$projective as ark_ec::VariableBaseMSM>::msm_bigint(
                    &points_raw,
                    &scalars_raw,
                ))
            }
        }

        impl<'a> core::ops::Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self::Output {
                Self(self.0 + &rhs.0)
            }
        }

        impl<'a> core::ops::Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self::Output {
                Self(self.0 - &rhs.0)
            }
        }

        impl<'a> core::ops::Mul<&'a $scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &$scalar) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> core::ops::AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &'a $name) {
                self.0 += &rhs.0
            }
        }

        impl<'a> core::ops::SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &'a $name) {
                self.0 -= &rhs.0
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self::Output {
                Self(-self.0)
            }
        }

        impl $crate::serialization::FromToBytes for $name {
            fn to_bytes_repr(&self) -> ark_std::vec::Vec<u8> {
                $crate::traits::Group::to_compressed_bytes(self)
            }

            fn from_bytes_repr(bytes: &[u8]) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                <$name as $crate::traits::Group>::from_compressed_bytes(bytes)
            }
        }

        $crate::serialize_deserialize!($name);
    };
}

/// Wrap the target group of a pairing, written additively.
///
/// `+` is multiplication in `Fp12`, scalar multiplication is exponentiation and
/// the identity is `1`.
macro_rules! target_group_wrapper {
    ($(#[$attr:meta])* $name:ident, $fp12:ty, $ark_pairing:ty, $engine:ident, $scalar:ident, $g1:ident, $g2:ident, $len:expr) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Debug)]
        pub struct $name(pub(crate) $fp12);

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                <Self as $crate::traits::Group>::get_identity()
            }
        }

        impl core::ops::Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                let mut v = self.0;
                v.conjugate_in_place();
                Self(v)
            }
        }

        impl<'a> core::ops::Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &'a $name) -> Self::Output {
                Self(self.0 * rhs.0)
            }
        }

        impl<'a> core::ops::Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &'a $name) -> Self::Output {
                let mut rhs_inverse = rhs.0;
                rhs_inverse.conjugate_in_place();
                Self(self.0 * rhs_inverse)
            }
        }

        impl<'a> core::ops::Mul<&'a $scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &'a $scalar) -> Self::Output {
                Self(ark_ff::Field::pow(&self.0, ark_ff::PrimeField::into_bigint(rhs.0)))
            }
        }

        impl<'a> core::ops::AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &'a $name) {
                self.0 *= rhs.0
            }
        }

        impl<'a> core::ops::SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &'a $name) {
                *self = *self - rhs;
            }
        }

        impl $crate::traits::Group for $name {
            type ScalarType = $scalar;
            const COMPRESSED_LEN: usize = $len;
            const UNCOMPRESSED_LEN: usize = $len;

            #[inline]
            fn double(&self) -> Self {
                Self(ark_ff::Field::square(&self.0))
            }

            #[inline]
            fn get_identity() -> Self {
                Self(<$fp12 as $crate::One>::one())
            }

            #[inline]
            fn get_base() -> Self {
                <$engine as $crate::traits::Pairing>::pairing(
                    &<$g1 as $crate::traits::Group>::get_base(),
                    &<$g2 as $crate::traits::Group>::get_base(),
                    true,
                )
            }

            #[inline]
            fn random<R: $crate::rand::CryptoRng + $crate::rand::RngCore>(prng: &mut R) -> Self {
                let g = <ark_ec::pairing::PairingOutput<$ark_pairing> as $crate::UniformRand>::rand(prng);
                Self(g.0)
            }

            #[inline]
            fn mul_bigint(&self, limbs: &[u64]) -> Self {
                Self(ark_ff::Field::pow(&self.0, limbs))
            }

            fn to_compressed_bytes(&self) -> ark_std::vec::Vec<u8> {
                let mut buf = ark_std::vec::Vec::with_capacity(Self::COMPRESSED_LEN);
                // writing into a vector cannot fail
                let _ = ark_serialize::CanonicalSerialize::serialize_with_mode(
                    &self.0,
                    &mut buf,
                    ark_serialize::Compress::Yes,
                );
                buf
            }

            fn from_compressed_bytes(
                bytes: &[u8],
            ) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                let res = <$fp12 as ark_serialize::CanonicalDeserialize>::deserialize_with_mode(
                    bytes,
                    ark_serialize::Compress::Yes,
                    ark_serialize::Validate::Yes,
                )
                .map_err(|_| $crate::errors::AlgebraError::DeserializationError)?;
                Ok(Self(res))
            }

            fn to_unchecked_bytes(&self) -> ark_std::vec::Vec<u8> {
                let mut buf = ark_std::vec::Vec::with_capacity(Self::UNCOMPRESSED_LEN);
                let _ = ark_serialize::CanonicalSerialize::serialize_with_mode(
                    &self.0,
                    &mut buf,
                    ark_serialize::Compress::No,
                );
                buf
            }

            fn from_unchecked_bytes(
                bytes: &[u8],
            ) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                let res = <$fp12 as ark_serialize::CanonicalDeserialize>::deserialize_with_mode(
                    bytes,
                    ark_serialize::Compress::No,
                    ark_serialize::Validate::No,
                )
                .map_err(|_| $crate::errors::AlgebraError::DeserializationError)?;
                Ok(Self(res))
            }

            #[inline]
            fn unchecked_size() -> usize {
                $len
            }
        }

        impl $crate::serialization::FromToBytes for $name {
            fn to_bytes_repr(&self) -> ark_std::vec::Vec<u8> {
                $crate::traits::Group::to_compressed_bytes(self)
            }

            fn from_bytes_repr(bytes: &[u8]) -> core::result::Result<Self, $crate::errors::AlgebraError> {
                <$name as $crate::traits::Group>::from_compressed_bytes(bytes)
            }
        }

        $crate::serialize_deserialize!($name);
    };
}

/// Implement [`Pairing`](crate::traits::Pairing) for an arkworks pairing-friendly curve.
macro_rules! pairing_engine {
    ($(#[$attr:meta])* $name:ident, $ark_pairing:ty, $scalar:ident, $g1:ident, $g2:ident, $gt:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::traits::Pairing for $name {
            type ScalarField = $scalar;
            type G1 = $g1;
            type G2 = $g2;
            type Gt = $gt;

            fn pairing(a: &Self::G1, b: &Self::G2, final_exponentiate: bool) -> Self::Gt {
                if final_exponentiate {
                    $gt(<$ark_pairing as ark_ec::pairing::Pairing>::pairing(a.0, b.0).0)
                } else {
                    $gt(<$ark_pairing as ark_ec::pairing::Pairing>::miller_loop(a.0, b.0).0)
                }
            }

            fn final_exponentiation(f: &Self::Gt) -> Option<Self::Gt> {
                <$ark_pairing as ark_ec::pairing::Pairing>::final_exponentiation(
                    ark_ec::pairing::MillerLoopOutput(f.0),
                )
                .map(|out| $gt(out.0))
            }

            fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt {
                let c1: ark_std::vec::Vec<_> = a
                    .iter()
                    .map(|x| <$ark_pairing as ark_ec::pairing::Pairing>::G1Prepared::from(x.0))
                    .collect();
                let c2: ark_std::vec::Vec<_> = b
                    .iter()
                    .map(|x| <$ark_pairing as ark_ec::pairing::Pairing>::G2Prepared::from(x.0))
                    .collect();
                $gt(<$ark_pairing as ark_ec::pairing::Pairing>::multi_pairing(c1, c2).0)
            }
        }
    };
}
