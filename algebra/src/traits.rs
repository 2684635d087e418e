use crate::prelude::*;
pub use ark_ff::LegendreSymbol;
use ark_std::fmt::Debug;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

/// The trait for scalars
pub trait Scalar:
    Copy
    + Default
    + Debug
    + PartialEq
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + Into<BigUint>
    + for<'a> From<&'a BigUint>
    + Clone
    + One
    + Zero
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Return a random scalar
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Return a generator of the multiplicative group
    fn multiplicative_generator() -> Self;

    /// Return the field size as a BigUint
    fn get_field_size_biguint() -> BigUint;

    /// Return a representation of the scalar as a vector of u64 in the little-endian order
    fn get_little_endian_u64(&self) -> Vec<u64>;

    /// Return the len of the byte representation
    fn bytes_len() -> usize;

    /// Convert to a fixed-width big-endian byte string of `bytes_len()` bytes
    fn to_bytes(&self) -> Vec<u8>;

    /// Convert from the canonical fixed-width big-endian byte string.
    /// Rejects a wrong length and values not smaller than the modulus.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Interpret big-endian bytes as an integer and reduce it modulo the field size
    fn from_be_bytes_mod_order(bytes: &[u8]) -> Self;

    /// Interpret little-endian bytes as an integer and reduce it modulo the field size
    fn from_le_bytes_mod_order(bytes: &[u8]) -> Self;

    /// Return the modular inverse of the scalar if it exists
    fn inv(&self) -> Result<Self>;

    /// Return the square of the field element
    fn square(&self) -> Self;

    /// Return the legendre symbol of the field element
    fn legendre(&self) -> LegendreSymbol;

    /// exponent form: least significant limb first, with u64 limbs
    fn pow(&self, exponent: &[u64]) -> Self;

    /// Raise to a power given as a BigUint.
    fn pow_biguint(&self, exponent: &BigUint) -> Self {
        self.pow(&exponent.to_u64_digits())
    }

    /// Divide by `other`, failing when `other` is zero.
    fn checked_div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul(&other.inv()?))
    }

    /// Map a signed integer into the field.
    fn from_i64(value: i64) -> Self {
        if value < 0 {
            Self::from(value.unsigned_abs()).neg()
        } else {
            Self::from(value as u64)
        }
    }

    /// Convert into BigUint, often for debug.
    fn into_biguint(self) -> BigUint {
        self.into()
    }

    /// Return the `order` powers `g^0, g^1, ..., g^(order - 1)` of `g = 5^((p - 1) / order)`.
    ///
    /// `order` must be a power of two dividing `p - 1`, and `g` must generate the subgroup of
    /// that order, otherwise `DomainSizeError` is returned.
    fn roots_of_unity(order: usize) -> Result<Vec<Self>> {
        if order == 0 || !order.is_power_of_two() {
            return Err(AlgebraError::DomainSizeError);
        }
        let p_minus_one = Self::get_field_size_biguint() - 1u32;
        let order_big = BigUint::from(order as u64);
        if !(&p_minus_one % &order_big).is_zero() {
            return Err(AlgebraError::DomainSizeError);
        }
        let g = Self::from(5u32).pow_biguint(&(p_minus_one / order_big));
        if order > 1 && g.pow(&[(order / 2) as u64]) == Self::one() {
            return Err(AlgebraError::DomainSizeError);
        }

        let mut roots = Vec::with_capacity(order);
        let mut cur = Self::one();
        for _ in 0..order {
            roots.push(cur);
            cur.mul_assign(&g);
        }
        Ok(roots)
    }
}

/// The trait for group elements
pub trait Group:
    Debug
    + Default
    + Copy
    + Sized
    + PartialEq
    + Eq
    + Clone
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Neg<Output = Self>
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
{
    /// The scalar type
    type ScalarType: Scalar;

    /// The number of bytes for a compressed representation of a group element
    const COMPRESSED_LEN: usize;

    /// The number of bytes for a uncompressed representation of a group element
    const UNCOMPRESSED_LEN: usize;

    /// Return the doubling of the group element
    fn double(&self) -> Self;

    /// Return the identity element (i.e., 0 * G)
    fn get_identity() -> Self;

    /// Return the base element (i.e., 1 * G)
    fn get_base() -> Self;

    /// Check whether this is the identity element
    fn is_identity(&self) -> bool {
        *self == Self::get_identity()
    }

    /// Return a random element
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Multiply by an integer given as little-endian u64 limbs, which may exceed the group order
    fn mul_bigint(&self, limbs: &[u64]) -> Self;

    /// Convert to bytes in the compressed representation
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the compressed representation
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Convert to bytes in the unchecked representation
    fn to_unchecked_bytes(&self) -> Vec<u8>;

    /// Convert from bytes in the unchecked representation
    fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self>;

    /// Return the size of unchecked bytes.
    fn unchecked_size() -> usize;

    /// Compute the multiscalar multiplication
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&(**p).mul(*s)))
    }
}

/// The trait for a pair of groups for pairing
pub trait Pairing {
    /// The scalar type
    type ScalarField: Scalar;

    /// The first group
    type G1: Group<ScalarType = Self::ScalarField>;

    /// The second group
    type G2: Group<ScalarType = Self::ScalarField>;

    /// The target group
    type Gt: Group<ScalarType = Self::ScalarField>;

    /// The pairing operation. Without final exponentiation the raw Miller loop output is
    /// returned, which is only meaningful as input to [`Pairing::final_exponentiation`].
    fn pairing(a: &Self::G1, b: &Self::G2, final_exponentiate: bool) -> Self::Gt;

    /// Apply the final exponentiation to a Miller loop output
    fn final_exponentiation(f: &Self::Gt) -> Option<Self::Gt>;

    /// The product of pairing operation
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt;

    /// Check `e(a1, a2) * e(b1, b2) == 1` with a single final exponentiation.
    fn pairing_check(a1: &Self::G1, a2: &Self::G2, b1: &Self::G1, b2: &Self::G2) -> bool {
        let miller = Self::pairing(a1, a2, false).add(&Self::pairing(b1, b2, false));
        match Self::final_exponentiation(&miller) {
            Some(res) => res.is_identity(),
            None => false,
        }
    }
}
