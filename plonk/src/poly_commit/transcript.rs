use crate::poly_commit::pcs::ToBytes;
use merlin::Transcript;
use misc_algebra::prelude::*;

/// The trait for polynomial commitment transcript.
pub trait PolyComTranscript {
    /// Append the commitment to the transcript.
    fn append_commitment<C: ToBytes>(&mut self, commitment: &C);

    /// Append the field to the transcript.
    fn append_field_elem<F: Scalar>(&mut self, point: &F);

    /// Append a group element in compressed form.
    fn append_group_elem<G: Group>(&mut self, elem: &G);

    /// Get challenge result.
    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F;
}

impl PolyComTranscript for Transcript {
    fn append_commitment<C: ToBytes>(&mut self, commitment: &C) {
        self.append_message(b"append commitment", &commitment.to_bytes());
    }

    fn append_field_elem<F: Scalar>(&mut self, field_elem: &F) {
        self.append_message(b"append field point", &field_elem.to_bytes());
    }

    fn append_group_elem<G: Group>(&mut self, elem: &G) {
        self.append_message(b"append group element", &elem.to_compressed_bytes());
    }

    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F {
        let mut buff = [0u8; 32];
        self.challenge_bytes(label, &mut buff[..]);
        F::from_be_bytes_mod_order(&buff)
    }
}

/// An item absorbed by [`custom_hash`].
#[derive(Clone, Copy, Debug)]
pub enum HashItem<'a, P: Pairing> {
    /// A scalar, absorbed as fixed-width big-endian bytes.
    Scalar(&'a P::ScalarField),
    /// A point of the first group, absorbed compressed.
    G1(&'a P::G1),
    /// A point of the second group, absorbed compressed.
    G2(&'a P::G2),
    /// An integer, absorbed as 8 big-endian bytes.
    Integer(u64),
}

/// Hash a sequence of items to a scalar.
/// # Example
/// ```
/// use misc_plonk::poly_commit::transcript::{custom_hash, HashItem};
/// use misc_algebra::bn254::{BN254PairingEngine, BN254Scalar};
/// use misc_algebra::prelude::*;
/// let x = BN254Scalar::from(3u32);
/// let h1 = custom_hash::<BN254PairingEngine>(&[HashItem::Scalar(&x), HashItem::Integer(7)]);
/// let h2 = custom_hash::<BN254PairingEngine>(&[HashItem::Scalar(&x), HashItem::Integer(7)]);
/// assert_eq!(h1, h2);
/// assert_ne!(h1, custom_hash::<BN254PairingEngine>(&[HashItem::Integer(7)]));
/// ```
pub fn custom_hash<P: Pairing>(items: &[HashItem<'_, P>]) -> P::ScalarField {
    let mut transcript = Transcript::new(b"Custom Hash");
    for item in items {
        match item {
            HashItem::Scalar(s) => transcript.append_field_elem(*s),
            HashItem::G1(g) => transcript.append_group_elem(*g),
            HashItem::G2(g) => transcript.append_group_elem(*g),
            HashItem::Integer(n) => transcript.append_message(b"append integer", &u64_to_be_bytes(*n)),
        }
    }
    transcript.get_challenge_field_elem(b"hash")
}
