//! A growable byte accumulator for Fiat-Shamir challenges. Both prover and
//! verifier append the exact same public values in the exact same order
//! (spec §4.5: position in the transcript is the only domain separation),
//! then reduce the accumulated bytes to a scalar with [`hash_to_field`].

use ark_serialize::CanonicalSerialize;
use ark_std::vec::Vec;
use digest::{BlockInput, Digest, FixedOutput, Reset, Update};

use crate::hashing_utils::hash_to_field;

#[derive(Default)]
pub struct Transcript {
    bytes: Vec<u8>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Appends the canonical serialization of a group or field element.
    pub fn append<T: CanonicalSerialize>(&mut self, value: &T) -> Result<(), ark_serialize::SerializationError> {
        value.serialize(&mut self.bytes)
    }

    /// Appends a list of elements, each in canonical serialization, with no
    /// extra framing — the caller's fixed field count is what keeps this
    /// unambiguous between prover and verifier.
    pub fn append_many<T: CanonicalSerialize>(&mut self, values: &[T]) -> Result<(), ark_serialize::SerializationError> {
        for value in values {
            self.append(value)?;
        }
        Ok(())
    }

    /// Appends raw bytes (UTF-8 attribute strings, associated data, service
    /// names) directly, length-prefixed so that e.g. `("ab","c")` and
    /// `("a","bc")` cannot collide.
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
        self.bytes.extend_from_slice(bytes);
    }

    pub fn challenge<F, D>(&self) -> F
    where
        F: ark_ff::PrimeField,
        D: Digest + Update + BlockInput + FixedOutput + Reset + Default + Clone,
    {
        hash_to_field::<F, D>(b"elpasso-transcript", &self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Projective};
    use ark_ec::ProjectiveCurve;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ark_std::UniformRand;
    use blake2::Blake2b;

    #[test]
    fn same_contributions_give_same_challenge() {
        let mut rng = StdRng::seed_from_u64(42u64);
        let g = G1Projective::rand(&mut rng).into_affine();

        let mut prover = Transcript::new();
        prover.append(&g).unwrap();
        prover.append_bytes(b"associated data");

        let mut verifier = Transcript::new();
        verifier.append(&g).unwrap();
        verifier.append_bytes(b"associated data");

        let c1: Fr = prover.challenge::<Fr, Blake2b>();
        let c2: Fr = verifier.challenge::<Fr, Blake2b>();
        assert_eq!(c1, c2);
    }

    #[test]
    fn different_contributions_give_different_challenge() {
        let mut rng = StdRng::seed_from_u64(43u64);
        let g = G1Projective::rand(&mut rng).into_affine();
        let h = G1Projective::rand(&mut rng).into_affine();

        let mut a = Transcript::new();
        a.append(&g).unwrap();
        let mut b = Transcript::new();
        b.append(&h).unwrap();

        let c1: Fr = a.challenge::<Fr, Blake2b>();
        let c2: Fr = b.challenge::<Fr, Blake2b>();
        assert_ne!(c1, c2);
    }

    #[test]
    fn byte_framing_prevents_concatenation_collisions() {
        let mut a = Transcript::new();
        a.append_bytes(b"ab");
        a.append_bytes(b"c");

        let mut b = Transcript::new();
        b.append_bytes(b"a");
        b.append_bytes(b"bc");

        let c1: Fr = a.challenge::<Fr, Blake2b>();
        let c2: Fr = b.challenge::<Fr, Blake2b>();
        assert_ne!(c1, c2);
    }
}
