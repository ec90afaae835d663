//! Hashing into scalar fields and into curve groups.
//!
//! `ark-ec` 0.3 does not ship a standardized hash-to-curve routine, so we use
//! the classic try-and-increment construction: hash an incrementing counter
//! suffix until the digest decodes to a valid, non-identity point, then clear
//! the cofactor. This is the same technique `dock_crypto_utils` uses
//! upstream.

use ark_ec::{AffineCurve, ProjectiveCurve};
use ark_ff::{PrimeField, Zero};
use ark_std::vec::Vec;
use digest::{BlockInput, Digest, FixedOutput, Reset, Update};

/// Hash `bytes` to a non-identity point of `G`'s prime-order subgroup, in
/// affine form.
pub fn affine_group_elem_from_try_and_incr<G, D>(bytes: &[u8]) -> G
where
    G: AffineCurve,
    D: Digest + Update + BlockInput + FixedOutput + Reset + Default + Clone,
{
    let mut hash_input = bytes.to_vec();
    hash_input.push(0);
    loop {
        let digest = D::digest(&hash_input);
        if let Some(pt) = G::from_random_bytes(&digest) {
            let pt = pt.mul_by_cofactor_to_projective();
            if !pt.is_zero() {
                return pt.into_affine();
            }
        }
        let last = hash_input.last_mut().unwrap();
        *last = last.wrapping_add(1);
    }
}

/// Same as [`affine_group_elem_from_try_and_incr`] but returns the
/// projective representation, which is what most call sites immediately
/// accumulate into a multi-scalar-multiplication base vector.
pub fn projective_group_elem_from_try_and_incr<G, D>(bytes: &[u8]) -> G::Projective
where
    G: AffineCurve,
    D: Digest + Update + BlockInput + FixedOutput + Reset + Default + Clone,
{
    affine_group_elem_from_try_and_incr::<G, D>(bytes).into_projective()
}

/// Hash `seed`, salted with `domain_separator`, to a scalar field element.
/// Used for deterministic (test and demo) key generation from a secret seed.
pub fn field_elem_from_seed<F, D>(seed: &[u8], domain_separator: &[u8]) -> F
where
    F: PrimeField,
    D: Digest + Update + BlockInput + FixedOutput + Reset + Default + Clone,
{
    let mut hash_input = Vec::with_capacity(domain_separator.len() + seed.len() + 1);
    hash_input.extend_from_slice(domain_separator);
    hash_input.extend_from_slice(seed);
    hash_input.push(0);
    loop {
        let digest = D::digest(&hash_input);
        if let Some(f) = F::from_random_bytes(&digest) {
            return f;
        }
        let last = hash_input.last_mut().unwrap();
        *last = last.wrapping_add(1);
    }
}

/// Domain-separated hash of arbitrary bytes into a scalar field element.
/// This is `H(·)` from spec §4.2/4.3 (per-attribute hashing) and `H_Fr(·)`
/// from spec §4.5 (Fiat-Shamir transcript hashing) — both are the same
/// routine with a different domain separator baked into the transcript
/// position rather than an explicit tag, as §4.5 requires.
pub fn hash_to_field<F, D>(domain_separator: &[u8], bytes: &[u8]) -> F
where
    F: PrimeField,
    D: Digest + Update + BlockInput + FixedOutput + Reset + Default + Clone,
{
    field_elem_from_seed::<F, D>(bytes, domain_separator)
}
