//! Attribute and pseudonym hashing used by the ProveID/VerifyID NIZK.
//!
//! Unlike `ps_signature`/`schnorr_pok`, which stay generic over a digest
//! `D` for reuse outside EL PASSO, the ProveID/VerifyID protocol is one
//! fixed Sigma protocol rather than a pluggable framework, so this crate
//! fixes a single digest everywhere a hash is taken. Prover and verifier
//! disagreeing on the digest would simply make every proof fail to
//! verify — there is no negotiation to get wrong.

use ark_ec::PairingEngine;
use blake2::Blake2b;
use el_passo_crypto_utils::hashing_utils::{affine_group_elem_from_try_and_incr, hash_to_field};

pub type DefaultDigest = Blake2b;

/// `H(·)` from spec §4.2/§4.3: domain-separated hash of an attribute's
/// plaintext value into the scalar field.
pub fn hash_attribute<E: PairingEngine>(value: &str) -> E::Fr {
    hash_to_field::<E::Fr, DefaultDigest>(b"elpasso-attribute", value.as_bytes())
}

/// `hash_to_G1(service_name)` from spec §4.3 step 3 / §4.4 step 3: the base
/// point a service-scoped pseudonym is built from.
pub fn service_pseudonym_base<E: PairingEngine>(service_name: &[u8]) -> E::G1Affine {
    affine_group_elem_from_try_and_incr::<E::G1Affine, DefaultDigest>(service_name)
}
