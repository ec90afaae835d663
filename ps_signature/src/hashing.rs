//! Digest used for the optional public-key well-formedness proof
//! ([`crate::key_proof`]). Kept as a one-line indirection, same as
//! `id_protocol::hashing::DefaultDigest`, so prover and verifier can never
//! independently drift onto different digests.

pub type DefaultDigest = blake2::Blake2b;
