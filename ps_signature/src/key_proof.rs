//! Optional proof that an IdP's [`PublicKey`] was honestly derived from a
//! [`SecretKey`] it actually holds: a Schnorr proof of knowledge of the
//! discrete log `x` underlying `XX = gg * x`. Not part of spec §4.2's core
//! `key_gen`/`sign_cred_request` pair, but a natural addition once an IdP
//! publishes `PK` out of band and a Requester/Verifier wants to check it
//! wasn't tampered with in transit, rather than take `XX` on faith.
//!
//! Built directly on [`schnorr_pok`]'s reusable discrete-log toolkit —
//! this is the "composed statement" the rest of that crate exists to
//! support, even though EL PASSO's main NIZK (ProveID/VerifyID, in
//! `id_protocol`) is its own fixed Sigma protocol rather than a composition
//! of these primitives.

use ark_ec::PairingEngine;
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use schnorr_pok::compute_random_oracle_challenge;

use crate::error::PSError;
use crate::hashing::DefaultDigest;
use crate::setup::{PublicKey, SecretKey};

schnorr_pok::impl_proof_of_knowledge_of_discrete_log!(PoKSecretExponent, PoKSecretExponentProof);

/// Proof that the publisher of a [`PublicKey`] knows the `x` with
/// `XX = gg * x`. Carries no information about `y[0..=L]`.
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize)]
pub struct PublicKeyWellFormedProof<E: PairingEngine> {
    proof: PoKSecretExponentProof<E::G2Affine>,
}

impl<E: PairingEngine> SecretKey<E> {
    /// Proves knowledge of `x` underlying `pk.xx`. `pk` must be the public
    /// key this secret key actually generated.
    pub fn prove_well_formed<R: RngCore>(&self, rng: &mut R, pk: &PublicKey<E>) -> Result<PublicKeyWellFormedProof<E>, PSError> {
        let blinding = E::Fr::rand(rng);
        let protocol = PoKSecretExponent::init(self.x, blinding, &pk.gg);

        let mut bytes = Vec::new();
        protocol.challenge_contribution(&pk.gg, &pk.xx, &mut bytes).map_err(|_| PSError::InvalidKeyShape("well-formedness proof encoding failed"))?;
        let challenge = compute_random_oracle_challenge::<E::Fr, DefaultDigest>(&bytes);

        Ok(PublicKeyWellFormedProof {
            proof: protocol.gen_proof(&challenge),
        })
    }
}

impl<E: PairingEngine> PublicKey<E> {
    /// Verifies a [`PublicKeyWellFormedProof`] produced by
    /// [`SecretKey::prove_well_formed`] over `self`.
    pub fn verify_well_formed(&self, proof: &PublicKeyWellFormedProof<E>) -> bool {
        let mut bytes = Vec::new();
        if proof.proof.challenge_contribution(&self.gg, &self.xx, &mut bytes).is_err() {
            return false;
        }
        let challenge = compute_random_oracle_challenge::<E::Fr, DefaultDigest>(&bytes);
        proof.proof.verify(&self.xx, &self.gg, &challenge)
    }
}
