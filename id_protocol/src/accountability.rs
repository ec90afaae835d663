//! Parameters for the optional ElGamal accountability sub-protocol (spec
//! §4.3 step 4 / §4.4 step 4): an authority public key and a pair of
//! generators the prover and verifier must agree on out of band.

use ark_ec::PairingEngine;

#[derive(Clone, Copy, Debug)]
pub struct AccountabilityParams<E: PairingEngine> {
    pub authority_pk: E::G1Affine,
    pub g_extra: E::G1Affine,
    pub h_extra: E::G1Affine,
}

impl<E: PairingEngine> AccountabilityParams<E> {
    pub fn new(authority_pk: E::G1Affine, g_extra: E::G1Affine, h_extra: E::G1Affine) -> Self {
        Self { authority_pk, g_extra, h_extra }
    }
}
