//! A minimal two-generator ElGamal ciphertext over a generic affine curve,
//! used by the EL PASSO accountability sub-protocol (spec §4.3 step 4,
//! §4.4 step 4): `E1 = g*e`, `E2 = pk*e + h*m`. `g` and `h` need not be
//! related to each other or to the curve's canonical generator — the caller
//! supplies both, matching spec's `g_extra`/`h_extra` parameters.

use ark_ec::{AffineCurve, ProjectiveCurve};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::serde_utils::AffineGroupBytes;

/// `(E1, E2)` from spec §3/§4.3/§4.4.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize)]
pub struct Ciphertext<G: AffineCurve> {
    #[serde_as(as = "AffineGroupBytes")]
    pub eph_pk: G,
    #[serde_as(as = "AffineGroupBytes")]
    pub encrypted: G,
}

impl<G: AffineCurve> Ciphertext<G> {
    /// Encrypt `message` under `public_key` using generators `g` (for the
    /// ephemeral key) and `h` (for the message), with explicit randomness
    /// `e` rather than sampling it, so the caller can reuse `e` across a
    /// joint NIZK transcript.
    pub fn new_given_randomness(
        message: &G::ScalarField,
        randomness: &G::ScalarField,
        public_key: &G,
        g: &G,
        h: &G,
    ) -> Self {
        let eph_pk = g.mul(*randomness).into_affine();
        let encrypted = (public_key.mul(*randomness) + h.mul(*message)).into_affine();
        Self { eph_pk, encrypted }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine, G1Projective};
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ark_std::UniformRand;

    #[test]
    fn decrypts_with_authority_secret() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let g = G1Projective::rand(&mut rng).into_affine();
        let h = G1Projective::rand(&mut rng).into_affine();
        let authority_sk = Fr::rand(&mut rng);
        let authority_pk = g.mul(authority_sk).into_affine();

        let message = Fr::rand(&mut rng);
        let randomness = Fr::rand(&mut rng);
        let ct = Ciphertext::new_given_randomness(&message, &randomness, &authority_pk, &g, &h);

        // Authority recovers h*m = E2 - E1*sk
        let recovered = (ct.encrypted.into_projective() - ct.eph_pk.mul(authority_sk)).into_affine();
        assert_eq!(recovered, h.mul(message).into_affine());
    }
}
