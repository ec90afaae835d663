//! The Pointcheval-Sanders signature itself: a pair of `G1` elements and
//! the pairing equation that verifies them against a commitment to the
//! signed attributes. This is the "PS verification equation shared by
//! every principal" from the crate's description — the IdP uses it
//! (indirectly, while blind-signing), the Requester uses it to check its
//! own unblinded/randomized credential, and the Verifier uses it both for
//! cleartext verification and as the final check inside VerifyID.

use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{UniformRand, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use el_passo_crypto_utils::serde_utils::AffineGroupBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// `(sig1, sig2)` from spec §3: `sig1 = h`, `sig2 = h * (x + sum(y_i * m_i))`
/// for some exponent `h = g * u`. Unblinding and randomization only ever
/// rescale these two elements; the type itself carries no attribute data.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize)]
pub struct Credential<E: PairingEngine> {
    #[serde_as(as = "AffineGroupBytes")]
    pub sig1: E::G1Affine,
    #[serde_as(as = "AffineGroupBytes")]
    pub sig2: E::G1Affine,
}

impl<E: PairingEngine> Credential<E> {
    /// Checks `e(sig1, k) == e(sig2, gg)`, spec §4.3/§4.4's shared
    /// verification equation. `k` is whatever commitment to `(x, {y_i *
    /// m_i})` the caller has already folded together — `XX + sum(YYi[i] *
    /// m_i)` for cleartext verification, or the ProveID/VerifyID `k` for
    /// the hybrid hidden/plaintext case.
    pub fn verify_against_commitment(&self, k: &E::G2Affine, gg: &E::G2Affine) -> bool {
        if self.sig1.is_zero() {
            return false;
        }
        E::pairing(self.sig1, *k) == E::pairing(self.sig2, *gg)
    }

    /// Re-randomizes `(sig1, sig2)` by a fresh, uniformly sampled `r != 0`.
    /// Spec §4.3: `(sig1 * r, sig2 * r)`; the verification equation is
    /// invariant under this because both sides of the pairing equation
    /// scale by `r`.
    pub fn randomize<R: RngCore>(&self, rng: &mut R) -> Self {
        let mut r = E::Fr::rand(rng);
        while r.is_zero() {
            r = E::Fr::rand(rng);
        }
        self.scale(&r)
    }

    fn scale(&self, r: &E::Fr) -> Self {
        Self {
            sig1: self.sig1.mul(*r).into_affine(),
            sig2: self.sig2.mul(*r).into_affine(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::key_gen;
    use ark_bls12_381::Bls12_381;
    use ark_ec::AffineCurve;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use test_utils::test_serialization;

    fn gens() -> (
        <Bls12_381 as PairingEngine>::G1Affine,
        <Bls12_381 as PairingEngine>::G2Affine,
    ) {
        (
            <Bls12_381 as PairingEngine>::G1Affine::prime_subgroup_generator(),
            <Bls12_381 as PairingEngine>::G2Affine::prime_subgroup_generator(),
        )
    }

    /// Directly signs `messages` (including slot 0, the user secret) with
    /// the raw PS construction, bypassing blind signing. Used only to
    /// exercise [`Credential::verify_against_commitment`] and
    /// [`Credential::randomize`] in isolation.
    fn sign_cleartext<E: PairingEngine, R: RngCore>(
        rng: &mut R,
        sk: &crate::setup::SecretKey<E>,
        g: &E::G1Affine,
        messages: &[E::Fr],
    ) -> Credential<E> {
        let u = E::Fr::rand(rng);
        let h = g.mul(u).into_affine();
        let mut exponent = sk.x;
        for (y_k, m_k) in sk.y.iter().zip(messages.iter()) {
            exponent += *y_k * m_k;
        }
        let sig2 = h.mul(exponent).into_affine();
        Credential { sig1: h, sig2 }
    }

    #[test]
    fn sign_then_verify_round_trips() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let (g, gg) = gens();
        let (sk, pk) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 3);
        let messages: Vec<_> = (0..=3).map(|_| <Bls12_381 as PairingEngine>::Fr::rand(&mut rng)).collect();
        let cred = sign_cleartext(&mut rng, &sk, &g, &messages);

        let mut k = pk.xx.into_projective();
        for (yyi, m) in pk.yyi.iter().zip(messages.iter()) {
            k += yyi.mul(*m);
        }
        let k = k.into_affine();
        assert!(cred.verify_against_commitment(&k, &gg));
    }

    #[test]
    fn randomization_preserves_validity() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let (g, gg) = gens();
        let (sk, pk) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 2);
        let messages: Vec<_> = (0..=2).map(|_| <Bls12_381 as PairingEngine>::Fr::rand(&mut rng)).collect();
        let cred = sign_cleartext(&mut rng, &sk, &g, &messages);

        let mut k = pk.xx.into_projective();
        for (yyi, m) in pk.yyi.iter().zip(messages.iter()) {
            k += yyi.mul(*m);
        }
        let k = k.into_affine();

        let randomized = cred.randomize(&mut rng);
        assert_ne!(randomized.sig1, cred.sig1);
        assert!(randomized.verify_against_commitment(&k, &gg));
    }

    #[test]
    fn identity_sig1_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2u64);
        let (_, gg) = gens();
        let cred = Credential::<Bls12_381> {
            sig1: <Bls12_381 as PairingEngine>::G1Affine::zero(),
            sig2: <Bls12_381 as PairingEngine>::G1Affine::zero(),
        };
        let k = gg;
        assert!(!cred.verify_against_commitment(&k, &gg));
        let _ = &mut rng;
    }

    #[test]
    fn serialization_round_trips() {
        let mut rng = StdRng::seed_from_u64(3u64);
        let (g, gg) = gens();
        let (sk, _) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 2);
        let messages: Vec<_> = (0..=2).map(|_| <Bls12_381 as PairingEngine>::Fr::rand(&mut rng)).collect();
        let cred = sign_cleartext(&mut rng, &sk, &g, &messages);
        test_serialization!(Credential<Bls12_381>, cred);
    }
}
