//! Keys for Pointcheval-Sanders signatures.
//!
//! A [`SecretKey`] is `L+1` scalars: `x` plus one `y_k` per slot, where slot
//! `0` is reserved for the user's master secret and slots `1..=L` bind the
//! credential's attributes. [`PublicKey`] is the deterministic image of a
//! `SecretKey` under a pair of caller-supplied generators `(g, gg)`.

use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::UniformRand;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::rand::RngCore;
use ark_std::vec::Vec;
use el_passo_crypto_utils::serde_utils::AffineGroupBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::Zeroize;

use crate::error::PSError;

/// IdP private material. Never serialized; dropped with its bytes zeroed.
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Zeroize)]
pub struct SecretKey<E: PairingEngine> {
    pub x: E::Fr,
    pub y: Vec<E::Fr>,
}

impl<E: PairingEngine> Drop for SecretKey<E> {
    fn drop(&mut self) {
        self.x.zeroize();
        for y_k in self.y.iter_mut() {
            y_k.zeroize();
        }
    }
}

impl<E: PairingEngine> SecretKey<E> {
    /// `attribute_capacity` is `L`; this samples `L+1` `y` scalars, slot 0
    /// reserved for the user secret.
    pub fn generate_using_rng<R: RngCore>(rng: &mut R, attribute_capacity: usize) -> Self {
        let x = E::Fr::rand(rng);
        let y = (0..=attribute_capacity).map(|_| E::Fr::rand(rng)).collect();
        Self { x, y }
    }

    pub fn attribute_capacity(&self) -> usize {
        self.y.len() - 1
    }
}

/// IdP public material, broadcast to every `Requester`/`Verifier`.
#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize)]
pub struct PublicKey<E: PairingEngine> {
    #[serde_as(as = "AffineGroupBytes")]
    pub g: E::G1Affine,
    #[serde_as(as = "AffineGroupBytes")]
    pub gg: E::G2Affine,
    #[serde_as(as = "AffineGroupBytes")]
    pub xx: E::G2Affine,
    #[serde_as(as = "Vec<AffineGroupBytes>")]
    pub yi: Vec<E::G1Affine>,
    #[serde_as(as = "Vec<AffineGroupBytes>")]
    pub yyi: Vec<E::G2Affine>,
}

impl<E: PairingEngine> PublicKey<E> {
    pub fn generate_using_secret_key(sk: &SecretKey<E>, g: &E::G1Affine, gg: &E::G2Affine) -> Self {
        let xx = gg.mul(sk.x).into_affine();
        let yi = sk.y.iter().map(|y_k| g.mul(*y_k).into_affine()).collect();
        let yyi = sk.y.iter().map(|y_k| gg.mul(*y_k).into_affine()).collect();
        Self {
            g: *g,
            gg: *gg,
            xx,
            yi,
            yyi,
        }
    }

    pub fn attribute_capacity(&self) -> usize {
        self.yi.len() - 1
    }

    /// Spec §3 invariant: `len(Yi) == len(YYi)`, both non-empty, and every
    /// element is a non-identity point.
    pub fn is_valid(&self) -> Result<(), PSError> {
        if self.yi.len() != self.yyi.len() {
            tracing::warn!(target: "ps_signature::setup", "public key rejected: len(Yi) != len(YYi)");
            return Err(PSError::InvalidKeyShape("len(Yi) != len(YYi)"));
        }
        if self.yi.is_empty() {
            tracing::warn!(target: "ps_signature::setup", "public key rejected: Yi/YYi are empty");
            return Err(PSError::InvalidKeyShape("Yi/YYi are empty"));
        }
        if self.g.is_zero() || self.gg.is_zero() || self.xx.is_zero() {
            tracing::warn!(target: "ps_signature::setup", "public key rejected: identity generator or XX");
            return Err(PSError::IdentityPoint);
        }
        if self.yi.iter().any(|p| p.is_zero()) || self.yyi.iter().any(|p| p.is_zero()) {
            tracing::warn!(target: "ps_signature::setup", "public key rejected: identity element in Yi/YYi");
            return Err(PSError::IdentityPoint);
        }
        Ok(())
    }
}

/// Samples a fresh keypair for `attribute_capacity` attributes under
/// generators `(g, gg)`. This is the free-function form of spec §4.2's
/// `key_gen`; [`crate::signer::Signer::key_gen`] wraps it and retains the
/// secret half.
pub fn key_gen<E: PairingEngine, R: RngCore>(
    rng: &mut R,
    g: E::G1Affine,
    gg: E::G2Affine,
    attribute_capacity: usize,
) -> (SecretKey<E>, PublicKey<E>) {
    let sk = SecretKey::generate_using_rng(rng, attribute_capacity);
    let pk = PublicKey::generate_using_secret_key(&sk, &g, &gg);
    (sk, pk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use test_utils::test_serialization;

    #[test]
    fn pk_shape_matches_attribute_capacity() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let g = <Bls12_381 as PairingEngine>::G1Affine::prime_subgroup_generator();
        let gg = <Bls12_381 as PairingEngine>::G2Affine::prime_subgroup_generator();
        for l in [1usize, 3, 20] {
            let (sk, pk) = key_gen::<Bls12_381, _>(&mut rng, g, gg, l);
            assert_eq!(pk.yi.len(), l + 1);
            assert_eq!(pk.yyi.len(), l + 1);
            assert_eq!(sk.y.len(), l + 1);
            pk.is_valid().unwrap();
        }
    }

    #[test]
    fn xx_matches_secret_x() {
        let mut rng = StdRng::seed_from_u64(1u64);
        let g = <Bls12_381 as PairingEngine>::G1Affine::prime_subgroup_generator();
        let gg = <Bls12_381 as PairingEngine>::G2Affine::prime_subgroup_generator();
        let (sk, pk) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 5);
        assert_eq!(pk.xx, gg.mul(sk.x).into_affine());
    }

    #[test]
    fn serialization_round_trips() {
        let mut rng = StdRng::seed_from_u64(2u64);
        let g = <Bls12_381 as PairingEngine>::G1Affine::prime_subgroup_generator();
        let gg = <Bls12_381 as PairingEngine>::G2Affine::prime_subgroup_generator();
        let (_, pk) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 4);
        test_serialization!(PublicKey<Bls12_381>, pk);
    }
}
