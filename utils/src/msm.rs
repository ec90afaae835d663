//! Multi-scalar multiplication helper, shared by every crate that needs to
//! fold a list of `(base, scalar)` pairs into a single group element — key
//! derivation, Pedersen-style commitments, and Sigma-protocol responses all
//! reduce to this.

use ark_ec::{msm::VariableBaseMSM, AffineCurve};
use ark_ff::PrimeField;

/// `sum_i bases[i] * scalars[i]`, computed with `ark_ec`'s windowed
/// multi-scalar-multiplication instead of naive repeated doubling-and-add.
pub fn variable_base_msm<G: AffineCurve>(bases: &[G], scalars: &[G::ScalarField]) -> G::Projective {
    let scalars = scalars
        .iter()
        .map(|s| s.into_repr())
        .collect::<ark_std::vec::Vec<_>>();
    VariableBaseMSM::multi_scalar_mul(bases, &scalars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::{Fr, G1Affine, G1Projective};
    use ark_ec::ProjectiveCurve;
    use ark_ff::Zero;
    use ark_std::{
        rand::{rngs::StdRng, SeedableRng},
        UniformRand,
    };

    #[test]
    fn msm_matches_naive_sum() {
        let mut rng = StdRng::seed_from_u64(0u64);
        let bases: Vec<G1Affine> = (0..5)
            .map(|_| G1Projective::rand(&mut rng).into_affine())
            .collect();
        let scalars: Vec<Fr> = (0..5).map(|_| Fr::rand(&mut rng)).collect();

        let naive = bases
            .iter()
            .zip(scalars.iter())
            .fold(G1Projective::zero(), |acc, (b, s)| acc + b.mul(s.into_repr()));
        let via_msm = variable_base_msm(&bases, &scalars);
        assert_eq!(naive, via_msm);
    }
}
