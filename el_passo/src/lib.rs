//! EL PASSO: a privacy-preserving single sign-on scheme built on
//! Pointcheval-Sanders randomizable signatures over BLS12-381.
//!
//! This crate is a thin façade over the workspace's building blocks —
//! [`ps_signature`] (the signature scheme) and [`id_protocol`] (the
//! Signer/Requester/Verifier roles and the ProveID/VerifyID NIZK) — for
//! callers who just want `use el_passo::prelude::*;` and the default
//! BLS12-381 instantiation, without picking a pairing engine themselves.

pub use el_passo_codec as codec;
pub use el_passo_crypto_utils as crypto_utils;
pub use id_protocol;
pub use ps_signature;
pub use schnorr_pok;

/// Re-exports [`ps_signature::init_pairing`], the idempotent process-wide
/// curve initialization hook (spec §5/§9). `arkworks` needs no runtime
/// curve setup, so this is a guarded no-op kept for API parity with
/// pairing libraries that do.
pub fn init_pairing() {
    ps_signature::init_pairing();
}

/// The default pairing engine every type in this crate's [`prelude`] is
/// instantiated with.
pub type Curve = ark_bls12_381::Bls12_381;

/// The canonical `(g, gg)` generator pair for [`Curve`]: the curve's own
/// prime-subgroup generators. Every principal in a given deployment must
/// agree on the same pair — spec §4.2 and §4.3 take `(g, gg)` as shared,
/// caller-supplied parameters rather than deriving them, so this is a
/// convenience default rather than a protocol requirement.
pub fn default_generators() -> (
    <Curve as ark_ec::PairingEngine>::G1Affine,
    <Curve as ark_ec::PairingEngine>::G2Affine,
) {
    use ark_ec::AffineCurve;
    (
        <Curve as ark_ec::PairingEngine>::G1Affine::prime_subgroup_generator(),
        <Curve as ark_ec::PairingEngine>::G2Affine::prime_subgroup_generator(),
    )
}

/// Convenience re-exports pre-instantiated with [`Curve`], so a caller who
/// doesn't care about generality over the pairing engine can write
/// `el_passo::prelude::Signer::key_gen(...)` directly.
pub mod prelude {
    pub use crate::{default_generators, init_pairing, Curve};
    pub use id_protocol::{AccountabilityParams, Attribute, IdProof, IdProtocolError, Requester, Signer, Verifier};
    pub use ps_signature::{Credential, PSError, PublicKey, PublicKeyWellFormedProof, SecretKey};

    pub type SignRequest = id_protocol::SignRequest<super::Curve>;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn end_to_end_through_the_prelude() {
        init_pairing();
        let mut rng = StdRng::seed_from_u64(100u64);
        let (g, gg) = default_generators();

        let signer = Signer::<Curve>::key_gen(&mut rng, g, gg, 2);
        let requester = Requester::new(signer.public_key().clone());
        let verifier = Verifier::new(signer.public_key().clone());

        let attrs = vec![Attribute::hidden("secret"), Attribute::plaintext("plain")];
        let (req, t) = requester.generate_request(&mut rng, &attrs, b"assoc").unwrap();
        let cred = signer.sign_cred_request(&mut rng, &req, b"assoc").unwrap();
        let unblinded = requester.unblind_credential(&cred, &t);

        let proof = requester
            .el_passo_prove_id(&mut rng, &unblinded, &attrs, &t, b"assoc", b"relying-party", None)
            .unwrap();

        assert!(verifier.el_passo_verify_id_without_id_retrieval(&proof, b"assoc", b"relying-party"));
    }

    #[test]
    fn public_key_well_formed_proof_round_trips() {
        let mut rng = StdRng::seed_from_u64(101u64);
        let (g, gg) = default_generators();
        let (sk, pk) = ps_signature::key_gen::<Curve, _>(&mut rng, g, gg, 2);
        let proof = sk.prove_well_formed(&mut rng, &pk).unwrap();
        assert!(pk.verify_well_formed(&proof));
    }
}
