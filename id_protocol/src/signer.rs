//! IdP role (spec §4.2): holds the PS secret key, publishes the matching
//! public key, and blind-signs a [`SignRequest`] once its NIZK of opening
//! checks out — without ever seeing the hidden attributes it folds in.

use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{UniformRand, Zero};
use ark_std::rand::RngCore;
use el_passo_crypto_utils::msm::variable_base_msm;
use el_passo_crypto_utils::transcript::Transcript;
use ps_signature::{Credential, PublicKey, SecretKey};

use crate::error::IdProtocolError;
use crate::hashing::{hash_attribute, DefaultDigest};
use crate::sign_request::SignRequest;

pub struct Signer<E: PairingEngine> {
    sk: SecretKey<E>,
    pk: PublicKey<E>,
}

impl<E: PairingEngine> Signer<E> {
    /// `key_gen` of spec §4.2: samples `x` and `y[0..=L]`, derives the
    /// matching public key under generators `(g, gg)`.
    pub fn key_gen<R: RngCore>(rng: &mut R, g: E::G1Affine, gg: E::G2Affine, attribute_capacity: usize) -> Self {
        let (sk, pk) = ps_signature::key_gen::<E, R>(rng, g, gg, attribute_capacity);
        Self { sk, pk }
    }

    pub fn public_key(&self) -> &PublicKey<E> {
        &self.pk
    }

    pub fn attribute_capacity(&self) -> usize {
        self.pk.attribute_capacity()
    }

    /// `sign_cred_request` of spec §4.2. `req.attrs[i]` is empty iff
    /// attribute `i` was hidden from this call; that emptiness, not a
    /// separate flag, is how hidden responses in `req.rs` are located.
    pub fn sign_cred_request<R: RngCore>(
        &self,
        rng: &mut R,
        req: &SignRequest<E>,
        associated_data: &[u8],
    ) -> Result<Credential<E>, IdProtocolError> {
        let l = self.pk.attribute_capacity();
        if req.attrs.len() != l {
            return Err(IdProtocolError::AttributeCountMismatch { expected: l, got: req.attrs.len() });
        }
        let hidden_count = req.attrs.iter().filter(|a| a.is_empty()).count();
        if req.rs.len() != 1 + hidden_count {
            tracing::warn!(
                target: "id_protocol::signer",
                "rejecting request: {} responses for {} hidden slots",
                req.rs.len(),
                hidden_count
            );
            return Err(IdProtocolError::ProofRejected);
        }

        // A_blind' = Yi[0]*r_t + sum_hidden Yi[i+1]*r_{m_i} - A*c. `A` only
        // ever commits to `t` (via `Yi[0]`) and hidden attributes (via
        // `Yi`), so plaintext attributes play no part in this
        // reconstruction.
        let mut bases = Vec::with_capacity(hidden_count + 2);
        let mut scalars = Vec::with_capacity(hidden_count + 2);
        bases.push(self.pk.yi[0]);
        scalars.push(req.rs[0]);
        let mut hidden_idx = 1usize;
        for (i, attr) in req.attrs.iter().enumerate() {
            if attr.is_empty() {
                bases.push(self.pk.yi[i + 1]);
                scalars.push(req.rs[hidden_idx]);
                hidden_idx += 1;
            }
        }
        bases.push(req.a);
        scalars.push(-req.c);
        let a_blind_prime = variable_base_msm(&bases, &scalars).into_affine();

        let c_prime = request_opening_challenge::<E>(&self.pk, &req.a, &a_blind_prime, associated_data)?;
        if c_prime != req.c {
            tracing::warn!(target: "id_protocol::signer", "rejecting request: challenge mismatch");
            return Err(IdProtocolError::ProofRejected);
        }

        let mut u = E::Fr::rand(rng);
        while u.is_zero() {
            u = E::Fr::rand(rng);
        }
        let h = self.pk.g.mul(u).into_affine();

        // M = A + sum_plain Yi[i+1]*H(attr); sig2 = h*x + M*u.
        let mut plain_bases = Vec::new();
        let mut plain_scalars = Vec::new();
        for (i, attr) in req.attrs.iter().enumerate() {
            if !attr.is_empty() {
                plain_bases.push(self.pk.yi[i + 1]);
                plain_scalars.push(hash_attribute::<E>(attr));
            }
        }
        let m = req.a.into_projective() + variable_base_msm(&plain_bases, &plain_scalars);
        let sig2 = (h.mul(self.sk.x) + m * u).into_affine();

        Ok(Credential { sig1: h, sig2 })
    }
}

/// `c = H_Fr( g ‖ Yi[0..L] ‖ A ‖ A_blind ‖ associated_data )` from spec
/// §4.2 step 2 / §4.3 step 5 — the Signer recomputes this to check the
/// request's opening proof, and the Requester computes the same shape when
/// it first picks `c`.
pub(crate) fn request_opening_challenge<E: PairingEngine>(
    pk: &PublicKey<E>,
    a: &E::G1Affine,
    a_blind: &E::G1Affine,
    associated_data: &[u8],
) -> Result<E::Fr, IdProtocolError> {
    let mut t = Transcript::new();
    t.append(&pk.g)?;
    t.append_many(&pk.yi)?;
    t.append(a)?;
    t.append(a_blind)?;
    t.append_bytes(associated_data);
    Ok(t.challenge::<E::Fr, DefaultDigest>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use crate::requester::Requester;
    use ark_bls12_381::Bls12_381;
    use ark_std::rand::{rngs::StdRng, SeedableRng};

    fn gens() -> (
        <Bls12_381 as PairingEngine>::G1Affine,
        <Bls12_381 as PairingEngine>::G2Affine,
    ) {
        (
            <Bls12_381 as PairingEngine>::G1Affine::prime_subgroup_generator(),
            <Bls12_381 as PairingEngine>::G2Affine::prime_subgroup_generator(),
        )
    }

    #[test]
    fn signs_well_formed_request() {
        let mut rng = StdRng::seed_from_u64(49u64);
        let (g, gg) = gens();
        let signer = Signer::<Bls12_381>::key_gen(&mut rng, g, gg, 3);
        let requester = Requester::new(signer.public_key().clone());
        let attrs = vec![Attribute::hidden("secret1"), Attribute::hidden("secret2"), Attribute::plaintext("plain1")];
        let (req, t) = requester.generate_request(&mut rng, &attrs, b"hello").unwrap();
        let cred = signer.sign_cred_request(&mut rng, &req, b"hello").unwrap();
        let unblinded = requester.unblind_credential(&cred, &t);
        let all_attrs = vec!["secret1".to_owned(), "secret2".to_owned(), "plain1".to_owned()];
        assert!(requester.verify(&unblinded, &t, &all_attrs));
    }

    #[test]
    fn rejects_wrong_attribute_count() {
        let mut rng = StdRng::seed_from_u64(50u64);
        let (g, gg) = gens();
        let signer = Signer::<Bls12_381>::key_gen(&mut rng, g, gg, 3);
        let requester = Requester::new(signer.public_key().clone());
        let attrs = vec![Attribute::hidden("a"), Attribute::hidden("b")];
        let (req, _t) = requester.generate_request(&mut rng, &attrs, b"ad").unwrap();
        let err = signer.sign_cred_request(&mut rng, &req, b"ad").unwrap_err();
        assert!(matches!(err, IdProtocolError::AttributeCountMismatch { .. }));
    }

    #[test]
    fn rejects_tampered_challenge() {
        let mut rng = StdRng::seed_from_u64(51u64);
        let (g, gg) = gens();
        let signer = Signer::<Bls12_381>::key_gen(&mut rng, g, gg, 2);
        let requester = Requester::new(signer.public_key().clone());
        let attrs = vec![Attribute::hidden("a"), Attribute::plaintext("b")];
        let (mut req, _t) = requester.generate_request(&mut rng, &attrs, b"ad").unwrap();
        req.c += <Bls12_381 as PairingEngine>::Fr::from(1u64);
        let err = signer.sign_cred_request(&mut rng, &req, b"ad").unwrap_err();
        assert!(matches!(err, IdProtocolError::ProofRejected));
    }
}
