//! User role (spec §4.3): builds a blind-signing request with a NIZK of
//! its opening, unblinds and randomizes the credential it gets back, and
//! produces the ProveID message a Relying Party can check.

use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use ark_ff::{UniformRand, Zero};
use ark_std::rand::RngCore;
use el_passo_crypto_utils::elgamal::Ciphertext;
use el_passo_crypto_utils::msm::variable_base_msm;
use ps_signature::{Credential, PublicKey};

use crate::accountability::AccountabilityParams;
use crate::attribute::Attribute;
use crate::error::IdProtocolError;
use crate::hashing::{hash_attribute, service_pseudonym_base};
use crate::id_proof::IdProof;
use crate::prove_id_transcript::{AccountabilityContribution, ProveIdTranscript};
use crate::sign_request::SignRequest;
use crate::signer::request_opening_challenge;

pub struct Requester<E: PairingEngine> {
    pk: PublicKey<E>,
}

impl<E: PairingEngine> Requester<E> {
    pub fn new(pk: PublicKey<E>) -> Self {
        Self { pk }
    }

    pub fn public_key(&self) -> &PublicKey<E> {
        &self.pk
    }

    /// `generate_request` of spec §4.3. Returns the request to send to the
    /// Signer together with the user's master secret `t`, which the caller
    /// must retain for every later step (unblinding, verifying, proving).
    pub fn generate_request<R: RngCore>(
        &self,
        rng: &mut R,
        attrs: &[Attribute],
        associated_data: &[u8],
    ) -> Result<(SignRequest<E>, E::Fr), IdProtocolError> {
        let l = self.pk.attribute_capacity();
        if attrs.len() != l {
            return Err(IdProtocolError::AttributeCountMismatch { expected: l, got: attrs.len() });
        }

        let t = E::Fr::rand(rng);

        let hidden: Vec<(usize, &Attribute)> = attrs.iter().enumerate().filter(|(_, a)| a.hidden).collect();

        // A = Yi[0]*t + sum_hidden Yi[i+1]*H(value). `Yi[0]` (not `g`) is
        // `t`'s base: the public key's slot 0 is reserved for the user
        // secret, and every downstream verification commitment
        // (`k`/`K`/`K_blind`) scalar-multiplies `YYi[0]` by `t`, so the
        // signed exponent on `t` must carry the matching `y[0]` factor.
        let mut a_bases = Vec::with_capacity(1 + hidden.len());
        let mut a_scalars = Vec::with_capacity(1 + hidden.len());
        a_bases.push(self.pk.yi[0]);
        a_scalars.push(t);
        for (i, attr) in &hidden {
            a_bases.push(self.pk.yi[i + 1]);
            a_scalars.push(hash_attribute::<E>(&attr.value));
        }
        let a = variable_base_msm(&a_bases, &a_scalars).into_affine();

        let v_t = E::Fr::rand(rng);
        let v_m: Vec<E::Fr> = (0..hidden.len()).map(|_| E::Fr::rand(rng)).collect();

        let mut a_blind_bases = Vec::with_capacity(1 + hidden.len());
        let mut a_blind_scalars = Vec::with_capacity(1 + hidden.len());
        a_blind_bases.push(self.pk.yi[0]);
        a_blind_scalars.push(v_t);
        for ((i, _), v) in hidden.iter().zip(v_m.iter()) {
            a_blind_bases.push(self.pk.yi[i + 1]);
            a_blind_scalars.push(*v);
        }
        let a_blind = variable_base_msm(&a_blind_bases, &a_blind_scalars).into_affine();

        let c = request_opening_challenge::<E>(&self.pk, &a, &a_blind, associated_data)?;

        let mut rs = Vec::with_capacity(1 + hidden.len());
        rs.push(v_t + c * t);
        for ((_, attr), v) in hidden.iter().zip(v_m.iter()) {
            rs.push(*v + c * hash_attribute::<E>(&attr.value));
        }

        let attrs_out: Vec<String> = attrs.iter().map(|a| if a.hidden { String::new() } else { a.value.clone() }).collect();

        Ok((SignRequest { a, c, rs, attrs: attrs_out }, t))
    }

    /// `unblind_credential` of spec §4.3. Because `generate_request`
    /// commits the user secret through `Yi[0]` (the basis the Signer's
    /// `y[0]` already multiplies into every `sig2`), the credential the
    /// Signer returns already satisfies the verification equation over the
    /// full attribute set with no further adjustment — the Signer never
    /// learns `t` or the hidden attributes, but it never needs to for the
    /// resulting signature to be correct either. `t` is taken to keep this
    /// call's shape matching the rest of the pipeline (every caller holds
    /// it at this point) even though it plays no role in the result.
    pub fn unblind_credential(&self, cred: &Credential<E>, _t: &E::Fr) -> Credential<E> {
        cred.clone()
    }

    /// `verify` of spec §4.3: checks the PS equation directly, using this
    /// Requester's own cached `t` in slot 0 of the commitment.
    pub fn verify(&self, cred: &Credential<E>, t: &E::Fr, attrs: &[String]) -> bool {
        if attrs.len() != self.pk.attribute_capacity() {
            return false;
        }
        let k = self.build_k(t, attrs);
        cred.verify_against_commitment(&k, &self.pk.gg)
    }

    fn build_k(&self, t: &E::Fr, attrs: &[String]) -> E::G2Affine {
        let mut bases = Vec::with_capacity(1 + attrs.len());
        let mut scalars = Vec::with_capacity(1 + attrs.len());
        bases.push(self.pk.yyi[0]);
        scalars.push(*t);
        for (i, attr) in attrs.iter().enumerate() {
            bases.push(self.pk.yyi[i + 1]);
            scalars.push(hash_attribute::<E>(attr));
        }
        (self.pk.xx.into_projective() + variable_base_msm(&bases, &scalars)).into_affine()
    }

    /// `randomize_credential` of spec §4.3.
    pub fn randomize_credential<R: RngCore>(&self, cred: &Credential<E>, rng: &mut R) -> Credential<E> {
        cred.randomize(rng)
    }

    /// `el_passo_prove_id` of spec §4.3. `attrs` must be the same vector
    /// (same order, same hidden/plaintext marks) used when the credential
    /// was requested. When `accountability` is set, the *first hidden*
    /// attribute slot is the one bound into the ElGamal ciphertext — per
    /// spec §9's open question, requesting accountability while that slot
    /// is plaintext would make the binding meaningless, so it is rejected
    /// here rather than silently accepted as the source does.
    #[allow(clippy::too_many_arguments)]
    pub fn el_passo_prove_id<R: RngCore>(
        &self,
        rng: &mut R,
        cred: &Credential<E>,
        attrs: &[Attribute],
        t: &E::Fr,
        associated_data: &[u8],
        service_name: &[u8],
        accountability: Option<&AccountabilityParams<E>>,
    ) -> Result<IdProof<E>, IdProtocolError> {
        let l = self.pk.attribute_capacity();
        if attrs.len() != l {
            return Err(IdProtocolError::AttributeCountMismatch { expected: l, got: attrs.len() });
        }
        let hidden: Vec<(usize, &Attribute)> = attrs.iter().enumerate().filter(|(_, a)| a.hidden).collect();
        if accountability.is_some() && !attrs.first().map(|a| a.hidden).unwrap_or(false) {
            return Err(IdProtocolError::AccountabilityRequiresFirstHidden);
        }

        let randomized = self.randomize_credential(cred, rng);

        // k = XX + YYi[0]*t + sum_hidden YYi[i+1]*H(value) — the secret and
        // hidden part of the verification commitment. The plaintext terms
        // are public, so the Verifier folds them back in itself
        // (`prepare_hybrid_verification`) rather than having them asserted
        // here by the very party who chose their values.
        let mut k_bases = Vec::with_capacity(1 + hidden.len());
        let mut k_scalars = Vec::with_capacity(1 + hidden.len());
        k_bases.push(self.pk.yyi[0]);
        k_scalars.push(*t);
        for (i, attr) in &hidden {
            k_bases.push(self.pk.yyi[i + 1]);
            k_scalars.push(hash_attribute::<E>(&attr.value));
        }
        let k = (self.pk.xx.into_projective() + variable_base_msm(&k_bases, &k_scalars)).into_affine();

        let service_base = service_pseudonym_base::<E>(service_name);
        let phi = service_base.mul(*t).into_affine();

        let v_t = E::Fr::rand(rng);
        let v_m: Vec<E::Fr> = (0..hidden.len()).map(|_| E::Fr::rand(rng)).collect();

        // K_blind = YYi[0]*v_t + sum_hidden YYi[i+1]*v_{m_i}
        let mut k_blind_bases = Vec::with_capacity(1 + hidden.len());
        let mut k_blind_scalars = Vec::with_capacity(1 + hidden.len());
        k_blind_bases.push(self.pk.yyi[0]);
        k_blind_scalars.push(v_t);
        for ((i, _), v) in hidden.iter().zip(v_m.iter()) {
            k_blind_bases.push(self.pk.yyi[i + 1]);
            k_blind_scalars.push(*v);
        }
        let k_blind = variable_base_msm(&k_blind_bases, &k_blind_scalars).into_affine();

        let phi_blind = service_base.mul(v_t).into_affine();

        let (e, acc_ct, acc_params, e1_blind, e2_blind) = match accountability {
            Some(params) => {
                let e = E::Fr::rand(rng);
                let v_e = E::Fr::rand(rng);
                let m1 = hash_attribute::<E>(&hidden[0].1.value);
                let ct = Ciphertext::new_given_randomness(&m1, &e, &params.authority_pk, &params.g_extra, &params.h_extra);
                let e1_blind = params.g_extra.mul(v_e).into_affine();
                let e2_blind = (params.authority_pk.mul(v_e) + params.h_extra.mul(v_m[0])).into_affine();
                (Some((e, v_e)), Some(ct), Some(params), e1_blind, e2_blind)
            }
            None => (None, None, None, E::G1Affine::zero(), E::G1Affine::zero()),
        };

        let attrs_out: Vec<String> = attrs.iter().map(|a| if a.hidden { String::new() } else { a.value.clone() }).collect();

        let c = {
            let accountability_contrib = match (&acc_params, &acc_ct) {
                (Some(params), Some(ct)) => Some(AccountabilityContribution {
                    authority_pk: &params.authority_pk,
                    g_extra: &params.g_extra,
                    h_extra: &params.h_extra,
                    e1: &ct.eph_pk,
                    e2: &ct.encrypted,
                    e1_blind: &e1_blind,
                    e2_blind: &e2_blind,
                }),
                _ => None,
            };
            ProveIdTranscript {
                pk: &self.pk,
                sigma1: &randomized.sig1,
                sigma2: &randomized.sig2,
                k: &k,
                k_blind: &k_blind,
                phi: &phi,
                phi_blind: &phi_blind,
                attrs: &attrs_out,
                associated_data,
                service_name,
                accountability: accountability_contrib,
            }
            .challenge()?
        };

        let mut rs = Vec::with_capacity(2 + hidden.len());
        rs.push(v_t + c * t);
        for ((_, attr), v) in hidden.iter().zip(v_m.iter()) {
            rs.push(*v + c * hash_attribute::<E>(&attr.value));
        }
        if let Some((e, v_e)) = e {
            rs.push(v_e + c * e);
        }

        Ok(IdProof {
            sig1: randomized.sig1,
            sig2: randomized.sig2,
            k,
            phi,
            c,
            rs,
            attrs: attrs_out,
            accountability: acc_ct,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::Signer;
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
    fn sign_unblind_verify_round_trip() {
        let mut rng = StdRng::seed_from_u64(60u64);
        let (g, gg) = gens();
        let signer = Signer::<Bls12_381>::key_gen(&mut rng, g, gg, 3);
        let requester = Requester::new(signer.public_key().clone());

        let attrs = vec![Attribute::hidden("secret1"), Attribute::hidden("secret2"), Attribute::plaintext("plain1")];
        let (req, t) = requester.generate_request(&mut rng, &attrs, b"hello").unwrap();
        let cred = signer.sign_cred_request(&mut rng, &req, b"hello").unwrap();
        let unblinded = requester.unblind_credential(&cred, &t);

        let all_attrs = vec!["secret1".to_owned(), "secret2".to_owned(), "plain1".to_owned()];
        assert!(requester.verify(&unblinded, &t, &all_attrs));

        let tampered = vec!["secret1".to_owned(), "secret2".to_owned(), "plain2".to_owned()];
        assert!(!requester.verify(&unblinded, &t, &tampered));
    }

    #[test]
    fn randomization_preserves_validity() {
        let mut rng = StdRng::seed_from_u64(61u64);
        let (g, gg) = gens();
        let signer = Signer::<Bls12_381>::key_gen(&mut rng, g, gg, 2);
        let requester = Requester::new(signer.public_key().clone());

        let attrs = vec![Attribute::hidden("s"), Attribute::plaintext("p")];
        let (req, t) = requester.generate_request(&mut rng, &attrs, b"ad").unwrap();
        let cred = signer.sign_cred_request(&mut rng, &req, b"ad").unwrap();
        let unblinded = requester.unblind_credential(&cred, &t);

        let all_attrs = vec!["s".to_owned(), "p".to_owned()];
        let randomized = requester.randomize_credential(&unblinded, &mut rng);
        assert_ne!(randomized.sig1, unblinded.sig1);
        assert!(requester.verify(&randomized, &t, &all_attrs));
    }

    #[test]
    fn accountability_rejects_plaintext_first_slot() {
        let mut rng = StdRng::seed_from_u64(62u64);
        let (g, gg) = gens();
        let signer = Signer::<Bls12_381>::key_gen(&mut rng, g, gg, 2);
        let requester = Requester::new(signer.public_key().clone());

        let attrs = vec![Attribute::plaintext("not-hidden"), Attribute::hidden("s")];
        let (req, t) = requester.generate_request(&mut rng, &attrs, b"ad").unwrap();
        let cred = signer.sign_cred_request(&mut rng, &req, b"ad").unwrap();
        let unblinded = requester.unblind_credential(&cred, &t);

        let params = AccountabilityParams::<Bls12_381>::new(g, g, g);
        let err = requester
            .el_passo_prove_id(&mut rng, &unblinded, &attrs, &t, b"ad", b"service", Some(&params))
            .unwrap_err();
        assert!(matches!(err, IdProtocolError::AccountabilityRequiresFirstHidden));
    }
}
