//! Relying Party role (spec §4.4): re-derives the ProveID challenge from a
//! proof's public parts, checks it matches, and checks the PS pairing
//! equation on the randomized credential carried inside the proof.

use ark_ec::{AffineCurve, PairingEngine, ProjectiveCurve};
use el_passo_crypto_utils::msm::variable_base_msm;
use ps_signature::{Credential, PublicKey};

use crate::hashing::{hash_attribute, service_pseudonym_base};
use crate::id_proof::IdProof;
use crate::prove_id_transcript::{AccountabilityContribution, ProveIdTranscript};

pub struct Verifier<E: PairingEngine> {
    pk: PublicKey<E>,
}

impl<E: PairingEngine> Verifier<E> {
    pub fn new(pk: PublicKey<E>) -> Self {
        Self { pk }
    }

    pub fn public_key(&self) -> &PublicKey<E> {
        &self.pk
    }

    /// Cleartext verification of spec §4.4: `all_attrs[0]` is the user
    /// secret `t` and `all_attrs[1..]` are the credential's attributes, all
    /// in plaintext.
    pub fn verify(&self, cred: &Credential<E>, all_attrs: &[E::Fr]) -> bool {
        if all_attrs.len() != self.pk.attribute_capacity() + 1 {
            return false;
        }
        let k = (self.pk.xx.into_projective() + variable_base_msm(&self.pk.yyi, all_attrs)).into_affine();
        cred.verify_against_commitment(&k, &self.pk.gg)
    }

    /// `el_passo_verify_id` of spec §4.4: full proof including the
    /// ElGamal accountability sub-proof. Returns `false` if `proof` does
    /// not carry `(E1, E2)` — use
    /// [`Self::el_passo_verify_id_without_id_retrieval`] for proofs that
    /// legitimately omit accountability.
    pub fn el_passo_verify_id(
        &self,
        proof: &IdProof<E>,
        associated_data: &[u8],
        service_name: &[u8],
        authority_pk: &E::G1Affine,
        g_extra: &E::G1Affine,
        h_extra: &E::G1Affine,
    ) -> bool {
        let Some(ct) = proof.accountability.as_ref() else {
            tracing::debug!(target: "id_protocol::verifier", "rejecting proof: no accountability ciphertext attached");
            return false;
        };

        if proof.sig1.is_zero() {
            tracing::debug!(target: "id_protocol::verifier", "rejecting proof: sig1 is the identity point");
            return false;
        }

        let l = self.pk.attribute_capacity();
        if proof.attrs.len() != l {
            return false;
        }
        let hidden_indices: Vec<usize> = proof.attrs.iter().enumerate().filter(|(_, a)| a.is_empty()).map(|(i, _)| i).collect();
        if hidden_indices.is_empty() {
            tracing::debug!(target: "id_protocol::verifier", "rejecting proof: accountability requires a hidden attribute slot");
            return false;
        }
        let expected_rs_len = 2 + hidden_indices.len();
        if proof.rs.len() != expected_rs_len {
            return false;
        }

        let r_t = proof.rs[0];
        let r_m: Vec<E::Fr> = proof.rs[1..1 + hidden_indices.len()].to_vec();
        let r_e = proof.rs[1 + hidden_indices.len()];

        let k_blind = self.reconstruct_k_blind(proof, &hidden_indices, r_t, &r_m);
        let phi_blind = self.reconstruct_phi_blind(proof, service_name, r_t);

        let e1_blind = (g_extra.mul(r_e) - ct.eph_pk.mul(proof.c)).into_affine();
        let e2_blind = (authority_pk.mul(r_e) + h_extra.mul(r_m[0]) - ct.encrypted.mul(proof.c)).into_affine();

        let c_prime = ProveIdTranscript {
            pk: &self.pk,
            sigma1: &proof.sig1,
            sigma2: &proof.sig2,
            k: &proof.k,
            k_blind: &k_blind,
            phi: &proof.phi,
            phi_blind: &phi_blind,
            attrs: &proof.attrs,
            associated_data,
            service_name,
            accountability: Some(AccountabilityContribution {
                authority_pk,
                g_extra,
                h_extra,
                e1: &ct.eph_pk,
                e2: &ct.encrypted,
                e1_blind: &e1_blind,
                e2_blind: &e2_blind,
            }),
        }
        .challenge();

        let c_prime = match c_prime {
            Ok(c) => c,
            Err(_) => return false,
        };

        if c_prime != proof.c {
            tracing::debug!(target: "id_protocol::verifier", "rejecting proof: challenge mismatch");
            return false;
        }

        let cred = Credential { sig1: proof.sig1, sig2: proof.sig2 };
        let k_full = self.prepare_hybrid_verification(proof);
        cred.verify_against_commitment(&k_full, &self.pk.gg)
    }

    /// `el_passo_verify_id_without_id_retrieval` of spec §4.4: same check,
    /// but the transcript omits the accountability sub-proof fields
    /// entirely, matching a proof built without `(E1, E2)`.
    pub fn el_passo_verify_id_without_id_retrieval(&self, proof: &IdProof<E>, associated_data: &[u8], service_name: &[u8]) -> bool {
        if proof.sig1.is_zero() {
            tracing::debug!(target: "id_protocol::verifier", "rejecting proof: sig1 is the identity point");
            return false;
        }
        let l = self.pk.attribute_capacity();
        if proof.attrs.len() != l {
            return false;
        }
        let hidden_indices: Vec<usize> = proof.attrs.iter().enumerate().filter(|(_, a)| a.is_empty()).map(|(i, _)| i).collect();
        if proof.rs.len() != 1 + hidden_indices.len() {
            return false;
        }

        let r_t = proof.rs[0];
        let r_m: Vec<E::Fr> = proof.rs[1..].to_vec();

        let k_blind = self.reconstruct_k_blind(proof, &hidden_indices, r_t, &r_m);
        let phi_blind = self.reconstruct_phi_blind(proof, service_name, r_t);

        let c_prime = ProveIdTranscript {
            pk: &self.pk,
            sigma1: &proof.sig1,
            sigma2: &proof.sig2,
            k: &proof.k,
            k_blind: &k_blind,
            phi: &proof.phi,
            phi_blind: &phi_blind,
            attrs: &proof.attrs,
            associated_data,
            service_name,
            accountability: None,
        }
        .challenge();

        let c_prime = match c_prime {
            Ok(c) => c,
            Err(_) => return false,
        };

        if c_prime != proof.c {
            tracing::debug!(target: "id_protocol::verifier", "rejecting proof: challenge mismatch");
            return false;
        }

        let cred = Credential { sig1: proof.sig1, sig2: proof.sig2 };
        let k_full = self.prepare_hybrid_verification(proof);
        cred.verify_against_commitment(&k_full, &self.pk.gg)
    }

    /// `K_blind' = YYi[0]*r_t + sum_hidden YYi[i+1]*r_{m_i} - (k - XX)*c`
    /// from spec §4.4 step 2. `k` carries only the secret and hidden part of
    /// the commitment (see [`crate::requester::Requester::el_passo_prove_id`]),
    /// so the plaintext attributes play no role in this reconstruction.
    fn reconstruct_k_blind(&self, proof: &IdProof<E>, hidden_indices: &[usize], r_t: E::Fr, r_m: &[E::Fr]) -> E::G2Affine {
        let mut bases = Vec::with_capacity(3 + hidden_indices.len());
        let mut scalars = Vec::with_capacity(3 + hidden_indices.len());

        bases.push(self.pk.yyi[0]);
        scalars.push(r_t);
        for (idx, r) in hidden_indices.iter().zip(r_m.iter()) {
            bases.push(self.pk.yyi[idx + 1]);
            scalars.push(*r);
        }
        bases.push(proof.k);
        scalars.push(-proof.c);
        bases.push(self.pk.xx);
        scalars.push(proof.c);
        variable_base_msm(&bases, &scalars).into_affine()
    }

    /// `K = k + sum_plain YYi[i+1]*H(attr)`: folds the public plaintext
    /// terms back into the prover's secret+hidden commitment so the result
    /// covers every attribute the credential was actually signed over.
    /// Mirrors `prepare_hybrid_verification` in the original PS verifier.
    fn prepare_hybrid_verification(&self, proof: &IdProof<E>) -> E::G2Affine {
        let mut bases = Vec::new();
        let mut scalars = Vec::new();
        for (i, attr) in proof.attrs.iter().enumerate() {
            if !attr.is_empty() {
                bases.push(self.pk.yyi[i + 1]);
                scalars.push(hash_attribute::<E>(attr));
            }
        }
        (proof.k.into_projective() + variable_base_msm(&bases, &scalars)).into_affine()
    }

    /// `phi_blind' = hash_to_G1(service_name)*r_t - phi*c` from spec §4.4 step 3.
    fn reconstruct_phi_blind(&self, proof: &IdProof<E>, service_name: &[u8], r_t: E::Fr) -> E::G1Affine {
        let base = service_pseudonym_base::<E>(service_name);
        (base.mul(r_t) - proof.phi.mul(proof.c)).into_affine()
    }
}
