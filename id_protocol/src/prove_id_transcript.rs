//! The canonical Fiat-Shamir transcript shared by `el_passo_prove_id` (spec
//! §4.3 step 6) and `el_passo_verify_id` (spec §4.4 step 5). Both sides
//! MUST feed the exact same values in the exact same order — this module
//! is the single place that order is written down, so prover and verifier
//! can never drift apart.

use ark_ec::PairingEngine;
use el_passo_crypto_utils::transcript::Transcript;
use ps_signature::PublicKey;

use crate::error::IdProtocolError;
use crate::hashing::DefaultDigest;

/// The accountability sub-proof's public transcript contribution, present
/// only when an `(E1, E2)` ciphertext is attached to the proof.
pub(crate) struct AccountabilityContribution<'a, E: PairingEngine> {
    pub authority_pk: &'a E::G1Affine,
    pub g_extra: &'a E::G1Affine,
    pub h_extra: &'a E::G1Affine,
    pub e1: &'a E::G1Affine,
    pub e2: &'a E::G1Affine,
    pub e1_blind: &'a E::G1Affine,
    pub e2_blind: &'a E::G1Affine,
}

/// Every public value folded into the ProveID/VerifyID challenge, in the
/// exact order spec §4.3 step 6 lists them.
pub(crate) struct ProveIdTranscript<'a, E: PairingEngine> {
    pub pk: &'a PublicKey<E>,
    pub sigma1: &'a E::G1Affine,
    pub sigma2: &'a E::G1Affine,
    pub k: &'a E::G2Affine,
    pub k_blind: &'a E::G2Affine,
    pub phi: &'a E::G1Affine,
    pub phi_blind: &'a E::G1Affine,
    pub attrs: &'a [String],
    pub associated_data: &'a [u8],
    pub service_name: &'a [u8],
    pub accountability: Option<AccountabilityContribution<'a, E>>,
}

impl<'a, E: PairingEngine> ProveIdTranscript<'a, E> {
    pub(crate) fn challenge(&self) -> Result<E::Fr, IdProtocolError> {
        let mut t = Transcript::new();
        t.append(&self.pk.g)?;
        t.append(&self.pk.gg)?;
        t.append(&self.pk.xx)?;
        t.append_many(&self.pk.yi)?;
        t.append_many(&self.pk.yyi)?;
        t.append(self.sigma1)?;
        t.append(self.sigma2)?;
        t.append(self.k)?;
        t.append(self.k_blind)?;
        t.append(self.phi)?;
        t.append(self.phi_blind)?;
        for attr in self.attrs {
            t.append_bytes(attr.as_bytes());
        }
        t.append_bytes(self.associated_data);
        t.append_bytes(self.service_name);
        if let Some(acc) = &self.accountability {
            t.append(acc.authority_pk)?;
            t.append(acc.g_extra)?;
            t.append(acc.h_extra)?;
            t.append(acc.e1)?;
            t.append(acc.e2)?;
            t.append(acc.e1_blind)?;
            t.append(acc.e2_blind)?;
        }
        Ok(t.challenge::<E::Fr, DefaultDigest>())
    }
}
