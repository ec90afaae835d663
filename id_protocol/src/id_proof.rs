//! The message a User presents to a Relying Party (spec §3 `IdProof`): a
//! randomized credential, a verification commitment `k`, a service-scoped
//! pseudonym `phi`, a joint NIZK over the hidden attributes (and
//! optionally the user secret's accountability ciphertext), and the
//! plaintext attributes in clear.

use ark_ec::PairingEngine;
use el_passo_codec::{append_element, append_list, append_str_list, from_base64, parse_element, parse_list, parse_str_list, to_base64, Tag};
use el_passo_crypto_utils::elgamal::Ciphertext;
use el_passo_crypto_utils::serde_utils::{AffineGroupBytes, FieldBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::error::IdProtocolError;

#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IdProof<E: PairingEngine> {
    #[serde_as(as = "AffineGroupBytes")]
    pub sig1: E::G1Affine,
    #[serde_as(as = "AffineGroupBytes")]
    pub sig2: E::G1Affine,
    #[serde_as(as = "AffineGroupBytes")]
    pub k: E::G2Affine,
    #[serde_as(as = "AffineGroupBytes")]
    pub phi: E::G1Affine,
    #[serde_as(as = "FieldBytes")]
    pub c: E::Fr,
    #[serde_as(as = "Vec<FieldBytes>")]
    pub rs: Vec<E::Fr>,
    pub attrs: Vec<String>,
    pub accountability: Option<Ciphertext<E::G1Affine>>,
}

impl<E: PairingEngine> IdProof<E> {
    /// Wire layout of spec §6: `G1 sig1 | G1 sig2 | G2 k | G1 phi | Fr c |
    /// FrList rs | StrList attrs | [optional: G1 E1 | G1 E2]`. Presence of
    /// `E1/E2` is inferred from whether bytes remain after `attrs` — there
    /// is no explicit presence flag on the wire.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IdProtocolError> {
        let mut buf = Vec::new();
        append_element(&mut buf, Tag::G1, true, &self.sig1)?;
        append_element(&mut buf, Tag::G1, true, &self.sig2)?;
        append_element(&mut buf, Tag::G2, true, &self.k)?;
        append_element(&mut buf, Tag::G1, true, &self.phi)?;
        append_element(&mut buf, Tag::Fr, true, &self.c)?;
        append_list(&mut buf, Tag::FrList, true, &self.rs)?;
        append_str_list(&mut buf, true, &self.attrs)?;
        if let Some(ct) = &self.accountability {
            append_element(&mut buf, Tag::G1, true, &ct.eph_pk)?;
            append_element(&mut buf, Tag::G1, true, &ct.encrypted)?;
        }
        Ok(buf)
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, IdProtocolError> {
        let mut pos = 0;
        let (sig1, n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
        pos += n;
        let (sig2, n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
        pos += n;
        let (k, n): (E::G2Affine, usize) = parse_element(buf, pos, Tag::G2, true)?;
        pos += n;
        let (phi, n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
        pos += n;
        let (c, n): (E::Fr, usize) = parse_element(buf, pos, Tag::Fr, true)?;
        pos += n;
        let (rs, n): (Vec<E::Fr>, usize) = parse_list(buf, pos, Tag::FrList, true)?;
        pos += n;
        let (attrs, n) = parse_str_list(buf, pos, true)?;
        pos += n;

        let accountability = if pos < buf.len() {
            let (eph_pk, n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
            pos += n;
            let (encrypted, _n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
            Some(Ciphertext { eph_pk, encrypted })
        } else {
            None
        };

        Ok(Self { sig1, sig2, k, phi, c, rs, attrs, accountability })
    }

    pub fn to_base64(&self) -> Result<String, IdProtocolError> {
        Ok(to_base64(&self.to_bytes()?))
    }

    pub fn from_base64(s: &str) -> Result<Self, IdProtocolError> {
        Self::from_bytes(&from_base64(s)?)
    }

    /// Drops the accountability ciphertext and its sub-proof, yielding a
    /// proof verifiable with [`crate::verifier::Verifier::el_passo_verify_id_without_id_retrieval`].
    pub fn without_id_retrieval(&self) -> Self {
        Self { accountability: None, ..self.clone() }
    }
}
