//! The user's blind-signing request (spec §3 `SignRequest`, §4.3
//! `generate_request`): a Pedersen-style commitment to the user secret and
//! hidden attributes, plus a Fiat-Shamir proof that it opens correctly.
//! Plaintext attribute slots travel as their cleartext value; hidden slots
//! travel as the empty string — that emptiness, not a separate flag, is how
//! the Signer later recovers which responses in `rs` belong to which slot.

use ark_ec::PairingEngine;
use el_passo_codec::{append_element, append_list, append_str_list, from_base64, parse_element, parse_list, parse_str_list, to_base64, Tag};
use el_passo_crypto_utils::serde_utils::{AffineGroupBytes, FieldBytes};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::error::IdProtocolError;

#[serde_as]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignRequest<E: PairingEngine> {
    #[serde_as(as = "AffineGroupBytes")]
    pub a: E::G1Affine,
    #[serde_as(as = "FieldBytes")]
    pub c: E::Fr,
    #[serde_as(as = "Vec<FieldBytes>")]
    pub rs: Vec<E::Fr>,
    pub attrs: Vec<String>,
}

impl<E: PairingEngine> SignRequest<E> {
    /// Wire layout of spec §6: `G1 A | Fr c | FrList rs | StrList attrs`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IdProtocolError> {
        let mut buf = Vec::new();
        append_element(&mut buf, Tag::G1, true, &self.a)?;
        append_element(&mut buf, Tag::Fr, true, &self.c)?;
        append_list(&mut buf, Tag::FrList, true, &self.rs)?;
        append_str_list(&mut buf, true, &self.attrs)?;
        Ok(buf)
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, IdProtocolError> {
        let mut pos = 0;
        let (a, n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
        pos += n;
        let (c, n): (E::Fr, usize) = parse_element(buf, pos, Tag::Fr, true)?;
        pos += n;
        let (rs, n): (Vec<E::Fr>, usize) = parse_list(buf, pos, Tag::FrList, true)?;
        pos += n;
        let (attrs, _n) = parse_str_list(buf, pos, true)?;
        Ok(Self { a, c, rs, attrs })
    }

    pub fn to_base64(&self) -> Result<String, IdProtocolError> {
        Ok(to_base64(&self.to_bytes()?))
    }

    pub fn from_base64(s: &str) -> Result<Self, IdProtocolError> {
        Self::from_bytes(&from_base64(s)?)
    }
}
