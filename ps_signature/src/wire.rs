//! Tagged wire encoding for [`PublicKey`] and [`Credential`] (spec §6):
//! these are the two message types this crate owns on the wire. Every
//! other message type (`SignRequest`, `IdProof`) is encoded the same way
//! one level up, in `id_protocol`.

use ark_ec::PairingEngine;
use el_passo_codec::{append_element, append_list, from_base64, parse_element, parse_list, to_base64, Tag};

use crate::error::PSError;
use crate::setup::PublicKey;
use crate::signature::Credential;

impl<E: PairingEngine> PublicKey<E> {
    /// `G1 g | G2 gg | G2 XX | G1List Yi | G2List YYi`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PSError> {
        let mut buf = Vec::new();
        append_element(&mut buf, Tag::G1, true, &self.g)?;
        append_element(&mut buf, Tag::G2, true, &self.gg)?;
        append_element(&mut buf, Tag::G2, true, &self.xx)?;
        append_list(&mut buf, Tag::G1List, true, &self.yi)?;
        append_list(&mut buf, Tag::G2List, true, &self.yyi)?;
        Ok(buf)
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, PSError> {
        let mut pos = 0;
        let (g, n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
        pos += n;
        let (gg, n): (E::G2Affine, usize) = parse_element(buf, pos, Tag::G2, true)?;
        pos += n;
        let (xx, n): (E::G2Affine, usize) = parse_element(buf, pos, Tag::G2, true)?;
        pos += n;
        let (yi, n): (Vec<E::G1Affine>, usize) = parse_list(buf, pos, Tag::G1List, true)?;
        pos += n;
        let (yyi, _n): (Vec<E::G2Affine>, usize) = parse_list(buf, pos, Tag::G2List, true)?;
        let pk = Self { g, gg, xx, yi, yyi };
        pk.is_valid()?;
        Ok(pk)
    }

    pub fn to_base64(&self) -> Result<String, PSError> {
        Ok(to_base64(&self.to_bytes()?))
    }

    pub fn from_base64(s: &str) -> Result<Self, PSError> {
        Self::from_bytes(&from_base64(s)?)
    }
}

impl<E: PairingEngine> Credential<E> {
    /// `G1 sig1 | G1 sig2`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PSError> {
        let mut buf = Vec::new();
        append_element(&mut buf, Tag::G1, true, &self.sig1)?;
        append_element(&mut buf, Tag::G1, true, &self.sig2)?;
        Ok(buf)
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, PSError> {
        let mut pos = 0;
        let (sig1, n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
        pos += n;
        let (sig2, _n): (E::G1Affine, usize) = parse_element(buf, pos, Tag::G1, true)?;
        Ok(Self { sig1, sig2 })
    }

    pub fn to_base64(&self) -> Result<String, PSError> {
        Ok(to_base64(&self.to_bytes()?))
    }

    pub fn from_base64(s: &str) -> Result<Self, PSError> {
        Self::from_bytes(&from_base64(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::key_gen;
    use ark_bls12_381::Bls12_381;
    use ark_ec::AffineCurve;
    use ark_ff::UniformRand;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use test_utils::test_wire_roundtrip;

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
    fn public_key_wire_round_trips() {
        let mut rng = StdRng::seed_from_u64(20u64);
        let (g, gg) = gens();
        let (_, pk) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 3);
        test_wire_roundtrip!(pk, |p: &PublicKey<Bls12_381>| p.to_bytes().unwrap(), PublicKey::<Bls12_381>::from_bytes);
    }

    #[test]
    fn public_key_size_scales_linearly_with_attribute_count() {
        let mut rng = StdRng::seed_from_u64(21u64);
        let (g, gg) = gens();
        let (_, pk_small) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 3);
        let (_, pk_large) = key_gen::<Bls12_381, _>(&mut rng, g, gg, 20);

        let small = pk_small.to_bytes().unwrap();
        let large = pk_large.to_bytes().unwrap();
        assert!(large.len() > small.len());

        // Each extra attribute costs exactly one G1 + one G2 element.
        let g1_len = {
            let mut buf = Vec::new();
            append_element(&mut buf, Tag::G1, false, &g).unwrap();
            buf.len()
        };
        let g2_len = {
            let mut buf = Vec::new();
            append_element(&mut buf, Tag::G2, false, &gg).unwrap();
            buf.len()
        };
        let expected_delta = (20 - 3) * (g1_len + g2_len);
        assert_eq!(large.len() - small.len(), expected_delta);

        let decoded_small = PublicKey::<Bls12_381>::from_bytes(&small).unwrap();
        let decoded_large = PublicKey::<Bls12_381>::from_bytes(&large).unwrap();
        assert_eq!(decoded_small, pk_small);
        assert_eq!(decoded_large, pk_large);
    }

    #[test]
    fn credential_wire_and_base64_round_trip() {
        let mut rng = StdRng::seed_from_u64(22u64);
        let (g, _) = gens();
        let sig1 = g.mul(<Bls12_381 as PairingEngine>::Fr::rand(&mut rng)).into_affine();
        let sig2 = g.mul(<Bls12_381 as PairingEngine>::Fr::rand(&mut rng)).into_affine();
        let cred = Credential::<Bls12_381> { sig1, sig2 };

        test_wire_roundtrip!(
            cred,
            |c: &Credential<Bls12_381>| c.to_bytes().unwrap(),
            Credential::<Bls12_381>::from_bytes
        );

        let encoded = cred.to_base64().unwrap();
        let decoded = Credential::<Bls12_381>::from_base64(&encoded).unwrap();
        assert_eq!(decoded, cred);
    }
}
