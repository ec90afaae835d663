//! Shared utilities for the EL PASSO crypto crates: hash-to-field/curve,
//! multi-scalar multiplication, an `ark_serialize` <-> `serde` bridge, and a
//! small two-generator ElGamal ciphertext used by the accountability
//! sub-protocol.

pub mod elgamal;
pub mod hashing_utils;
pub mod msm;
pub mod serde_utils;
pub mod transcript;
