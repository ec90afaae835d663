//! Pointcheval-Sanders randomizable blind signatures over a pairing-friendly
//! curve: key generation ([`setup`]) and the signature pair plus its
//! verification/randomization equation ([`signature`]), plus an optional
//! Schnorr proof that a published [`PublicKey`] was honestly derived from
//! a held [`SecretKey`] ([`key_proof`]). This crate knows nothing about
//! attributes, hiding, or the ProveID/VerifyID NIZK — those live in
//! `id_protocol`, which depends on this crate the way a protocol depends
//! on its underlying signature scheme.

pub mod error;
pub mod hashing;
pub mod key_proof;
pub mod setup;
pub mod signature;
pub mod wire;

pub use error::PSError;
pub use key_proof::PublicKeyWellFormedProof;
pub use setup::{key_gen, PublicKey, SecretKey};
pub use signature::Credential;

/// Idempotent, process-wide curve initialization hook (spec §5/§9). Kept as
/// a public entry point for API parity with pairing libraries that need a
/// one-shot global setup; `arkworks` needs none, so this is a guarded no-op.
pub fn init_pairing() {
    static ONCE: std::sync::Once = std::sync::Once::new();
    ONCE.call_once(|| {
        tracing::trace!(target: "ps_signature", "curve initialization (no-op for arkworks)");
    });
}
