//! EL PASSO identity protocol: the Signer (IdP), Requester (User), and
//! Verifier (Relying Party) roles built on top of [`ps_signature`]'s PS
//! signatures, plus the messages they exchange (`SignRequest`, `IdProof`)
//! and the ProveID/VerifyID NIZK that binds a presented credential to a
//! service-scoped pseudonym and, optionally, an ElGamal accountability
//! ciphertext.
//!
//! Wiring: `Signer::key_gen` produces a `PublicKey` both `Requester` and
//! `Verifier` are constructed from. `Requester::generate_request` and
//! `Signer::sign_cred_request` exchange a [`SignRequest`]; the resulting
//! `Credential` is presented to a Relying Party as an [`IdProof`] via
//! `Requester::el_passo_prove_id`, checked with
//! `Verifier::el_passo_verify_id`.

pub mod accountability;
pub mod attribute;
pub mod error;
pub mod hashing;
pub mod id_proof;
pub(crate) mod prove_id_transcript;
pub mod requester;
pub mod sign_request;
pub mod signer;
pub mod verifier;

pub use accountability::AccountabilityParams;
pub use attribute::Attribute;
pub use error::IdProtocolError;
pub use id_proof::IdProof;
pub use requester::Requester;
pub use sign_request::SignRequest;
pub use signer::Signer;
pub use verifier::Verifier;
