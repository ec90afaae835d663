use el_passo_codec::Error as CodecError;

/// Failure kinds from spec §7, restricted to the ones this crate can raise:
/// malformed keys/requests and failed proofs/verification. Wire-format
/// failures are forwarded from [`el_passo_codec`] rather than duplicated.
#[derive(thiserror::Error, Debug)]
pub enum PSError {
    #[error("public key shape is invalid: {0}")]
    InvalidKeyShape(&'static str),

    #[error("expected {expected} attributes, got {got}")]
    AttributeCountMismatch { expected: usize, got: usize },

    #[error("proof of knowledge of the request opening was rejected")]
    ProofRejected,

    #[error("a group element required to be non-identity was the identity point")]
    IdentityPoint,

    #[error("wire encoding error: {0}")]
    Codec(#[from] CodecError),
}
