use el_passo_codec::Error as CodecError;
use ps_signature::PSError;

/// Failure kinds from spec §7 raised by the identity protocol layer.
/// Wire-format failures are forwarded from [`el_passo_codec`]; PS-signature
/// key-shape failures are forwarded from [`ps_signature`].
#[derive(thiserror::Error, Debug)]
pub enum IdProtocolError {
    #[error("expected {expected} attributes, got {got}")]
    AttributeCountMismatch { expected: usize, got: usize },

    #[error("NIZK challenge did not match, or the pairing verification equation failed")]
    ProofRejected,

    #[error("a group element required to be non-identity was the identity point")]
    IdentityPoint,

    #[error("accountability requires the first attribute slot to be hidden")]
    AccountabilityRequiresFirstHidden,

    #[error("wire encoding error: {0}")]
    Codec(#[from] CodecError),

    #[error("PS signature error: {0}")]
    PSSignature(#[from] PSError),

    #[error("group/field element encoding is invalid: {0}")]
    Serialization(#[from] ark_serialize::SerializationError),
}
