use ark_serialize::SerializationError;

/// Failures from parsing or building a wire buffer. Matches the
/// `InvalidEncoding` kind of spec §7; tests rely on `UnexpectedTag` and
/// `Truncated` being distinguishable, per §7's requirement.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expected wire tag {expected:?}, found {found:?}")]
    UnexpectedTag { expected: crate::tag::Tag, found: u8 },

    #[error("buffer ended before the expected field was fully read")]
    Truncated,

    #[error("varint value is out of the supported range (> 0xFFFF)")]
    VarintOutOfRange,

    #[error("unknown wire tag byte {0}")]
    UnknownTag(u8),

    #[error("attribute string is not valid UTF-8")]
    InvalidUtf8(#[from] core::str::Utf8Error),

    #[error("group/field element encoding is invalid: {0}")]
    ArkSerialization(#[from] SerializationError),

    #[error("base64 payload is malformed: {0}")]
    Base64(#[from] base64::DecodeError),
}
