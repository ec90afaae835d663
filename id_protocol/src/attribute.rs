//! A single credential attribute slot (spec §3 `Attribute`): a plaintext
//! value and whether the Signer is allowed to see it. Order within an
//! attribute vector is part of the contract between issuer and verifier —
//! it is never reordered by this crate.

/// Slot zero of every credential is reserved for the user's master secret
/// `t` and is never represented as an `Attribute`; `Attribute` vectors only
/// ever cover the `L` real attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub value: String,
    pub hidden: bool,
}

impl Attribute {
    pub fn hidden(value: impl Into<String>) -> Self {
        Self { value: value.into(), hidden: true }
    }

    pub fn plaintext(value: impl Into<String>) -> Self {
        Self { value: value.into(), hidden: false }
    }
}
