//! Tagged binary wire format shared by the PS-signature and identity
//! protocol crates: a tag byte per element kind, a varint length prefix,
//! and a base64 wrapper for transport. Concrete message types (public
//! keys, credentials, sign requests, proofs) build their own
//! encode/decode on top of the primitives here; this crate only knows
//! about tags, lengths, and raw group/field elements.

pub mod base64_wrap;
pub mod buffer;
pub mod error;
pub mod tag;
pub mod varint;

pub use base64_wrap::{from_base64, to_base64};
pub use buffer::{append_element, append_list, append_str_list, parse_element, parse_list, parse_str_list};
pub use error::Error;
pub use tag::Tag;
pub use varint::{append_var, parse_var};
