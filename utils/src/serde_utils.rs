//! Bridges `ark_serialize`'s `CanonicalSerialize`/`CanonicalDeserialize` to
//! `serde`, via `serde_with`'s `SerializeAs`/`DeserializeAs`. Every public
//! type in `ps_signature` and `id_protocol` wraps its group/field members
//! with `#[serde_as(as = "...")]` using these converters instead of deriving
//! `serde::{Serialize, Deserialize}` directly on curve types (which don't
//! implement them) — the same pattern the teacher crate uses throughout
//! `bbs_plus::setup`.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::vec::Vec;
use serde::de::Error as DeError;
use serde::ser::Error as SerError;
use serde::{Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// `serde_as` adapter for any `CanonicalSerialize + CanonicalDeserialize`
/// scalar field element.
pub struct FieldBytes;

/// `serde_as` adapter for any `CanonicalSerialize + CanonicalDeserialize`
/// affine group element.
pub struct AffineGroupBytes;

macro_rules! impl_ark_serde_as {
    ($adapter:ident) => {
        impl<T: CanonicalSerialize> SerializeAs<T> for $adapter {
            fn serialize_as<S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
                let mut bytes = Vec::new();
                value
                    .serialize(&mut bytes)
                    .map_err(|e| S::Error::custom(format!("ark serialization failed: {}", e)))?;
                serializer.serialize_bytes(&bytes)
            }
        }

        impl<'de, T: CanonicalDeserialize> DeserializeAs<'de, T> for $adapter {
            fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
                let bytes = <Vec<u8>>::deserialize(deserializer)?;
                T::deserialize(&*bytes)
                    .map_err(|e| D::Error::custom(format!("ark deserialization failed: {}", e)))
            }
        }
    };
}

impl_ark_serde_as!(FieldBytes);
impl_ark_serde_as!(AffineGroupBytes);
