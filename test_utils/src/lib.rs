//! Test-only helpers shared by every crate in the workspace: a seeded RNG
//! constructor and a pair of round-trip macros, one for `ark_serialize`
//! types and one for the native tagged wire codec.

use ark_std::rand::{rngs::StdRng, SeedableRng};

/// A deterministic RNG, seeded so that a failing test is reproducible
/// without `--test-threads=1` or recording the RNG state.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Checks that `value` survives an `ark_serialize` round trip, both in the
/// uncompressed canonical form and (when the type supports it) with
/// `serialize_unchecked`/`deserialize_unchecked`.
#[macro_export]
macro_rules! test_serialization {
    ($type:ty, $value:expr) => {
        let mut bytes = vec![];
        ark_serialize::CanonicalSerialize::serialize(&$value, &mut bytes).unwrap();
        let de: $type = ark_serialize::CanonicalDeserialize::deserialize(&bytes[..]).unwrap();
        assert_eq!(de, $value);

        let mut bytes = vec![];
        ark_serialize::CanonicalSerialize::serialize_unchecked(&$value, &mut bytes).unwrap();
        let de: $type = ark_serialize::CanonicalDeserialize::deserialize_unchecked(&bytes[..]).unwrap();
        assert_eq!(de, $value);

        let mut bytes = vec![];
        ark_serialize::CanonicalSerialize::serialize_uncompressed(&$value, &mut bytes).unwrap();
        let de: $type = ark_serialize::CanonicalDeserialize::deserialize_uncompressed(&bytes[..]).unwrap();
        assert_eq!(de, $value);
    };
}

/// Checks that `$value` survives an `encode`/`decode` round trip through the
/// native wire codec, where `$encode`/`$decode` are the message type's own
/// `to_bytes`/`from_bytes` (or `to_base64`/`from_base64`) pair.
#[macro_export]
macro_rules! test_wire_roundtrip {
    ($value:expr, $encode:expr, $decode:expr) => {{
        let encoded = $encode(&$value);
        let decoded = $decode(&encoded).unwrap();
        assert_eq!(decoded, $value);
        encoded
    }};
}
