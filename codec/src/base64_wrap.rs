use crate::error::Error;

/// Wraps a raw wire buffer for transport, matching the original encoder's
/// use of standard base64 (with `=` padding) around every serialized
/// message.
pub fn to_base64(bytes: &[u8]) -> String {
    base64::encode(bytes)
}

pub fn from_base64(s: &str) -> Result<Vec<u8>, Error> {
    Ok(base64::decode(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_bytes() {
        let bytes = vec![0u8, 1, 2, 253, 254, 255, 10, 20, 30];
        let encoded = to_base64(&bytes);
        let decoded = from_base64(&encoded).unwrap();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(from_base64("not valid base64!!").is_err());
    }
}
