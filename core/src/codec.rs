//! Payload (de)serialization between wire text and typed values.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::DecodeError;

/// Converts response bodies into the return type a method declares.
///
/// `encode` is the inverse and exists so callers and tests can produce
/// payloads the pipeline will accept.
pub trait Codec: Send + Sync {
    fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T, DecodeError>;

    fn encode<T: Serialize>(&self, value: &T) -> Result<String, DecodeError>;
}

/// JSON codec on `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode<T: DeserializeOwned>(&self, body: &str) -> Result<T, DecodeError> {
        serde_json::from_str(body).map_err(|e| DecodeError(e.to_string()))
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<String, DecodeError> {
        serde_json::to_string(value).map_err(|e| DecodeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn decodes_an_object() {
        let p: Point = JsonCodec.decode(r#"{"x":1,"y":-2}"#).unwrap();
        assert_eq!(p, Point { x: 1, y: -2 });
    }

    #[test]
    fn decodes_a_list() {
        let v: Vec<u8> = JsonCodec.decode("[1,2,3]").unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = JsonCodec.decode::<Point>("not json").unwrap_err();
        assert!(err.0.contains("expected"), "{err}");
    }

    #[test]
    fn schema_mismatch_is_a_decode_error() {
        assert!(JsonCodec.decode::<Point>(r#"{"x":"one","y":2}"#).is_err());
        assert!(JsonCodec.decode::<Point>(r#"{"x":1}"#).is_err());
    }
}
