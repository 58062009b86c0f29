//! Cache Value Module
//!
//! Values are opaque JSON blobs. Each tier owns its own copy: values are
//! serialized at the L2/L3 boundary and cloned into L1, never shared by
//! reference across tiers.
//!
//! JSON `null` doubles as the negative-result marker ("known absent"),
//! mirroring how absent lookups are dampened: a loader that finds nothing
//! still produces a short-lived `null` entry.

use serde_json::Value;

use crate::error::{CacheError, Result};

/// Opaque serializable blob stored by the cache.
pub type CacheValue = Value;

/// Marker cached in place of a value when the source of truth has no entry
/// for the key.
pub(crate) fn negative_marker() -> CacheValue {
    Value::Null
}

/// True if the cached value is the negative-result marker.
pub(crate) fn is_negative(value: &CacheValue) -> bool {
    value.is_null()
}

/// Serializes a value for storage in a shared tier.
pub(crate) fn encode(value: &CacheValue) -> Result<String> {
    serde_json::to_string(value).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Restores a value read back from a shared tier.
pub(crate) fn decode(payload: &str) -> Result<CacheValue> {
    serde_json::from_str(payload).map_err(|e| CacheError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_decode_round_trip() {
        let value = json!({"target": "https://example.com", "hops": 2});
        let payload = encode(&value).unwrap();
        assert_eq!(decode(&payload).unwrap(), value);
    }

    #[test]
    fn test_negative_marker_is_negative() {
        assert!(is_negative(&negative_marker()));
        assert!(!is_negative(&json!("present")));
        assert!(!is_negative(&json!(0)));
    }

    #[test]
    fn test_decode_garbage_is_serialization_error() {
        let result = decode("{not json");
        assert!(matches!(result, Err(CacheError::Serialization(_))));
    }
}
