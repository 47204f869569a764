//! Deserialization helpers for API payloads.
//!
//! The API sends `null` for fields it has no value for. Paired with
//! `#[serde(default)]`, [`nullable`] makes an explicit `null` decode the same
//! way as an absent field:
//!
//! ```
//! use serde::Deserialize;
//! use solus_core::de::nullable;
//!
//! #[derive(Default, Deserialize)]
//! #[serde(default)]
//! struct Server {
//!     #[serde(deserialize_with = "nullable")]
//!     name: String,
//! }
//!
//! let server: Server = serde_json::from_str(r#"{"name": null}"#).unwrap();
//! assert!(server.name.is_empty());
//! ```

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`.
///
/// # Errors
///
/// Returns the deserializer's error when the value is neither `null` nor a
/// valid `T`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "nullable")]
        count: u64,
        #[serde(deserialize_with = "nullable")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_and_absent_decode_alike() {
        let from_null: Sample =
            serde_json::from_value(json!({"count": null, "tags": null})).unwrap();
        let from_absent: Sample = serde_json::from_value(json!({})).unwrap();
        assert_eq!(from_null, Sample::default());
        assert_eq!(from_absent, Sample::default());
    }

    #[test]
    fn test_present_values_are_kept() {
        let sample: Sample = serde_json::from_value(json!({"count": 3, "tags": ["a"]})).unwrap();
        assert_eq!(sample.count, 3);
        assert_eq!(sample.tags, vec!["a".to_string()]);
    }

    #[test]
    fn test_wrong_type_still_fails() {
        assert!(serde_json::from_value::<Sample>(json!({"count": "three"})).is_err());
    }
}
