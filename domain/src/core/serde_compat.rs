//! Lenient field deserializers.
//!
//! Record files written by the earlier tool contain `null` wherever a field
//! was never assigned (most often `SemesterName` and `Year`). These helpers
//! read such values as the type's default instead of failing the whole load.

use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
///
/// Combine with `#[serde(default)]` so a missing field behaves the same way.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_null_reads_as_default() {
        let sample: Sample = serde_json::from_str(r#"{"name": null, "tags": null}"#).unwrap();
        assert_eq!(sample.name, "");
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_missing_reads_as_default() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.name, "");
    }

    #[test]
    fn test_present_value_kept() {
        let sample: Sample = serde_json::from_str(r#"{"name": "Fall", "tags": ["a"]}"#).unwrap();
        assert_eq!(sample.name, "Fall");
        assert_eq!(sample.tags, vec!["a".to_string()]);
    }
}
