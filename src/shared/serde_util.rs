//! Custom serde helpers for backend wire formats.

/// (De)serializes a string-encoded integer into `u64`.
///
/// The historical endpoints preserve Alpha Vantage's habit of sending every
/// numeric field as a JSON string, volume included (`"5. volume": "48423011"`).
pub mod u64_str {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid integer string: {:?}", s)))
    }

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(with = "super::u64_str")]
        volume: u64,
    }

    #[test]
    fn test_u64_str_round_trip() {
        let w: Wrapper = serde_json::from_str(r#"{"volume":"48423011"}"#).unwrap();
        assert_eq!(w.volume, 48_423_011);
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"volume":"48423011"}"#);
    }

    #[test]
    fn test_u64_str_rejects_non_numeric() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"volume":"n/a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_u64_str_rejects_bare_number() {
        // The backend always quotes volumes; a bare number is a shape change.
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"volume":48423011}"#);
        assert!(result.is_err());
    }
}
