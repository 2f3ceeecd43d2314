use serde::de::DeserializeOwned;
use thiserror::Error;

/// A deserialization failure with the JSON path it happened at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at JSON path {at} → {message}")]
pub struct PathError {
    pub at: String,
    pub message: String,
}

/// Deserialize with JSON-path context in error messages.
pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PathError> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(|err| PathError {
        at: err.path().to_string(),
        message: err.into_inner().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn syntax_error_reports_path() {
        let err = from_slice_with_path::<Value>(br#"{"keys": {"name": {"type": }}}"#).unwrap_err();
        assert!(err.at.starts_with("keys.name"), "{}", err.at);
        assert!(err.to_string().starts_with("at JSON path keys.name"), "{err}");
    }

    #[test]
    fn valid_document_parses() {
        let v = from_slice_with_path::<Value>(br#"{"type": "object"}"#).unwrap();
        assert_eq!(v, serde_json::json!({ "type": "object" }));
    }
}
