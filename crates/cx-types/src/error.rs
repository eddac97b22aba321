//! Errors raised while reading or writing intent documents

/// Intent document errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Document is not valid JSON or does not match the intent shape
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Document is not valid YAML or does not match the intent shape
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Intent could not be rendered
    #[error("serialization failed: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_error_display() {
        let err = ModelError::Serialization("bad map key".to_string());
        assert_eq!(err.to_string(), "serialization failed: bad map key");
    }

    #[test]
    fn json_error_converts() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ModelError = source.into();
        assert!(matches!(err, ModelError::InvalidJson(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
