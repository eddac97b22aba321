//! Error types for intent builders
//!
//! Every builder operation either completes or returns one of these before
//! touching the owned intent.

use cx_types::ModelError;

/// Builder error type
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// No intent has been created or loaded yet
    #[error("there is no intent to modify; create or load one to continue")]
    MissingIntent,

    /// Input value has the wrong type
    #[error("invalid type for {field}: expected {expected}, found {found}")]
    InvalidType {
        /// Which input was rejected
        field: &'static str,
        /// What was accepted
        expected: &'static str,
        /// What was supplied
        found: &'static str,
    },

    /// More annotations than phrase parts
    #[error("annotations list has {annotations} entries but the phrase only has {parts} parts")]
    AnnotationLength {
        /// Number of annotations supplied
        annotations: usize,
        /// Number of phrase parts supplied
        parts: usize,
    },

    /// A training phrase annotates a parameter that is not declared
    #[error("parameter_id {parameter_id} does not exist in parameters; add it with add_parameter to continue")]
    DanglingParameter {
        /// The undeclared parameter id
        parameter_id: String,
    },

    /// A parameter id is declared more than once
    #[error("parameter_id {parameter_id} is declared more than once")]
    DuplicateParameter {
        /// The repeated parameter id
        parameter_id: String,
    },

    /// Repeat count must be at least one
    #[error("repeat count must be at least 1, got {0}")]
    InvalidRepeatCount(u32),

    /// Intent document could not be read
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Builder configuration is invalid
    #[error("configuration error: {0}")]
    Config(String),
}

impl BuilderError {
    /// Whether the error comes from the parameter cross-reference check
    #[inline]
    #[must_use]
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            Self::DanglingParameter { .. } | Self::DuplicateParameter { .. }
        )
    }
}
