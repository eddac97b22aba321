//! Parameter cross-reference validation
//!
//! Every non-empty `parameter_id` annotated in a training phrase must name a
//! declared parameter, and declared ids must be unique. Appending phrases or
//! parameters never runs this check; callers invoke it explicitly.

use cx_types::Intent;
use indexmap::IndexSet;

use crate::error::BuilderError;

/// Checks training-phrase annotations against declared parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterValidator;

impl ParameterValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate annotation references, then parameter id uniqueness
    ///
    /// # Returns
    /// - `Ok(())` if every annotation is declared exactly once
    /// - `Err(BuilderError::DanglingParameter)` for the first undeclared id, in phrase order
    /// - `Err(BuilderError::DuplicateParameter)` for the first id declared twice
    pub fn validate(&self, intent: &Intent) -> Result<(), BuilderError> {
        if let Some(missing) = Self::dangling_references(intent).into_iter().next() {
            return Err(BuilderError::DanglingParameter {
                parameter_id: missing,
            });
        }
        if let Some(duplicate) = Self::duplicate_parameters(intent).into_iter().next() {
            return Err(BuilderError::DuplicateParameter {
                parameter_id: duplicate,
            });
        }
        Ok(())
    }

    /// Annotated ids with no declared parameter, in first-seen order
    #[must_use]
    pub fn dangling_references(intent: &Intent) -> Vec<String> {
        let declared: IndexSet<&str> = intent.declared_parameter_ids().collect();
        intent
            .referenced_parameter_ids()
            .into_iter()
            .filter(|id| !declared.contains(id))
            .map(str::to_string)
            .collect()
    }

    /// Parameter ids declared more than once, each reported once
    #[must_use]
    pub fn duplicate_parameters(intent: &Intent) -> Vec<String> {
        let mut seen = IndexSet::new();
        let mut duplicates = IndexSet::new();
        for id in intent.declared_parameter_ids() {
            if !seen.insert(id) {
                duplicates.insert(id);
            }
        }
        duplicates.into_iter().map(str::to_string).collect()
    }
}
