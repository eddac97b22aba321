//! Intent Resource Model
//!
//! Structural shape of the platform's `Intent` resource. Field names follow
//! the REST representation (camelCase) so documents exported by the platform
//! load without translation.

use std::collections::BTreeMap;
use std::fmt;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Priority given to intents that do not declare one
pub const DEFAULT_PRIORITY: i32 = 500_000;

/// Repeat count given to training phrases that do not declare one
pub const DEFAULT_REPEAT_COUNT: u32 = 1;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

fn default_repeat_count() -> u32 {
    DEFAULT_REPEAT_COUNT
}

/// A named matching rule with example phrases and extractable parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Resource name assigned by the platform, never set locally
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable name, unique within an agent
    pub display_name: String,

    /// Example utterances, in insertion order
    #[serde(default)]
    pub training_phrases: Vec<TrainingPhrase>,

    /// Declared parameters, in insertion order
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Matching priority; higher wins
    #[serde(default = "default_priority")]
    pub priority: i32,

    /// Whether this is a fallback intent
    #[serde(default)]
    pub is_fallback: bool,

    /// Free-form key/value tags
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Intent {
    /// Create an intent with default priority and no phrases, parameters or labels
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            name: None,
            display_name: display_name.into(),
            training_phrases: Vec::new(),
            parameters: Vec::new(),
            priority: DEFAULT_PRIORITY,
            is_fallback: false,
            labels: BTreeMap::new(),
            description: None,
        }
    }

    /// Parse from a JSON document
    ///
    /// # Errors
    /// Returns error if the document is not valid JSON or is not shaped like an intent
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(ModelError::InvalidJson)
    }

    /// Parse from a YAML document
    ///
    /// # Errors
    /// Returns error if the document is not valid YAML or is not shaped like an intent
    pub fn from_yaml(yaml: &str) -> Result<Self, ModelError> {
        serde_yaml::from_str(yaml).map_err(ModelError::InvalidYaml)
    }

    /// Render as pretty-printed JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self).map_err(|e| ModelError::Serialization(e.to_string()))
    }

    /// Non-empty parameter ids annotated in training phrases, in first-seen order
    #[must_use]
    pub fn referenced_parameter_ids(&self) -> IndexSet<&str> {
        self.training_phrases
            .iter()
            .flat_map(TrainingPhrase::parameter_ids)
            .collect()
    }

    /// Ids of declared parameters, in declaration order (duplicates kept)
    pub fn declared_parameter_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.parameters.iter().map(|p| p.id.as_str())
    }

    /// Look up a declared parameter by id
    #[must_use]
    pub fn parameter(&self, id: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.id == id)
    }
}

impl Default for Intent {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Intent: {}", self.display_name)?;
        writeln!(
            f,
            "  priority: {}  fallback: {}",
            self.priority, self.is_fallback
        )?;
        if let Some(description) = &self.description {
            writeln!(f, "  description: {description}")?;
        }
        if !self.labels.is_empty() {
            let labels: Vec<String> = self
                .labels
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            writeln!(f, "  labels: {}", labels.join(", "))?;
        }
        if !self.parameters.is_empty() {
            writeln!(f, "  parameters:")?;
            for param in &self.parameters {
                writeln!(f, "    - {param}")?;
            }
        }
        if !self.training_phrases.is_empty() {
            writeln!(f, "  training phrases:")?;
            for phrase in &self.training_phrases {
                writeln!(f, "    - {phrase}")?;
            }
        }
        Ok(())
    }
}

/// One example utterance, split into ordered parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPhrase {
    /// Identifier assigned by the platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Ordered text spans
    pub parts: Vec<Part>,

    /// How many times this example was added
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
}

impl TrainingPhrase {
    /// Create a phrase from its parts
    #[must_use]
    pub fn new(parts: Vec<Part>, repeat_count: u32) -> Self {
        Self {
            id: None,
            parts,
            repeat_count,
        }
    }

    /// Full utterance text
    #[must_use]
    pub fn text(&self) -> String {
        self.parts.iter().map(|p| p.text.as_str()).collect()
    }

    /// Parameter ids of annotated parts, in part order
    pub fn parameter_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.parts
            .iter()
            .filter(|p| p.is_annotated())
            .map(|p| p.parameter_id.as_str())
    }
}

impl fmt::Display for TrainingPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.repeat_count > 1 {
            write!(f, "(x{}) ", self.repeat_count)?;
        }
        for part in &self.parts {
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// A contiguous span of a training phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Span text
    pub text: String,

    /// Annotated parameter id; empty when the span is not annotated
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub parameter_id: String,
}

impl Part {
    /// Create a span annotated with `parameter_id` (empty for none)
    #[must_use]
    pub fn new(text: impl Into<String>, parameter_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameter_id: parameter_id.into(),
        }
    }

    /// Create an unannotated span
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, String::new())
    }

    /// Whether the span carries a parameter annotation
    #[inline]
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        !self.parameter_id.is_empty()
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_annotated() {
            write!(f, "[{}]({})", self.text, self.parameter_id)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// A named, typed slot extracted from matched text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Identifier referenced by part annotations
    pub id: String,

    /// Entity type reference, e.g. `@sys.geo-city`
    pub entity_type: String,

    /// Whether the parameter collects a list of values
    #[serde(default)]
    pub is_list: bool,

    /// Whether the value is hidden from logs
    #[serde(default)]
    pub redact: bool,
}

impl Parameter {
    /// Create a single-valued, unredacted parameter
    #[must_use]
    pub fn new(id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            is_list: false,
            redact: false,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.entity_type)?;
        if self.is_list {
            f.write_str(" [list]")?;
        }
        if self.redact {
            f.write_str(" [redacted]")?;
        }
        Ok(())
    }
}
