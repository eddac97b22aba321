//! Intent Builder
//!
//! Holds at most one intent and grows it incrementally: training phrases,
//! parameters and labels are appended to whichever intent was last created or
//! loaded.

use cx_types::{Intent, Parameter, Part, TrainingPhrase};
use serde_json::Value;

use crate::config::BuilderConfig;
use crate::error::BuilderError;
use crate::input::{strings_from_values, Labels};
use crate::validation::ParameterValidator;

/// Empty annotation list, for phrases with no annotated parts
pub const NO_ANNOTATIONS: &[&str] = &[];

/// Fields of a new intent beyond its display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentOptions {
    display_name: String,
    priority: Option<i32>,
    is_fallback: bool,
    description: Option<String>,
}

impl IntentOptions {
    /// Options with the configured default priority, not a fallback, no description
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            priority: None,
            is_fallback: false,
            description: None,
        }
    }

    /// With priority
    #[inline]
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// With fallback flag
    #[inline]
    #[must_use]
    pub fn with_fallback(mut self, is_fallback: bool) -> Self {
        self.is_fallback = is_fallback;
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Fields of a new parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterOptions {
    id: String,
    entity_type: String,
    is_list: bool,
    redact: bool,
}

impl ParameterOptions {
    /// Single-valued, unredacted parameter
    #[must_use]
    pub fn new(id: impl Into<String>, entity_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            is_list: false,
            redact: false,
        }
    }

    /// With list flag
    #[inline]
    #[must_use]
    pub fn with_list(mut self, is_list: bool) -> Self {
        self.is_list = is_list;
        self
    }

    /// With redact flag
    #[inline]
    #[must_use]
    pub fn with_redact(mut self, redact: bool) -> Self {
        self.redact = redact;
        self
    }
}

impl From<ParameterOptions> for Parameter {
    fn from(options: ParameterOptions) -> Self {
        Self {
            id: options.id,
            entity_type: options.entity_type,
            is_list: options.is_list,
            redact: options.redact,
        }
    }
}

/// Builder for incrementally assembling an [`Intent`]
///
/// Usage:
/// ```rust
/// use cx_builders::IntentBuilder;
///
/// let mut builder = IntentBuilder::new();
/// builder.create_empty_intent("book_flight");
/// builder.add_training_phrase(&["one way", " ticket to ", "LAX"], &["flight_type", "", "city"])?;
/// builder.add_parameter("flight_type", "@flight-type")?;
/// builder.add_parameter("city", "@sys.geo-city")?;
/// builder.add_label(["travel"])?;
/// builder.validate_parameters()?;
///
/// let intent = builder.into_intent().unwrap();
/// assert_eq!(intent.training_phrases[0].text(), "one way ticket to LAX");
/// # Ok::<(), cx_builders::BuilderError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntentBuilder {
    intent: Option<Intent>,
    config: BuilderConfig,
    validator: ParameterValidator,
}

impl IntentBuilder {
    /// Create a builder with no intent and default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom configuration
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn with_config(config: BuilderConfig) -> Result<Self, BuilderError> {
        config.validate()?;
        Ok(Self {
            intent: None,
            config,
            validator: ParameterValidator::new(),
        })
    }

    /// Get the configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Whether an intent is currently owned
    #[inline]
    #[must_use]
    pub fn has_intent(&self) -> bool {
        self.intent.is_some()
    }

    /// Get the owned intent
    #[inline]
    #[must_use]
    pub fn intent(&self) -> Option<&Intent> {
        self.intent.as_ref()
    }

    /// Get the owned intent mutably
    #[inline]
    pub fn intent_mut(&mut self) -> Option<&mut Intent> {
        self.intent.as_mut()
    }

    /// Hand the owned intent to the caller, leaving the builder empty
    #[inline]
    pub fn take(&mut self) -> Option<Intent> {
        self.intent.take()
    }

    /// Consume the builder, returning the owned intent
    #[inline]
    #[must_use]
    pub fn into_intent(self) -> Option<Intent> {
        self.intent
    }

    /// Create an intent with the configured default priority
    ///
    /// Replaces any intent already owned.
    pub fn create_empty_intent(&mut self, display_name: impl Into<String>) -> &mut Intent {
        self.create_intent(IntentOptions::new(display_name))
    }

    /// Create an intent from options
    ///
    /// Replaces any intent already owned; its phrases, parameters and labels
    /// are discarded.
    pub fn create_intent(&mut self, options: IntentOptions) -> &mut Intent {
        let mut intent = Intent::new(options.display_name);
        intent.priority = options.priority.unwrap_or(self.config.default_priority);
        intent.is_fallback = options.is_fallback;
        intent.description = options.description;

        if let Some(previous) = &self.intent {
            tracing::debug!(
                "Replacing intent {} with {}",
                previous.display_name,
                intent.display_name
            );
        }
        tracing::debug!("Created intent {}", intent.display_name);

        self.intent.insert(intent)
    }

    /// Adopt an existing intent for further changes
    ///
    /// Replaces any intent already owned.
    pub fn load_intent(&mut self, intent: Intent) -> &mut Intent {
        tracing::debug!(
            "Loaded intent {} ({} phrases, {} parameters)",
            intent.display_name,
            intent.training_phrases.len(),
            intent.parameters.len()
        );
        self.intent.insert(intent)
    }

    /// Parse a JSON document and adopt it
    ///
    /// # Errors
    /// Returns error if the document is not a valid intent; the owned intent is kept
    pub fn load_intent_json(&mut self, json: &str) -> Result<&mut Intent, BuilderError> {
        let intent = Intent::from_json(json)?;
        Ok(self.load_intent(intent))
    }

    /// Parse a YAML document and adopt it
    ///
    /// # Errors
    /// Returns error if the document is not a valid intent; the owned intent is kept
    pub fn load_intent_yaml(&mut self, yaml: &str) -> Result<&mut Intent, BuilderError> {
        let intent = Intent::from_yaml(yaml)?;
        Ok(self.load_intent(intent))
    }

    /// Add a training phrase with the configured default repeat count
    ///
    /// See [`add_training_phrase_repeated`](Self::add_training_phrase_repeated).
    ///
    /// # Errors
    /// Same as [`add_training_phrase_repeated`](Self::add_training_phrase_repeated)
    pub fn add_training_phrase<P, A>(
        &mut self,
        phrase: &[P],
        annotations: &[A],
    ) -> Result<&mut Intent, BuilderError>
    where
        P: AsRef<str>,
        A: AsRef<str>,
    {
        let repeat_count = self.config.default_repeat_count;
        self.add_training_phrase_repeated(phrase, annotations, repeat_count)
    }

    /// Add a training phrase
    ///
    /// `phrase` holds the text of each part and `annotations` the parameter id
    /// of each part, position by position. Missing trailing annotations are
    /// treated as empty (unannotated). The caller's slices are not modified.
    ///
    /// ```rust
    /// # use cx_builders::IntentBuilder;
    /// let mut builder = IntentBuilder::new();
    /// builder.create_empty_intent("book_flight");
    /// let intent = builder.add_training_phrase_repeated(
    ///     &["I'd like to buy a ", "one way", " ticket"],
    ///     &["", "flight_type"],
    ///     2,
    /// )?;
    /// assert_eq!(intent.training_phrases[0].parts[2].parameter_id, "");
    /// # Ok::<(), cx_builders::BuilderError>(())
    /// ```
    ///
    /// # Errors
    /// - [`BuilderError::MissingIntent`] if no intent is owned
    /// - [`BuilderError::AnnotationLength`] if there are more annotations than parts
    /// - [`BuilderError::InvalidRepeatCount`] if `repeat_count` is zero
    pub fn add_training_phrase_repeated<P, A>(
        &mut self,
        phrase: &[P],
        annotations: &[A],
        repeat_count: u32,
    ) -> Result<&mut Intent, BuilderError>
    where
        P: AsRef<str>,
        A: AsRef<str>,
    {
        let intent = self.intent.as_mut().ok_or(BuilderError::MissingIntent)?;

        if annotations.len() > phrase.len() {
            return Err(BuilderError::AnnotationLength {
                annotations: annotations.len(),
                parts: phrase.len(),
            });
        }
        if repeat_count == 0 {
            return Err(BuilderError::InvalidRepeatCount(repeat_count));
        }

        let padding = std::iter::repeat("").take(phrase.len() - annotations.len());
        let texts = phrase.iter().map(|p| p.as_ref());
        let parameter_ids = annotations.iter().map(|a| a.as_ref()).chain(padding);
        let parts: Vec<Part> = texts
            .zip(parameter_ids)
            .map(|(text, parameter_id): (&str, &str)| Part::new(text, parameter_id))
            .collect();

        tracing::debug!(
            "Adding training phrase with {} parts to intent {}",
            parts.len(),
            intent.display_name
        );
        intent
            .training_phrases
            .push(TrainingPhrase::new(parts, repeat_count));

        Ok(intent)
    }

    /// Add a training phrase from loosely typed values
    ///
    /// # Errors
    /// - [`BuilderError::MissingIntent`] if no intent is owned
    /// - [`BuilderError::InvalidType`] if any element is not a string
    /// - otherwise as [`add_training_phrase_repeated`](Self::add_training_phrase_repeated)
    pub fn add_training_phrase_values(
        &mut self,
        phrase: &[Value],
        annotations: &[Value],
        repeat_count: u32,
    ) -> Result<&mut Intent, BuilderError> {
        if self.intent.is_none() {
            return Err(BuilderError::MissingIntent);
        }
        let phrase = strings_from_values("phrase", phrase)?;
        let annotations = strings_from_values("annotations", annotations)?;
        self.add_training_phrase_repeated(&phrase, &annotations, repeat_count)
    }

    /// Add a single-valued, unredacted parameter
    ///
    /// # Errors
    /// Returns [`BuilderError::MissingIntent`] if no intent is owned
    pub fn add_parameter(
        &mut self,
        parameter_id: impl Into<String>,
        entity_type: impl Into<String>,
    ) -> Result<&mut Intent, BuilderError> {
        self.add_parameter_with(ParameterOptions::new(parameter_id, entity_type))
    }

    /// Add a parameter from options
    ///
    /// Ids are not checked for uniqueness here; see
    /// [`validate_parameters`](Self::validate_parameters).
    ///
    /// # Errors
    /// Returns [`BuilderError::MissingIntent`] if no intent is owned
    pub fn add_parameter_with(
        &mut self,
        options: ParameterOptions,
    ) -> Result<&mut Intent, BuilderError> {
        let intent = self.intent.as_mut().ok_or(BuilderError::MissingIntent)?;

        let parameter = Parameter::from(options);
        tracing::debug!(
            "Adding parameter {} ({}) to intent {}",
            parameter.id,
            parameter.entity_type,
            intent.display_name
        );
        intent.parameters.push(parameter);

        Ok(intent)
    }

    /// Merge labels into the intent
    ///
    /// Existing keys are overwritten. Empty input leaves the labels untouched.
    ///
    /// # Errors
    /// Returns [`BuilderError::MissingIntent`] if no intent is owned
    pub fn add_label(&mut self, labels: impl Into<Labels>) -> Result<&mut Intent, BuilderError> {
        let intent = self.intent.as_mut().ok_or(BuilderError::MissingIntent)?;

        let labels = labels.into();
        if labels.is_empty() {
            return Ok(intent);
        }
        let pairs = labels.into_pairs();
        tracing::debug!(
            "Merging {} labels into intent {}",
            pairs.len(),
            intent.display_name
        );
        intent.labels.extend(pairs);

        Ok(intent)
    }

    /// Merge labels from a loosely typed value
    ///
    /// # Errors
    /// - [`BuilderError::MissingIntent`] if no intent is owned
    /// - [`BuilderError::InvalidType`] if `labels` is neither an object nor an array of strings
    pub fn add_label_value(&mut self, labels: Value) -> Result<&mut Intent, BuilderError> {
        if self.intent.is_none() {
            return Err(BuilderError::MissingIntent);
        }
        let labels = Labels::try_from(labels)?;
        self.add_label(labels)
    }

    /// Check that every annotated parameter id is declared exactly once
    ///
    /// # Errors
    /// - [`BuilderError::MissingIntent`] if no intent is owned
    /// - [`BuilderError::DanglingParameter`] naming the first undeclared id
    /// - [`BuilderError::DuplicateParameter`] naming the first repeated id
    pub fn validate_parameters(&self) -> Result<(), BuilderError> {
        let intent = self.intent.as_ref().ok_or(BuilderError::MissingIntent)?;
        self.validator.validate(intent).map_err(|e| {
            tracing::warn!("Intent {} failed validation: {}", intent.display_name, e);
            e
        })
    }
}

/// Build an intent with one unannotated training phrase per text
pub fn build_intent<I, S>(display_name: impl Into<String>, phrases: I) -> Intent
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut intent = Intent::new(display_name);
    intent.training_phrases = phrases
        .into_iter()
        .map(|text| TrainingPhrase::new(vec![Part::text(text)], 1))
        .collect();
    tracing::info!("intent {:?}", intent);
    intent
}
