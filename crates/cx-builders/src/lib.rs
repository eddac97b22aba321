//! CX Builders
//!
//! Incremental construction of conversational-agent [`Intent`]s without
//! hand-assembling the nested phrase/part/parameter graph.
//!
//! # Overview
//!
//! - **IntentBuilder**: owns one intent at a time and appends phrases, parameters and labels
//! - **ParameterValidator**: checks that annotated parameter ids are declared exactly once
//! - **Labels**: mapping or tag-list label input
//! - **BuilderConfig**: default priority and repeat count
//!
//! # Example
//!
//! ```rust
//! use cx_builders::{BuilderError, IntentBuilder, ParameterOptions};
//!
//! let mut builder = IntentBuilder::new();
//! builder.create_empty_intent("weather");
//! builder.add_training_phrase(&["weather in ", "Paris"], &["", "city"])?;
//!
//! // Annotations are only checked on request
//! assert!(matches!(
//!     builder.validate_parameters(),
//!     Err(BuilderError::DanglingParameter { .. })
//! ));
//!
//! builder.add_parameter_with(ParameterOptions::new("city", "@sys.geo-city").with_list(true))?;
//! builder.validate_parameters()?;
//! # Ok::<(), BuilderError>(())
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod error;
mod input;
mod validation;

pub use builder::{build_intent, IntentBuilder, IntentOptions, ParameterOptions, NO_ANNOTATIONS};
pub use config::BuilderConfig;
pub use error::BuilderError;
pub use input::Labels;
pub use validation::ParameterValidator;

pub use cx_types::{Intent, Parameter, Part, TrainingPhrase};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for intent building
    pub use crate::{
        build_intent, BuilderConfig, BuilderError, Intent, IntentBuilder, IntentOptions, Labels,
        Parameter, ParameterOptions, ParameterValidator, Part, TrainingPhrase, NO_ANNOTATIONS,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
