//! CX Resource Types
//!
//! The `Intent` resource model shared by the builders.
//!
//! # Core Concepts
//!
//! - [`Intent`]: Display name, priority, labels, parameters and training phrases
//! - [`TrainingPhrase`]: One example utterance split into [`Part`]s
//! - [`Parameter`]: A typed slot that annotated parts refer to by id
//!
//! # Example
//!
//! ```rust
//! use cx_types::{Intent, Part, TrainingPhrase};
//!
//! let mut intent = Intent::new("weather");
//! intent.training_phrases.push(TrainingPhrase::new(
//!     vec![Part::text("weather in "), Part::new("Paris", "city")],
//!     1,
//! ));
//!
//! assert_eq!(intent.training_phrases[0].text(), "weather in Paris");
//! assert!(intent.referenced_parameter_ids().contains("city"));
//! ```

#![warn(unreachable_pub)]

mod error;
mod intent;

pub use error::ModelError;
pub use intent::{
    Intent, Parameter, Part, TrainingPhrase, DEFAULT_PRIORITY, DEFAULT_REPEAT_COUNT,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
