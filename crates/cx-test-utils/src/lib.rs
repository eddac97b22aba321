//! Testing utilities for the CX builders workspace
//!
//! Shared fixtures and tracing setup.

#![allow(missing_docs)]

use cx_builders::IntentBuilder;
use cx_types::Intent;
use tracing_subscriber::EnvFilter;

/// Flight booking phrase from the platform documentation
pub const FLIGHT_PHRASE: [&str; 7] = [
    "one way",
    " ticket leaving ",
    "January 1",
    " to ",
    "LAX",
    " from ",
    "CDG",
];

pub const FLIGHT_ANNOTATIONS: [&str; 7] = [
    "flight_type",
    "",
    "departure_date",
    "",
    "arrival_city",
    "",
    "departure_city",
];

pub const FLIGHT_PARAMETERS: [(&str, &str); 4] = [
    ("flight_type", "@flight-type"),
    ("departure_date", "@sys.date"),
    ("arrival_city", "@sys.geo-city"),
    ("departure_city", "@sys.geo-city"),
];

/// Intent document in the platform's REST shape
pub const WEATHER_INTENT_JSON: &str = r#"{
  "name": "projects/p/locations/global/agents/a/intents/weather",
  "displayName": "weather",
  "priority": 300000,
  "trainingPhrases": [
    {
      "id": "tp-1",
      "parts": [
        {"text": "what's the weather in "},
        {"text": "Paris", "parameterId": "city"}
      ],
      "repeatCount": 2
    }
  ],
  "parameters": [
    {"id": "city", "entityType": "@sys.geo-city"}
  ],
  "labels": {"team": "travel"}
}"#;

/// Install a test subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn builder_with_intent(display_name: &str) -> IntentBuilder {
    let mut builder = IntentBuilder::new();
    builder.create_empty_intent(display_name);
    builder
}

/// Builder holding a fully annotated, fully declared flight booking intent
pub fn flight_booking_builder() -> IntentBuilder {
    let mut builder = builder_with_intent("book_flight");
    builder
        .add_training_phrase(&FLIGHT_PHRASE, &FLIGHT_ANNOTATIONS)
        .expect("fixture phrase is well formed");
    for (id, entity_type) in FLIGHT_PARAMETERS {
        builder
            .add_parameter(id, entity_type)
            .expect("fixture builder owns an intent");
    }
    builder
}

pub fn flight_booking_intent() -> Intent {
    flight_booking_builder()
        .into_intent()
        .expect("fixture builder owns an intent")
}
