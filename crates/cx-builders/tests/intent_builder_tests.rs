//! End-to-end intent assembly through the public builder API

use cx_builders::prelude::*;
use cx_test_utils::{
    builder_with_intent, flight_booking_builder, flight_booking_intent, init_tracing,
    FLIGHT_PHRASE, WEATHER_INTENT_JSON,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_flight_booking_intent_is_consistent() {
    init_tracing();
    let builder = flight_booking_builder();

    assert!(builder.validate_parameters().is_ok());

    let intent = flight_booking_intent();
    let phrase = &intent.training_phrases[0];
    assert_eq!(phrase.parts.len(), FLIGHT_PHRASE.len());
    assert_eq!(phrase.text(), "one way ticket leaving January 1 to LAX from CDG");
    assert_eq!(
        phrase.parameter_ids().collect::<Vec<_>>(),
        vec!["flight_type", "departure_date", "arrival_city", "departure_city"]
    );
}

#[test]
fn test_short_annotations_leave_tail_unannotated() {
    let mut builder = builder_with_intent("book_flight");

    let intent = builder
        .add_training_phrase(&["I'd like to buy a ", "one way", " ticket"], &["", "flight_type"])
        .unwrap();

    assert_eq!(
        intent.training_phrases[0].parts,
        vec![
            Part::text("I'd like to buy a "),
            Part::new("one way", "flight_type"),
            Part::text(" ticket"),
        ]
    );
}

#[test]
fn test_dangling_reference_until_parameter_added() {
    init_tracing();
    let mut builder = builder_with_intent("weather");
    builder
        .add_training_phrase(&["weather in ", "Paris"], &["", "city"])
        .unwrap();
    assert!(builder.intent().unwrap().parameters.is_empty());

    let err = builder.validate_parameters().unwrap_err();
    assert!(err.to_string().contains("city"));
    assert!(err.is_reference_error());

    builder.add_parameter("city", "@sys.geo-city").unwrap();
    assert!(builder.validate_parameters().is_ok());
}

#[test]
fn test_duplicate_declaration_fails_validation() {
    let mut builder = flight_booking_builder();
    builder.add_parameter("arrival_city", "@sys.geo-city").unwrap();

    assert!(matches!(
        builder.validate_parameters(),
        Err(BuilderError::DuplicateParameter { parameter_id }) if parameter_id == "arrival_city"
    ));
}

#[test]
fn test_loaded_document_can_be_extended() {
    let mut builder = IntentBuilder::new();
    builder.load_intent_json(WEATHER_INTENT_JSON).unwrap();

    builder
        .add_training_phrase(&["forecast for ", "tomorrow"], &["", "date"])
        .unwrap();
    builder.add_parameter("date", "@sys.date").unwrap();
    builder.add_label(["weather"]).unwrap();
    builder.validate_parameters().unwrap();

    let intent = builder.into_intent().unwrap();
    assert_eq!(
        intent.name.as_deref(),
        Some("projects/p/locations/global/agents/a/intents/weather")
    );
    assert_eq!(intent.priority, 300_000);
    assert_eq!(intent.training_phrases.len(), 2);
    assert_eq!(intent.training_phrases[0].id.as_deref(), Some("tp-1"));
    assert_eq!(intent.training_phrases[0].repeat_count, 2);
    assert_eq!(
        intent.labels.into_iter().collect::<Vec<_>>(),
        vec![
            ("team".to_string(), "travel".to_string()),
            ("weather".to_string(), "weather".to_string()),
        ]
    );
}

#[test]
fn test_yaml_document_loads() {
    let mut builder = IntentBuilder::new();
    let intent = builder
        .load_intent_yaml("displayName: greeting\nisFallback: true\n")
        .unwrap();

    assert_eq!(intent.display_name, "greeting");
    assert!(intent.is_fallback);
    assert_eq!(intent.priority, 500_000);
}

#[test]
fn test_json_payload_labels_and_phrases() {
    let mut builder = builder_with_intent("support");

    builder.add_label_value(json!(["vip", "urgent"])).unwrap();
    builder.add_label_value(json!({"vip": "gold"})).unwrap();
    builder.add_label_value(json!(null)).unwrap();
    builder
        .add_training_phrase_values(&[json!("talk to "), json!("an agent")], &[json!("")], 1)
        .unwrap();

    let intent = builder.intent().unwrap();
    assert_eq!(intent.labels.get("vip").map(String::as_str), Some("gold"));
    assert_eq!(intent.labels.get("urgent").map(String::as_str), Some("urgent"));
    assert_eq!(intent.training_phrases[0].text(), "talk to an agent");

    assert!(matches!(
        builder.add_label_value(json!(true)),
        Err(BuilderError::InvalidType { field: "labels", found: "boolean", .. })
    ));
}

#[test]
fn test_failed_calls_leave_intent_unchanged() {
    let mut builder = flight_booking_builder();
    let before = builder.intent().unwrap().clone();

    assert!(builder.add_training_phrase(&["a"], &["x", "y"]).is_err());
    assert!(builder
        .add_training_phrase_values(&[json!(1)], &[], 1)
        .is_err());
    assert!(builder.add_label_value(json!(3.5)).is_err());
    assert!(builder.add_training_phrase_repeated(&["a"], NO_ANNOTATIONS, 0).is_err());

    assert_eq!(builder.intent().unwrap(), &before);
}

#[test]
fn test_recreate_discards_previous_content() {
    let mut builder = flight_booking_builder();
    builder.add_label([("team", "travel")]).unwrap();

    builder.create_intent(IntentOptions::new("book_flight").with_priority(1));

    let intent = builder.intent().unwrap();
    assert_eq!(intent, &Intent {
        priority: 1,
        ..Intent::new("book_flight")
    });
}

#[test]
fn test_configured_defaults_apply() {
    let config = BuilderConfig::from_toml("default_priority = 10\ndefault_repeat_count = 4").unwrap();
    let mut builder = IntentBuilder::with_config(config).unwrap();

    builder.create_empty_intent("greeting");
    let intent = builder.add_training_phrase(&["hello"], NO_ANNOTATIONS).unwrap();

    assert_eq!(intent.priority, 10);
    assert_eq!(intent.training_phrases[0].repeat_count, 4);
}

#[test]
fn test_build_intent_round_trips_through_json() {
    let intent = build_intent("greeting", vec!["hello".to_string(), "good morning".to_string()]);

    let json = intent.to_json_pretty().unwrap();
    let mut builder = IntentBuilder::new();
    let loaded = builder.load_intent_json(&json).unwrap();

    assert_eq!(loaded, &intent);
    assert!(loaded.to_string().contains("    - good morning\n"));
}
