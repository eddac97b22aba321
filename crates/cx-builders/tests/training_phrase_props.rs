use cx_builders::{BuilderError, IntentBuilder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_annotations_are_padded_to_phrase_length(
        (phrase, annotations) in proptest::collection::vec("[a-z ]{1,8}", 1..10)
            .prop_flat_map(|phrase| {
                let len = phrase.len();
                (Just(phrase), proptest::collection::vec("[a-z_]{0,6}", 0..=len))
            })
    ) {
        let mut builder = IntentBuilder::new();
        builder.create_empty_intent("prop");

        let intent = builder.add_training_phrase(&phrase, &annotations).unwrap();
        let parts = &intent.training_phrases[0].parts;

        prop_assert_eq!(parts.len(), phrase.len());
        for (i, part) in parts.iter().enumerate() {
            prop_assert_eq!(&part.text, &phrase[i]);
            let expected = annotations.get(i).map_or("", String::as_str);
            prop_assert_eq!(part.parameter_id.as_str(), expected);
        }
    }

    #[test]
    fn prop_excess_annotations_are_rejected(
        phrase in proptest::collection::vec("[a-z]{1,4}", 0..5),
        extra in 1..4usize
    ) {
        let annotations = vec!["p".to_string(); phrase.len() + extra];
        let mut builder = IntentBuilder::new();
        builder.create_empty_intent("prop");

        let result = builder.add_training_phrase(&phrase, &annotations);

        let is_length_error = matches!(result, Err(BuilderError::AnnotationLength { .. }));
        prop_assert!(is_length_error);
        prop_assert!(builder.intent().unwrap().training_phrases.is_empty());
    }
}
