//! Property-based tests for JSON object extraction from free-form text

use nomora::response::{extract_json_object, parse_feeling_validation};
use nomora::types::{FeelingValidation, Mood};
use proptest::prelude::*;

fn mood_strategy() -> impl Strategy<Value = Mood> {
    prop_oneof![
        Just(Mood::Positive),
        Just(Mood::Neutral),
        Just(Mood::Adventurous),
        Just(Mood::Relaxed),
        Just(Mood::Excited),
        Just(Mood::Contemplative),
    ]
}

proptest! {
    /// Prose without braces around a serialized object never changes what is extracted
    #[test]
    fn test_prose_wrapping_is_ignored(
        before in "[^{}]{0,40}",
        after in "[^{}]{0,40}",
        feeling in ".{0,30}",
        catchphrase in ".{0,60}",
        mood in mood_strategy(),
    ) {
        let validation = FeelingValidation {
            original_feeling: feeling,
            catchphrase,
            mood,
        };
        let json = serde_json::to_string(&validation).unwrap();
        let raw = format!("{}{}{}", before, json, after);

        prop_assert_eq!(extract_json_object(&raw), Some(json.as_str()));
        prop_assert_eq!(parse_feeling_validation(&raw).unwrap(), validation);
    }

    #[test]
    fn test_text_without_braces_has_no_object(text in "[^{]{0,80}") {
        prop_assert_eq!(extract_json_object(&text), None);
    }
}
