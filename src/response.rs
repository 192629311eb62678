//! Response parsing
//!
//! Extracts the first balanced JSON object from free-form backend text and
//! validates it against the task's schema. Nothing is repaired or guessed:
//! any missing field, wrong arity or unparsable JSON is an
//! `InvalidResponseShape` error.

use crate::error::GenerationError;
use crate::types::{FeelingValidation, PlanOption};
use serde::Deserialize;

pub const PLAN_OPTION_COUNT: usize = 4;
pub const MIN_HIGHLIGHTS: usize = 4;
pub const MAX_HIGHLIGHTS: usize = 7;

#[derive(Deserialize)]
struct PlanSuggestionPayload {
    options: Vec<PlanOption>,
}

/// Locate the first balanced `{...}` substring.
///
/// Braces inside JSON string literals are ignored. Returns `None` when the
/// text has no `{` or the first object never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + idx]);
                }
            }
            _ => {}
        }
    }
    None
}

fn parse_object<T: for<'de> Deserialize<'de>>(raw: &str, what: &str) -> Result<T, GenerationError> {
    let json = extract_json_object(raw).ok_or_else(|| {
        GenerationError::invalid_shape(format!("No JSON object found in {} response", what))
    })?;
    serde_json::from_str(json).map_err(|e| {
        GenerationError::invalid_shape(format!("Malformed {} response: {}", what, e))
    })
}

/// Parse a plan suggestion response into exactly four validated options.
///
/// `estimatedCost` is not compared against the requested budget.
pub fn parse_plan_options(raw: &str) -> Result<Vec<PlanOption>, GenerationError> {
    let payload: PlanSuggestionPayload = parse_object(raw, "plan suggestion")?;

    if payload.options.len() != PLAN_OPTION_COUNT {
        return Err(GenerationError::invalid_shape(format!(
            "Expected {} plan options, got {}",
            PLAN_OPTION_COUNT,
            payload.options.len()
        )));
    }

    for option in &payload.options {
        let score = option.suitability_score;
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(GenerationError::invalid_shape(format!(
                "Option '{}' has suitabilityScore {} outside [0, 1]",
                option.id, score
            )));
        }
        let highlights = option.highlights.len();
        if !(MIN_HIGHLIGHTS..=MAX_HIGHLIGHTS).contains(&highlights) {
            return Err(GenerationError::invalid_shape(format!(
                "Option '{}' has {} highlights, expected {}-{}",
                option.id, highlights, MIN_HIGHLIGHTS, MAX_HIGHLIGHTS
            )));
        }
    }

    Ok(payload.options)
}

/// Parse a catchphrase response; `mood` must be one of the six known values
/// and the phrase itself must not be blank.
pub fn parse_feeling_validation(raw: &str) -> Result<FeelingValidation, GenerationError> {
    let validation: FeelingValidation = parse_object(raw, "catchphrase")?;
    if validation.catchphrase.trim().is_empty() {
        return Err(GenerationError::invalid_shape(
            "Catchphrase response has an empty catchphrase",
        ));
    }
    Ok(validation)
}
