//! JSON recovery for model output
//!
//! Models regularly wrap the requested raw JSON object in markdown fences or
//! conversational filler despite instructions not to. Recovery is attempted
//! in three stages before giving up:
//! 1. parse the raw text directly
//! 2. strip a triple-backtick fence (optionally tagged `json`) and parse the
//!    interior
//! 3. parse the substring between the first `{` and the last `}`

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::types::GeminiError;

static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)```").expect("fence pattern is valid")
});

/// Extract a JSON value from raw model output.
///
/// These are retries of *parsing* only; the network call is never repeated.
pub(crate) fn extract_json(text: &str) -> Result<Value, GeminiError> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    if let Some(captures) = FENCED_BLOCK.captures(text) {
        if let Some(inner) = captures.get(1) {
            if let Ok(value) = serde_json::from_str(inner.as_str().trim()) {
                return Ok(value);
            }
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str(&text[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(GeminiError::MalformedResponse(
        "could not extract valid JSON from the response".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INNER: &str =
        r#"{"name":"X","items":[],"calories":1,"protein":1,"carbs":1,"fat":1,"portion":"p"}"#;

    #[test]
    fn parses_raw_json_directly() {
        let value = extract_json(INNER).expect("direct parse");
        assert_eq!(value["name"], "X");
    }

    #[test]
    fn fenced_block_parses_to_the_same_value() {
        let wrapped = format!("Here you go:\n```json\n{INNER}\n```");
        let direct = extract_json(INNER).expect("direct parse");
        let fenced = extract_json(&wrapped).expect("fenced parse");
        assert_eq!(fenced, direct);
    }

    #[test]
    fn untagged_fence_is_also_stripped() {
        let wrapped = format!("```\n{INNER}\n```");
        let value = extract_json(&wrapped).expect("fenced parse");
        assert_eq!(value["portion"], "p");
    }

    #[test]
    fn falls_back_to_brace_substring() {
        let wrapped = format!("Sure! The meal is: {INNER} Anything else?");
        let value = extract_json(&wrapped).expect("brace fallback");
        assert_eq!(value["calories"], 1);
    }

    #[test]
    fn hopeless_text_is_malformed() {
        let result = extract_json("I could not analyze this image, sorry.");
        assert!(matches!(result, Err(GeminiError::MalformedResponse(_))));
    }

    #[test]
    fn unbalanced_braces_are_malformed() {
        let result = extract_json("broken { \"name\": ");
        assert!(matches!(result, Err(GeminiError::MalformedResponse(_))));
    }
}
