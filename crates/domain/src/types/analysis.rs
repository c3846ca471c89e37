//! AI meal analysis result
//!
//! Transient output of the AI analysis adapter. The contract with the model
//! is intentionally loose: every field defaults when absent, and the numeric
//! fields stay floating point until the user-edited draft is validated into
//! a meal.

use serde::{Deserialize, Serialize};

/// Draft nutrition estimate returned by the generative-AI backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AiAnalysisResult {
    /// Short descriptive dish name
    #[serde(default)]
    pub name: String,
    /// Ingredients identified in the meal
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub protein: f64,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fat: f64,
    /// Human-readable portion description, e.g. "~350g"
    #[serde(default)]
    pub portion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let result: AiAnalysisResult =
            serde_json::from_str(r#"{"name":"Omelette"}"#).expect("lenient parse");
        assert_eq!(result.name, "Omelette");
        assert!(result.items.is_empty());
        assert_eq!(result.calories, 0.0);
        assert_eq!(result.portion, "");
    }

    #[test]
    fn fractional_estimates_are_preserved() {
        let result: AiAnalysisResult =
            serde_json::from_str(r#"{"calories":450.5,"protein":35,"carbs":40,"fat":15}"#)
                .expect("parses");
        assert_eq!(result.calories, 450.5);
        assert_eq!(result.protein, 35.0);
    }
}
