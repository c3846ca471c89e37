//! AI analysis service

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use nutriflow_domain::constants::INGREDIENT_JOIN_SEPARATOR;
use nutriflow_domain::{
    AiAnalysisResult, MealCategory, MealDraft, NutriFlowError, Result,
};
use tracing::debug;

use super::ports::MealAnalyzer;

/// Drives the AI-assisted meal entry flow.
///
/// Wraps the analyzer port, turns its loose draft estimates into meal
/// candidates, and re-invokes the analyzer over an edited ingredient list to
/// refresh the numeric fields.
pub struct AnalysisService {
    analyzer: Arc<dyn MealAnalyzer>,
}

impl AnalysisService {
    pub fn new(analyzer: Arc<dyn MealAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Analyze a free-text meal description.
    pub async fn analyze_description(&self, description: &str) -> Result<AiAnalysisResult> {
        let description = description.trim();
        if description.is_empty() {
            return Err(NutriFlowError::InvalidInput("meal description is empty".into()));
        }

        debug!(chars = description.len(), "analyzing meal description");
        self.analyzer.analyze_text(description).await
    }

    /// Analyze a pre-compressed food photo.
    pub async fn analyze_photo(&self, image: &[u8], mime_type: &str) -> Result<AiAnalysisResult> {
        if image.is_empty() {
            return Err(NutriFlowError::InvalidInput("image payload is empty".into()));
        }

        debug!(bytes = image.len(), mime_type, "analyzing meal photo");
        self.analyzer.analyze_image(image, mime_type).await
    }

    /// Re-estimate nutrition for a user-edited ingredient list.
    ///
    /// Blank entries are dropped; the rest are joined into one description
    /// and sent through text analysis as an independent call.
    pub async fn recalculate(&self, items: &[String]) -> Result<AiAnalysisResult> {
        let ingredients: Vec<&str> =
            items.iter().map(|item| item.trim()).filter(|item| !item.is_empty()).collect();

        if ingredients.is_empty() {
            return Err(NutriFlowError::InvalidInput("no ingredients to recalculate".into()));
        }

        let description = ingredients.join(INGREDIENT_JOIN_SEPARATOR);
        debug!(ingredient_count = ingredients.len(), "recalculating from ingredients");
        self.analyzer.analyze_text(&description).await
    }

    /// Build a meal candidate from an (possibly user-edited) analysis
    /// result.
    ///
    /// The estimate's floating-point values are rounded to whole units here;
    /// range enforcement happens when the draft goes through
    /// [`nutriflow_domain::validate_meal`].
    pub fn draft_from_result(
        result: &AiAnalysisResult,
        date: NaiveDate,
        time: NaiveTime,
        category: MealCategory,
    ) -> MealDraft {
        MealDraft {
            name: (!result.name.trim().is_empty()).then(|| result.name.trim().to_string()),
            calories: round_grams(result.calories),
            protein: round_grams(result.protein),
            carbs: round_grams(result.carbs),
            fat: round_grams(result.fat),
            time: Some(time),
            category: Some(category),
            date: Some(date),
            image_ref: None,
        }
    }
}

/// Round a loose estimate to whole units, treating negatives and
/// non-finite values as absent.
fn round_grams(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let rounded = value.round();
    if rounded > f64::from(u32::MAX) {
        return None;
    }
    Some(rounded as u32)
}
