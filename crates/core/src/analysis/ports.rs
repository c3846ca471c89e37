//! Port interface for the generative-AI nutrition estimator
//!
//! Implementations perform exactly one outbound call per invocation and do
//! not retry; concurrent invocations are independent.

use async_trait::async_trait;
use nutriflow_domain::{AiAnalysisResult, Result};

/// Trait for converting a meal description or photo into a draft estimate
#[async_trait]
pub trait MealAnalyzer: Send + Sync {
    /// Analyze a free-text description of a meal.
    async fn analyze_text(&self, description: &str) -> Result<AiAnalysisResult>;

    /// Analyze a food photo.
    ///
    /// The caller is responsible for pre-compressing the image (max
    /// dimension ~1024px, at most ~0.5MB) before handing it over.
    async fn analyze_image(&self, image: &[u8], mime_type: &str) -> Result<AiAnalysisResult>;
}
