/// Gemini API client for meal nutrition analysis
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use nutriflow_domain::{AiAnalysisResult, AiConfig, NutriFlowError};
use reqwest::Method;
use tracing::{debug, info};

use crate::http::HttpClient;

use super::extract::extract_json;
use super::types::{Content, GeminiError, GenerateContentRequest, GenerateContentResponse, Part};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Fixed instruction block prefixed to every request.
///
/// The contract demands a single raw JSON object so the response can be
/// parsed without free-form text handling; `extract_json` still copes with
/// models that wrap it anyway.
const SYSTEM_PROMPT: &str = r#"You are an expert nutritionist and calorie estimator.
Analyze the provided image (or text description) of a meal.
Identify the food items, estimate the portion sizes, and calculate the approximate nutritional values.

CRITICAL INSTRUCTION: You MUST return ONLY a valid JSON object. Do not wrap the JSON in markdown blocks (e.g., no ```json). Do not add any conversational text before or after the JSON.

The JSON object MUST follow exactly this structure:
{
  "name": "A short, descriptive name of the dish",
  "items": ["list", "of", "ingredients", "identified"],
  "calories": 450,
  "protein": 35,
  "carbs": 40,
  "fat": 15,
  "portion": "e.g., '1 medium plate' or '~350g'"
}

If you cannot identify any food in the image, or the text is not related to food, return exactly this JSON:
{
  "error": "a short message explaining that no food was recognized"
}"#;

/// Gemini API client implementing the meal analysis contract.
///
/// Every analysis performs exactly one outbound call: the client is built
/// over a single-attempt [`HttpClient`], and the only internal retries are
/// the parsing fallbacks in `extract_json`.
pub struct GeminiClient {
    http_client: HttpClient,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a new Gemini client over the given HTTP client.
    ///
    /// Callers should hand in a client configured for one attempt; see
    /// [`GeminiClient::from_config`] for the standard construction.
    pub fn new(api_key: String, http_client: HttpClient) -> Self {
        Self {
            http_client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            api_base: GEMINI_API_BASE.to_string(),
        }
    }

    /// Build a client from application configuration.
    ///
    /// # Errors
    /// Returns `MissingApiKey` when no key is configured.
    pub fn from_config(config: &AiConfig) -> Result<Self, GeminiError> {
        let api_key = config.api_key.clone().ok_or(GeminiError::MissingApiKey)?;

        let http_client = HttpClient::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .max_attempts(1)
            .build()
            .map_err(|err| GeminiError::Network(err.to_string()))?;

        Ok(Self::new(api_key, http_client).with_model(config.model.clone()))
    }

    /// Create a new client with a custom model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Create a new client with a custom API base URL (for testing)
    #[cfg(test)]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Analyze a free-text description of a meal.
    pub async fn analyze_text(
        &self,
        description: &str,
    ) -> Result<AiAnalysisResult, GeminiError> {
        info!(chars = description.len(), "analyzing meal description with Gemini");

        let prompt = format!("{SYSTEM_PROMPT}\n\nUser Description: {description}");
        let request = GenerateContentRequest {
            contents: vec![Content { parts: vec![Part::text(prompt)] }],
        };

        self.call_api(request).await
    }

    /// Analyze a food photo.
    ///
    /// The payload must already be compressed/resized by the caller; it is
    /// transmitted inline as base64.
    pub async fn analyze_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<AiAnalysisResult, GeminiError> {
        info!(bytes = image.len(), mime_type, "analyzing meal photo with Gemini");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::text(SYSTEM_PROMPT),
                    Part::inline_data(BASE64.encode(image), mime_type),
                ],
            }],
        };

        self.call_api(request).await
    }

    /// Perform the `generateContent` call and enforce the output contract.
    async fn call_api(
        &self,
        request: GenerateContentRequest,
    ) -> Result<AiAnalysisResult, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);

        let request_builder = self
            .http_client
            .request(Method::POST, &url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request);

        let response = self.http_client.send(request_builder).await.map_err(|err| match err {
            NutriFlowError::Network(msg) => GeminiError::Network(msg),
            other => GeminiError::Network(format!("HTTP error: {other}")),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "received Gemini API response");

        if !status.is_success() {
            return Err(self.handle_error_status(status.as_u16(), response).await);
        }

        let content: GenerateContentResponse = response.json().await.map_err(|err| {
            GeminiError::MalformedResponse(format!("failed to parse response envelope: {err}"))
        })?;

        let text = content.first_text().ok_or_else(|| {
            GeminiError::MalformedResponse("response contained no text".into())
        })?;

        let value = extract_json(&text)?;

        if let Some(error) = value.get("error") {
            let message =
                error.as_str().map(str::to_string).unwrap_or_else(|| error.to_string());
            return Err(GeminiError::NoFoodRecognized(message));
        }

        // Deliberately lenient: absent fields default, nothing beyond the
        // JSON shape is enforced here. The edited draft is range-checked
        // when it becomes a meal.
        serde_json::from_value(value).map_err(|err| {
            GeminiError::MalformedResponse(format!("unexpected field types: {err}"))
        })
    }

    /// Handle HTTP error status codes
    async fn handle_error_status(&self, status: u16, response: reqwest::Response) -> GeminiError {
        let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

        match status {
            401 | 403 => GeminiError::Authentication(format!("Invalid API key ({status})")),
            429 => GeminiError::RateLimit(60),
            _ => GeminiError::Api { status, message },
        }
    }
}

#[async_trait::async_trait]
impl nutriflow_core::analysis::ports::MealAnalyzer for GeminiClient {
    async fn analyze_text(
        &self,
        description: &str,
    ) -> nutriflow_domain::Result<AiAnalysisResult> {
        GeminiClient::analyze_text(self, description).await.map_err(Into::into)
    }

    async fn analyze_image(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> nutriflow_domain::Result<AiAnalysisResult> {
        GeminiClient::analyze_image(self, image, mime_type).await.map_err(Into::into)
    }
}
