//! Gemini API types for meal analysis
use nutriflow_domain::NutriFlowError;
use serde::{Deserialize, Serialize};

/// Gemini API error types
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// Network-level error (connection failed, timeout, etc.)
    #[error("Network error: {0}")]
    Network(String),

    /// Gemini API returned an error response
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded (retry after {0}s)")]
    RateLimit(u64),

    /// Authentication failed (invalid API key)
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// No API key configured
    #[error("Gemini API key is missing")]
    MissingApiKey,

    /// Response text could not be coerced into the JSON contract
    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    /// The model reported that no food was recognizable
    #[error("No food recognized: {0}")]
    NoFoodRecognized(String),
}

impl From<GeminiError> for NutriFlowError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Network(message) => Self::Network(message),
            GeminiError::Api { status, message } => {
                Self::Network(format!("Gemini API error (status {status}): {message}"))
            }
            GeminiError::RateLimit(retry_after) => {
                Self::Network(format!("Gemini rate limit exceeded (retry after {retry_after}s)"))
            }
            GeminiError::Authentication(message) => Self::Auth(message),
            GeminiError::MissingApiKey => Self::Config("Gemini API key is missing".into()),
            GeminiError::MalformedResponse(message) => Self::MalformedResponse(message),
            GeminiError::NoFoodRecognized(message) => Self::NoFoodRecognized(message),
        }
    }
}

/// Internal types for the Gemini `generateContent` API
#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

/// A request part: either plain text or inline binary data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), inline_data: None }
    }

    pub fn inline_data(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type: mime_type.into(), data: data.into() }),
        }
    }
}

/// Base64-encoded media payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    /// Base64 without any data-URL prefix
    pub data: String,
}

/// Response from the Gemini `generateContent` API
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
