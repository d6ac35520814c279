//! Gemini REST client for vision generation.
//!
//! Speaks the `generateContent` endpoint directly over HTTP so that the
//! request can carry inline image data. The client is an explicitly
//! constructed value injected into the pipeline; nothing here is
//! process-global.

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use tracing::{debug, error, instrument};

use crate::gemini::dto::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use raconteur_core::ImagePayload;
use raconteur_error::{GeminiError, GeminiErrorKind, GeminiResult, RaconteurResult};
use raconteur_interface::{Vision, VisionDriver};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Google Gemini `generateContent` REST API.
///
/// # Example
///
/// ```no_run
/// use raconteur_models::GeminiVision;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // From the GEMINI_API_KEY environment variable
/// let driver = GeminiVision::new()?;
///
/// // Or with an explicit credential and model
/// let driver = GeminiVision::with_api_key("key").model("gemini-2.5-flash-lite");
/// # Ok(())
/// # }
/// ```
pub struct GeminiVision {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiVision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiVision")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiVision {
    /// Create a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// Loads a `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set.
    #[instrument(name = "gemini_vision_new")]
    pub fn new() -> GeminiResult<Self> {
        dotenvy::dotenv().ok();
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key))
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the generation model.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used by tests against a local server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Internal generate method that returns Gemini-specific errors.
    async fn generate_internal(
        &self,
        prompt: &str,
        image: &ImagePayload,
    ) -> GeminiResult<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body =
            GenerateContentRequest::single_turn(prompt, &image.mime_type, image.to_base64());

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            image_bytes = image.bytes.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            // The API wraps failures in {"error": {message, status}}; fold the
            // status identifier into the message so classification can see it.
            let message = match serde_json::from_str::<ApiErrorResponse>(&error_text) {
                Ok(parsed) => format!("{}: {}", parsed.error.status, parsed.error.message),
                Err(_) => error_text,
            };
            error!(status = %status, message = %message, "Gemini API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode response body");
            GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                "Failed to decode response: {}",
                e
            )))
        })?;

        if let Some(feedback) = &parsed.prompt_feedback
            && let Some(reason) = &feedback.block_reason
        {
            return Err(GeminiError::new(GeminiErrorKind::SafetyBlocked(
                reason.clone(),
            )));
        }

        if parsed.candidates.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }

        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyText));
        }

        debug!(response_len = text.len(), "Received generation response");
        Ok(text)
    }
}

#[async_trait]
impl VisionDriver for GeminiVision {
    #[instrument(skip(self, prompt, image), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, image: &ImagePayload) -> RaconteurResult<String> {
        self.generate_internal(prompt, image).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

impl Vision for GeminiVision {
    fn supported_image_formats(&self) -> &[&'static str] {
        &[
            "image/png",
            "image/jpeg",
            "image/webp",
            "image/heic",
            "image/heif",
        ]
    }

    fn max_image_size_bytes(&self) -> usize {
        20 * 1024 * 1024 // 20MB
    }
}
