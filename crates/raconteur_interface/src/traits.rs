//! Trait definitions for vision model backends.

use async_trait::async_trait;
use raconteur_core::ImagePayload;
use raconteur_error::RaconteurResult;

/// Core trait that all vision model backends must implement.
///
/// A backend receives the fully composed prompt text plus a normalized
/// image payload and returns the model's raw text response, unaltered.
/// Timeout enforcement lives in the pipeline, not the driver; a driver call
/// abandoned by the timeout race is simply dropped.
#[async_trait]
pub trait VisionDriver: Send + Sync {
    /// Generate model output for a prompt and an image.
    async fn generate(&self, prompt: &str, image: &ImagePayload) -> RaconteurResult<String>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Capability trait describing a backend's image input limits.
pub trait Vision: VisionDriver {
    /// Supported image formats (MIME types).
    fn supported_image_formats(&self) -> &[&'static str] {
        &["image/png", "image/jpeg", "image/webp"]
    }

    /// Maximum image size in bytes accepted by the model.
    fn max_image_size_bytes(&self) -> usize {
        5 * 1024 * 1024
    }
}
