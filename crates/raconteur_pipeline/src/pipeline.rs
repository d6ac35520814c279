//! The story generation pipeline.

use crate::{DEFAULT_TIMEOUT, WordCountPolicy, compose_prompt, invoke, normalize, recover};
use chrono::Utc;
use raconteur_core::{GenerationMetadata, StoryEnvelope, StoryRecord, StoryRequest};
use raconteur_error::PipelineError;
use raconteur_interface::VisionDriver;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Orchestrates one generation run: validate, compose, invoke, recover,
/// normalize.
///
/// The pipeline is stateless per request; the only shared pieces are the
/// injected driver and the static catalogs, both read-only, so a single
/// pipeline value can serve concurrent requests without locking.
///
/// # Example
///
/// ```rust,ignore
/// use raconteur_models::GeminiVision;
/// use raconteur_pipeline::StoryPipeline;
/// use std::sync::Arc;
///
/// let pipeline = StoryPipeline::new(Arc::new(GeminiVision::new()?));
/// let record = pipeline.generate(&request).await?;
/// ```
#[derive(Clone)]
pub struct StoryPipeline {
    driver: Arc<dyn VisionDriver>,
    timeout: Duration,
    word_count_policy: WordCountPolicy,
}

impl std::fmt::Debug for StoryPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoryPipeline")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("timeout", &self.timeout)
            .field("word_count_policy", &self.word_count_policy)
            .finish()
    }
}

impl StoryPipeline {
    /// Create a pipeline around an injected driver with default settings.
    pub fn new(driver: Arc<dyn VisionDriver>) -> Self {
        Self {
            driver,
            timeout: DEFAULT_TIMEOUT,
            word_count_policy: WordCountPolicy::default(),
        }
    }

    /// Override the generation timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the word-count policy.
    pub fn word_count_policy(mut self, policy: WordCountPolicy) -> Self {
        self.word_count_policy = policy;
        self
    }

    /// Run the pipeline for one request.
    ///
    /// Request-shape errors short-circuit before any external call. Upstream
    /// and transport failures are classified; parsing irregularities are
    /// absorbed by the recovery tiers and never surface as errors.
    ///
    /// # Errors
    ///
    /// Returns a classified [`PipelineError`]; only `InvalidStoryStructure`
    /// can originate after a successful model call.
    #[instrument(skip(self, request), fields(
        provider = self.driver.provider_name(),
        length = %request.length,
        language = %request.language,
    ))]
    pub async fn generate(&self, request: &StoryRequest) -> Result<StoryRecord, PipelineError> {
        request.validate().map_err(PipelineError::from)?;

        let prompt = compose_prompt(&request.genres, request.length, request.language);
        info!(
            genres = ?request.genre_ids(),
            prompt_len = prompt.len(),
            image_bytes = request.image.bytes.len(),
            "Invoking generation"
        );

        let raw = invoke(self.driver.as_ref(), &prompt, &request.image, self.timeout)
            .await
            .map_err(PipelineError::from)?;

        let outcome = recover(&raw, &request.genres);
        info!(tier = outcome.tier(), "Story candidate recovered");

        let record = normalize(outcome.story(), &raw, &request.genres, self.word_count_policy)?;
        info!(word_count = record.word_count, "Story generated");
        Ok(record)
    }

    /// Run the pipeline and wrap the result in the response envelope,
    /// echoing request metadata and the elapsed generation time.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`StoryPipeline::generate`].
    pub async fn generate_with_metadata(
        &self,
        request: &StoryRequest,
    ) -> Result<StoryEnvelope, PipelineError> {
        let start = Instant::now();
        let record = self.generate(request).await?;
        let metadata = GenerationMetadata {
            genres: request.genres.clone(),
            length: request.length,
            language: request.language,
            generation_time_ms: start.elapsed().as_millis() as u64,
            timestamp: Utc::now(),
        };
        Ok(StoryEnvelope::new(record, metadata))
    }
}
