//! Response envelope types for callers.
//!
//! The pipeline itself returns `Result<StoryRecord, PipelineError>`; these
//! types are the stable wire shapes a transport layer wraps that result in.

use crate::{Genre, Language, StoryLength, StoryRecord};
use chrono::{DateTime, Utc};
use raconteur_error::PipelineError;
use serde::{Deserialize, Serialize};

/// Request metadata echoed back alongside a generated story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    /// Genres from the request
    pub genres: Vec<Genre>,
    /// Length from the request
    pub length: StoryLength,
    /// Language from the request
    pub language: Language,
    /// Wall-clock generation time in milliseconds
    #[serde(rename = "generationTime")]
    pub generation_time_ms: u64,
    /// Completion timestamp
    pub timestamp: DateTime<Utc>,
}

/// The `data` payload of a successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryData {
    /// The generated story record
    pub story: StoryRecord,
    /// Echoed request metadata
    pub metadata: GenerationMetadata,
}

/// Successful response envelope: `{success: true, data: {story, metadata}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryEnvelope {
    /// Always `true`
    pub success: bool,
    /// Story and metadata payload
    pub data: StoryData,
}

impl StoryEnvelope {
    /// Wrap a record and its metadata.
    pub fn new(story: StoryRecord, metadata: GenerationMetadata) -> Self {
        Self {
            success: true,
            data: StoryData { story, metadata },
        }
    }
}

/// The `error` payload of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// User-facing message
    pub message: String,
    /// Stable machine-readable code
    pub code: String,
}

/// Failed response envelope: `{success: false, error: {message, code}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `false`
    pub success: bool,
    /// Error payload
    pub error: ErrorBody,
}

impl From<&PipelineError> for ErrorEnvelope {
    fn from(err: &PipelineError) -> Self {
        Self {
            success: false,
            error: ErrorBody {
                message: err.user_message().to_string(),
                code: err.code().to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raconteur_error::PipelineErrorKind;

    #[test]
    fn error_envelope_uses_fixed_message_and_code() {
        let err = PipelineError::new(
            PipelineErrorKind::QuotaExceeded,
            "429 from upstream: RESOURCE_EXHAUSTED blah blah",
        );
        let envelope = ErrorEnvelope::from(&err);
        assert!(!envelope.success);
        assert_eq!(envelope.error.code, "GEMINI_QUOTA_EXCEEDED");
        assert_eq!(envelope.error.message, "Limite API atteinte");
        // Raw upstream text stays internal.
        assert!(!envelope.error.message.contains("RESOURCE_EXHAUSTED"));
    }
}
