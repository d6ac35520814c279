//! Terminal pipeline error taxonomy and upstream failure classification.
//!
//! Every failure that escapes the pipeline is classified into exactly one
//! [`PipelineError`]. The classification inspects the failure's nature (its
//! structured kind where one exists, substring matching against known
//! upstream failure classes otherwise), never its transport shape, and the
//! raw upstream error text is kept for logging but never surfaced as the
//! user-facing message.

use crate::{GeminiErrorKind, RaconteurError, RaconteurErrorKind, RetryableError};

/// The fixed taxonomy of user-visible failure kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display,
)]
pub enum PipelineErrorKind {
    /// Request parameters failed shape validation
    #[display("Invalid request shape")]
    InvalidRequestShape,
    /// Image payload was empty, oversized, or undecodable
    #[display("Invalid image data")]
    InvalidImageData,
    /// Upstream rejected the API credential
    #[display("Upstream rejected the API credential")]
    AuthRejected,
    /// Upstream returned an empty response
    #[display("Empty upstream response")]
    EmptyResponse,
    /// Generation did not settle within the timeout window
    #[display("Generation timed out")]
    Timeout,
    /// Content was rejected by the upstream safety filter
    #[display("Content rejected by safety filter")]
    ContentRejected,
    /// Upstream quota or rate limit exhausted
    #[display("Upstream quota exceeded")]
    QuotaExceeded,
    /// Upstream denied permission for this operation
    #[display("Upstream permission denied")]
    PermissionDenied,
    /// Upstream service temporarily unavailable
    #[display("Upstream service unavailable")]
    UpstreamUnavailable,
    /// Recovered record had neither title nor story
    #[display("Invalid story structure")]
    InvalidStoryStructure,
    /// Failure did not match any known upstream class
    #[display("Unclassified generation failure")]
    Unclassified,
}

impl PipelineErrorKind {
    /// HTTP status the caller should map this failure to.
    pub fn http_status_hint(&self) -> u16 {
        match self {
            PipelineErrorKind::InvalidRequestShape => 400,
            PipelineErrorKind::InvalidImageData => 400,
            PipelineErrorKind::AuthRejected => 500,
            PipelineErrorKind::EmptyResponse => 500,
            PipelineErrorKind::Timeout => 408,
            PipelineErrorKind::ContentRejected => 400,
            PipelineErrorKind::QuotaExceeded => 429,
            PipelineErrorKind::PermissionDenied => 403,
            PipelineErrorKind::UpstreamUnavailable => 503,
            PipelineErrorKind::InvalidStoryStructure => 500,
            PipelineErrorKind::Unclassified => 500,
        }
    }

    /// Stable machine-readable error code surfaced to clients.
    pub fn code(&self) -> &'static str {
        match self {
            PipelineErrorKind::InvalidRequestShape => "VALIDATION_ERROR",
            PipelineErrorKind::InvalidImageData => "INVALID_IMAGE_DATA",
            PipelineErrorKind::AuthRejected => "GEMINI_API_KEY_ERROR",
            PipelineErrorKind::EmptyResponse => "GEMINI_EMPTY_RESPONSE",
            PipelineErrorKind::Timeout => "GEMINI_TIMEOUT",
            PipelineErrorKind::ContentRejected => "GEMINI_SAFETY_ERROR",
            PipelineErrorKind::QuotaExceeded => "GEMINI_QUOTA_EXCEEDED",
            PipelineErrorKind::PermissionDenied => "GEMINI_PERMISSION_DENIED",
            PipelineErrorKind::UpstreamUnavailable => "GEMINI_SERVICE_UNAVAILABLE",
            PipelineErrorKind::InvalidStoryStructure => "INVALID_STORY_STRUCTURE",
            PipelineErrorKind::Unclassified => "GEMINI_GENERATION_ERROR",
        }
    }

    /// User-facing message for this failure kind.
    ///
    /// Fixed per kind; upstream error text never leaks through here.
    pub fn user_message(&self) -> &'static str {
        match self {
            PipelineErrorKind::InvalidRequestShape => "Paramètres de requête invalides",
            PipelineErrorKind::InvalidImageData => "Données d'image invalides",
            PipelineErrorKind::AuthRejected => "Clé API Gemini invalide",
            PipelineErrorKind::EmptyResponse => "Réponse vide de Gemini",
            PipelineErrorKind::Timeout => "Délai de génération dépassé",
            PipelineErrorKind::ContentRejected => "Contenu non autorisé détecté",
            PipelineErrorKind::QuotaExceeded => "Limite API atteinte",
            PipelineErrorKind::PermissionDenied => "Accès refusé à l'API Gemini",
            PipelineErrorKind::UpstreamUnavailable => {
                "Service Gemini temporairement indisponible"
            }
            PipelineErrorKind::InvalidStoryStructure => "Structure de réponse invalide",
            PipelineErrorKind::Unclassified => "Erreur lors de la génération d'histoire",
        }
    }

    /// Whether the caller may retry this request after a backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PipelineErrorKind::Timeout
                | PipelineErrorKind::QuotaExceeded
                | PipelineErrorKind::UpstreamUnavailable
        )
    }
}

/// Terminal pipeline error with source location tracking.
///
/// Created at the point of failure, never mutated, surfaced to the caller
/// as the final result of a failed pipeline run.
///
/// # Examples
///
/// ```
/// use raconteur_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::Timeout, "gemini call exceeded 30s");
/// assert_eq!(err.http_status_hint(), 408);
/// assert_eq!(err.code(), "GEMINI_TIMEOUT");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error [{}]: {} at line {} in {}", kind, message, line, file)]
pub struct PipelineError {
    /// The classified failure kind
    pub kind: PipelineErrorKind,
    /// Internal detail for logs; not surfaced to clients
    pub message: String,
    /// Line number where the error was created
    pub line: u32,
    /// Source file where the error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// HTTP status the caller should map this failure to.
    pub fn http_status_hint(&self) -> u16 {
        self.kind.http_status_hint()
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// User-facing message for this failure.
    pub fn user_message(&self) -> &'static str {
        self.kind.user_message()
    }

    /// Classify an internal pipeline failure into its terminal kind.
    ///
    /// Structured kinds are mapped directly; free-form upstream error text is
    /// matched against known failure classes, with the HTTP status code as a
    /// fallback signal.
    #[track_caller]
    pub fn classify(err: &RaconteurError) -> Self {
        let detail = err.to_string();
        let kind = match err.kind() {
            RaconteurErrorKind::Request(req) => {
                if req.is_image_error() {
                    PipelineErrorKind::InvalidImageData
                } else {
                    PipelineErrorKind::InvalidRequestShape
                }
            }
            RaconteurErrorKind::Gemini(gem) => match &gem.kind {
                GeminiErrorKind::MissingApiKey => PipelineErrorKind::AuthRejected,
                GeminiErrorKind::EmptyResponse | GeminiErrorKind::EmptyText => {
                    PipelineErrorKind::EmptyResponse
                }
                GeminiErrorKind::Timeout(_) => PipelineErrorKind::Timeout,
                GeminiErrorKind::SafetyBlocked(_) => PipelineErrorKind::ContentRejected,
                GeminiErrorKind::ApiRequest(msg) => {
                    classify_message(msg).unwrap_or(PipelineErrorKind::Unclassified)
                }
                GeminiErrorKind::HttpError {
                    status_code,
                    message,
                } => classify_message(message)
                    .or_else(|| classify_status(*status_code))
                    .unwrap_or(PipelineErrorKind::Unclassified),
            },
        };
        Self::new(kind, detail)
    }
}

impl From<RaconteurError> for PipelineError {
    fn from(err: RaconteurError) -> Self {
        Self::classify(&err)
    }
}

impl RetryableError for PipelineError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

/// Match free-form upstream error text against known failure classes.
///
/// The substrings mirror the identifiers the Gemini API embeds in its error
/// payloads; matching is case-sensitive on purpose so that e.g. "generate"
/// does not trip the quota class.
fn classify_message(msg: &str) -> Option<PipelineErrorKind> {
    if msg.contains("API_KEY") || msg.contains("Invalid API key") {
        Some(PipelineErrorKind::AuthRejected)
    } else if msg.contains("SAFETY") {
        Some(PipelineErrorKind::ContentRejected)
    } else if msg.contains("TIMEOUT") {
        Some(PipelineErrorKind::Timeout)
    } else if msg.contains("QUOTA_EXCEEDED")
        || msg.contains("RESOURCE_EXHAUSTED")
        || msg.contains("quota")
        || msg.contains("limit")
    {
        Some(PipelineErrorKind::QuotaExceeded)
    } else if msg.contains("PERMISSION_DENIED") {
        Some(PipelineErrorKind::PermissionDenied)
    } else if msg.contains("UNAVAILABLE") || msg.contains("SERVICE_UNAVAILABLE") {
        Some(PipelineErrorKind::UpstreamUnavailable)
    } else {
        None
    }
}

/// Fallback classification from an HTTP status code alone.
fn classify_status(status: u16) -> Option<PipelineErrorKind> {
    match status {
        401 => Some(PipelineErrorKind::AuthRejected),
        403 => Some(PipelineErrorKind::PermissionDenied),
        408 => Some(PipelineErrorKind::Timeout),
        429 => Some(PipelineErrorKind::QuotaExceeded),
        500 | 502 | 503 | 504 => Some(PipelineErrorKind::UpstreamUnavailable),
        _ => None,
    }
}
