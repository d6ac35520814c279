//! Gemini-specific error types and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// API request failed before a response was received
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response object contained no candidates
    #[display("Empty response from Gemini")]
    EmptyResponse,
    /// Candidate contained no text parts
    #[display("Empty response text from Gemini")]
    EmptyText,
    /// Generation was blocked by the safety filter
    #[display("Content blocked by SAFETY filter: {}", _0)]
    SafetyBlocked(String),
    /// The generation call did not settle within the timeout window
    #[display("Generation timed out after {}s", _0)]
    Timeout(u64),
}

impl GeminiErrorKind {
    /// Check if this error type should be retried by the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            GeminiErrorKind::HttpError { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            GeminiErrorKind::Timeout(_) => true,
            _ => false,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use raconteur_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for Gemini driver operations.
pub type GeminiResult<T> = std::result::Result<T, GeminiError>;

/// Trait for errors that carry retry guidance.
///
/// Transient upstream conditions (overload, rate limiting, timeouts) should
/// report `true`; permanent ones (bad credentials, rejected content) `false`.
/// The pipeline never retries on its own; this guidance is surfaced to the
/// caller through [`crate::PipelineError::is_retryable`].
///
/// # Examples
///
/// ```
/// use raconteur_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpError {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry after a backoff.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
