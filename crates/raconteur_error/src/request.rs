//! Request validation error types.

/// Specific error conditions for request validation.
///
/// These are detected before any external call is made and short-circuit
/// the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RequestErrorKind {
    /// Genre count outside the accepted range
    #[display("Invalid genre count: {} (expected 1-3)", _0)]
    GenreCount(usize),
    /// The same genre was selected more than once
    #[display("Duplicate genre: {}", _0)]
    DuplicateGenre(String),
    /// Genre identifier not in the catalog
    #[display("Unknown genre: {}", _0)]
    UnknownGenre(String),
    /// Length identifier not in the catalog
    #[display("Unknown story length: {}", _0)]
    UnknownLength(String),
    /// Image payload decoded to zero bytes
    #[display("Image payload is empty")]
    EmptyImage,
    /// Image payload exceeds the size ceiling
    #[display("Image payload too large: {} bytes (max {})", size, max)]
    ImageTooLarge {
        /// Actual payload size in bytes
        size: usize,
        /// Configured ceiling in bytes
        max: usize,
    },
    /// Base64 decoding of the image payload failed
    #[display("Invalid base64 image data: {}", _0)]
    InvalidBase64(String),
}

/// Request validation error with source location tracking.
///
/// # Examples
///
/// ```
/// use raconteur_error::{RequestError, RequestErrorKind};
///
/// let err = RequestError::new(RequestErrorKind::EmptyImage);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The specific error condition
    pub kind: RequestErrorKind,
    /// Line number where the error was created
    pub line: u32,
    /// Source file where the error was created
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this error concerns the image payload rather than the
    /// request parameters.
    pub fn is_image_error(&self) -> bool {
        matches!(
            self.kind,
            RequestErrorKind::EmptyImage
                | RequestErrorKind::ImageTooLarge { .. }
                | RequestErrorKind::InvalidBase64(_)
        )
    }
}
