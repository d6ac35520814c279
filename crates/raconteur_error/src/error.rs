//! Top-level error wrapper types.

use crate::{GeminiError, RequestError};

/// This is the foundation error enum for internal pipeline failures.
///
/// Variants cover the two failure sources inside the pipeline: request
/// validation and the Gemini driver boundary. Anything that escapes the
/// pipeline is first classified into a [`crate::PipelineError`].
///
/// # Examples
///
/// ```
/// use raconteur_error::{RaconteurError, RequestError, RequestErrorKind};
///
/// let req_err = RequestError::new(RequestErrorKind::EmptyImage);
/// let err: RaconteurError = req_err.into();
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum RaconteurErrorKind {
    /// Request validation error
    #[from(RequestError)]
    Request(RequestError),
    /// Gemini driver error
    #[from(GeminiError)]
    Gemini(GeminiError),
}

/// Raconteur error with kind discrimination.
///
/// # Examples
///
/// ```
/// use raconteur_error::{RaconteurResult, GeminiError, GeminiErrorKind};
///
/// fn might_fail() -> RaconteurResult<()> {
///     Err(GeminiError::new(GeminiErrorKind::EmptyResponse))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Raconteur Error: {}", _0)]
pub struct RaconteurError(Box<RaconteurErrorKind>);

impl RaconteurError {
    /// Create a new error from a kind.
    pub fn new(kind: RaconteurErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &RaconteurErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to RaconteurErrorKind
impl<T> From<T> for RaconteurError
where
    T: Into<RaconteurErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Raconteur operations.
///
/// # Examples
///
/// ```
/// use raconteur_error::{RaconteurResult, GeminiError, GeminiErrorKind};
///
/// fn invoke_model() -> RaconteurResult<String> {
///     Err(GeminiError::new(GeminiErrorKind::EmptyText))?
/// }
/// ```
pub type RaconteurResult<T> = std::result::Result<T, RaconteurError>;
