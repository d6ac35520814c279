//! Error types for the Raconteur story generation pipeline.
//!
//! This crate provides the foundation error types used throughout the Raconteur
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Failures surface to callers as a [`PipelineError`]: a stable `{kind, message,
//! http status hint}` tuple produced by classifying whatever went wrong inside
//! the pipeline. Internal errors ([`RequestError`], [`GeminiError`]) are never
//! returned raw from the public surface.
//!
//! # Examples
//!
//! ```
//! use raconteur_error::{RaconteurResult, RequestError, RequestErrorKind};
//!
//! fn check_genres(count: usize) -> RaconteurResult<()> {
//!     if count == 0 || count > 3 {
//!         return Err(RequestError::new(RequestErrorKind::GenreCount(count)).into());
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_genres(4).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod gemini;
mod pipeline;
mod request;

pub use error::{RaconteurError, RaconteurErrorKind, RaconteurResult};
pub use gemini::{GeminiError, GeminiErrorKind, GeminiResult, RetryableError};
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use request::{RequestError, RequestErrorKind};
