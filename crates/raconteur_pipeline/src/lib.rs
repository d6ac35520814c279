//! Generation orchestration pipeline for Raconteur.
//!
//! Turns a validated [`StoryRequest`](raconteur_core::StoryRequest) into a
//! guaranteed-valid [`StoryRecord`](raconteur_core::StoryRecord) by composing
//! a prompt, invoking a vision model under a wall-clock timeout, and coercing
//! the model's free-form text response into a structured record through a
//! tiered recovery parser.
//!
//! The parser treats malformed output as a *degraded success* rather than a
//! hard failure: only transport-level failures (timeout, empty response,
//! upstream rejection) and a candidate with neither title nor story surface
//! as errors, classified into the fixed
//! [`PipelineError`](raconteur_error::PipelineError) taxonomy.
//!
//! # Example
//!
//! ```rust,ignore
//! use raconteur_core::{Genre, ImagePayload, Language, StoryLength, StoryRequest};
//! use raconteur_pipeline::StoryPipeline;
//! use std::sync::Arc;
//!
//! let pipeline = StoryPipeline::new(Arc::new(driver));
//! let request = StoryRequest::builder()
//!     .genres(vec![Genre::Horror, Genre::Comedy])
//!     .length(StoryLength::Short)
//!     .language(Language::En)
//!     .image(ImagePayload::from_data_uri(data_uri)?)
//!     .build()?;
//!
//! let record = pipeline.generate(&request).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod invoke;
mod pipeline;
mod prompt;
mod recovery;
mod validate;

pub use invoke::{DEFAULT_TIMEOUT, invoke};
pub use pipeline::StoryPipeline;
pub use prompt::compose_prompt;
pub use recovery::{ParseOutcome, RawStory, recover};
pub use validate::{WordCountPolicy, normalize};
