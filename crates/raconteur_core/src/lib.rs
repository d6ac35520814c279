//! Core data types for the Raconteur story generation pipeline.
//!
//! This crate provides the foundation data types shared by the pipeline and
//! its model backends: the static genre/length/language catalogs used for
//! prompt text, the normalized image payload, the validated generation
//! request, and the structured story record the pipeline produces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod envelope;
mod genre;
mod image;
mod language;
mod length;
mod record;
mod request;

pub use envelope::{ErrorBody, ErrorEnvelope, GenerationMetadata, StoryData, StoryEnvelope};
pub use genre::Genre;
pub use image::{CANONICAL_MIME_TYPE, ImagePayload, MAX_IMAGE_BYTES};
pub use language::Language;
pub use length::StoryLength;
pub use record::{StoryRecord, StoryRecordBuilder, count_words};
pub use request::{StoryRequest, StoryRequestBuilder};
