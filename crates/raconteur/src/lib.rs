//! Raconteur - image-to-story generation pipeline.
//!
//! Raconteur takes an image plus generation parameters (genres, target
//! length, output language) and produces a validated story record by
//! delegating creative synthesis to a generative vision model, then coercing
//! the model's free-form output into a strongly-typed result.
//!
//! # Features
//!
//! - **Tiered recovery parsing**: malformed model output degrades gracefully
//!   instead of failing
//! - **Stable error taxonomy**: every failure classifies into a fixed set of
//!   kinds with HTTP status hints and retry guidance
//! - **Injected backends**: the model client is an explicit dependency
//!   behind the `VisionDriver` trait, so test doubles plug in freely
//! - **Timeout race**: one generation call per request, bounded by a
//!   wall-clock timeout
//!
//! # Quick Start
//!
//! ```no_run
//! use raconteur::{
//!     Genre, GeminiVision, ImagePayload, Language, StoryLength, StoryPipeline, StoryRequest,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = StoryPipeline::new(Arc::new(GeminiVision::new()?));
//!
//!     let request = StoryRequest::builder()
//!         .genres(vec![Genre::Horror, Genre::Comedy])
//!         .length(StoryLength::Short)
//!         .language(Language::En)
//!         .image(ImagePayload::from_bytes(std::fs::read("photo.jpg")?)?)
//!         .build()?;
//!
//!     let record = pipeline.generate(&request).await?;
//!     println!("{}: {} words", record.title, record.word_count);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Raconteur is organized as a workspace with focused crates:
//!
//! - `raconteur_core` - Core data types (catalogs, payloads, records)
//! - `raconteur_interface` - VisionDriver trait definition
//! - `raconteur_error` - Error taxonomy and classification
//! - `raconteur_models` - Model backend implementations
//! - `raconteur_pipeline` - The orchestration pipeline
//!
//! This crate (`raconteur`) re-exports everything for convenience.

#![forbid(unsafe_code)]

// Re-export core crates (always available)
pub use raconteur_core::*;
pub use raconteur_error::*;
pub use raconteur_interface::*;
pub use raconteur_pipeline::*;

// Re-export the backend crate based on features
#[cfg(feature = "gemini")]
pub use raconteur_models::*;
