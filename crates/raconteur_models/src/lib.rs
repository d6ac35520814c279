//! Model backend implementations for Raconteur.
//!
//! Currently a single backend: the Google Gemini REST API, spoken directly
//! over `reqwest` because the generation call must carry inline image data.
//!
//! # Example
//!
//! ```no_run
//! use raconteur_models::GeminiVision;
//! use raconteur_interface::VisionDriver;
//! use raconteur_core::ImagePayload;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = GeminiVision::new()?;
//! let image = ImagePayload::from_bytes(std::fs::read("photo.jpg")?)?;
//! let raw = driver.generate("Describe this image.", &image).await?;
//! println!("{raw}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;

pub use gemini::{
    Blob, Candidate, Content, DEFAULT_MODEL, GeminiVision, GenerateContentRequest,
    GenerateContentResponse, Part, PromptFeedback,
};
