//! Google Gemini REST backend.

mod client;
mod dto;

pub use client::{DEFAULT_MODEL, GeminiVision};
pub use dto::{
    Blob, Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part,
    PromptFeedback,
};
