//! Test utilities for pipeline tests.
//!
//! Provides a mock driver so pipeline behavior can be validated without
//! real API calls.

use async_trait::async_trait;
use raconteur_core::{Genre, ImagePayload, Language, StoryLength, StoryRequest};
use raconteur_error::{GeminiError, GeminiErrorKind, RaconteurResult};
use raconteur_interface::VisionDriver;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One scripted driver response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Resolve with this raw text
    Success(String),
    /// Fail with this error kind
    Error(GeminiErrorKind),
    /// Never settle (for timeout tests)
    Hang,
}

/// A scripted stand-in for a vision model backend.
pub struct MockVisionDriver {
    responses: Mutex<VecDeque<MockResponse>>,
    repeat_last: MockResponse,
    calls: AtomicUsize,
}

impl MockVisionDriver {
    /// Always resolve with the given text.
    pub fn new_success(text: &str) -> Self {
        Self::new_repeating(MockResponse::Success(text.to_string()))
    }

    /// Always fail with the given kind.
    pub fn new_error(kind: GeminiErrorKind) -> Self {
        Self::new_repeating(MockResponse::Error(kind))
    }

    /// Never settle.
    pub fn new_hanging() -> Self {
        Self::new_repeating(MockResponse::Hang)
    }

    /// Play the scripted responses in order, then repeat the last one.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        let repeat_last = responses
            .last()
            .cloned()
            .unwrap_or(MockResponse::Hang);
        Self {
            responses: Mutex::new(responses.into()),
            repeat_last,
            calls: AtomicUsize::new(0),
        }
    }

    fn new_repeating(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            repeat_last: response,
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times `generate` was called.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionDriver for MockVisionDriver {
    async fn generate(&self, _prompt: &str, _image: &ImagePayload) -> RaconteurResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.repeat_last.clone());
        match next {
            MockResponse::Success(text) => Ok(text),
            MockResponse::Error(kind) => Err(GeminiError::new(kind).into()),
            MockResponse::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-vision"
    }
}

/// A small valid request for tests.
pub fn test_request(genres: Vec<Genre>) -> StoryRequest {
    StoryRequest::builder()
        .genres(genres)
        .length(StoryLength::Short)
        .language(Language::En)
        .image(ImagePayload::from_bytes(vec![0xFF, 0xD8, 0xFF, 0xE0]).unwrap())
        .build()
        .unwrap()
}
