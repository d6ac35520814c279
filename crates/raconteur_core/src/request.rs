//! The validated generation request.

use crate::{Genre, ImagePayload, Language, MAX_IMAGE_BYTES, StoryLength};
use derive_builder::Builder;
use raconteur_error::{RaconteurResult, RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};

/// A story generation request.
///
/// Arrives already deserialized by an external validation layer; the
/// pipeline re-validates the invariants it depends on before composing any
/// prompt text or touching the network.
///
/// # Examples
///
/// ```
/// use raconteur_core::{Genre, ImagePayload, Language, StoryLength, StoryRequest};
///
/// let request = StoryRequest::builder()
///     .genres(vec![Genre::Horror, Genre::Comedy])
///     .length(StoryLength::Short)
///     .language(Language::En)
///     .image(ImagePayload::from_bytes(vec![0xFF, 0xD8, 0xFF]).unwrap())
///     .build()
///     .unwrap();
///
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
pub struct StoryRequest {
    /// Selected genres, in order (1-3, unique)
    pub genres: Vec<Genre>,
    /// Target story length
    pub length: StoryLength,
    /// Output language
    #[builder(default)]
    #[serde(default)]
    pub language: Language,
    /// Normalized image payload
    pub image: ImagePayload,
}

impl StoryRequest {
    /// Creates a new builder for `StoryRequest`.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }

    /// Check the request invariants.
    ///
    /// # Errors
    ///
    /// Returns an error when the genre count is outside [1,3], a genre is
    /// duplicated, the image payload is empty, or the payload exceeds
    /// [`MAX_IMAGE_BYTES`].
    pub fn validate(&self) -> RaconteurResult<()> {
        if self.genres.is_empty() || self.genres.len() > 3 {
            return Err(RequestError::new(RequestErrorKind::GenreCount(
                self.genres.len(),
            ))
            .into());
        }
        for (i, genre) in self.genres.iter().enumerate() {
            if self.genres[..i].contains(genre) {
                return Err(RequestError::new(RequestErrorKind::DuplicateGenre(
                    genre.id().to_string(),
                ))
                .into());
            }
        }
        if self.image.bytes.is_empty() {
            return Err(RequestError::new(RequestErrorKind::EmptyImage).into());
        }
        if self.image.bytes.len() > MAX_IMAGE_BYTES {
            return Err(RequestError::new(RequestErrorKind::ImageTooLarge {
                size: self.image.bytes.len(),
                max: MAX_IMAGE_BYTES,
            })
            .into());
        }
        Ok(())
    }

    /// The genre identifiers, in request order.
    pub fn genre_ids(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.id().to_string()).collect()
    }
}
