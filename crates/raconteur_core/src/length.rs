//! The fixed length catalog.

use raconteur_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};

/// Target length for a generated story.
///
/// Each length maps to a word-count band and a stylistic hint, both used
/// only for prompt text.
///
/// # Examples
///
/// ```
/// use raconteur_core::StoryLength;
///
/// let length: StoryLength = "medium".parse().unwrap();
/// assert_eq!(length.word_range(), "300-500");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum StoryLength {
    /// 100-200 words
    Short,
    /// 300-500 words
    Medium,
    /// 600-1000 words
    Long,
}

impl StoryLength {
    /// The short identifier used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            StoryLength::Short => "short",
            StoryLength::Medium => "medium",
            StoryLength::Long => "long",
        }
    }

    /// Target word-count band, as prompt text.
    pub fn word_range(&self) -> &'static str {
        match self {
            StoryLength::Short => "100-200",
            StoryLength::Medium => "300-500",
            StoryLength::Long => "600-1000",
        }
    }

    /// Stylistic hint injected into the prompt.
    pub fn style_hint(&self) -> &'static str {
        match self {
            StoryLength::Short => "concise et impactante",
            StoryLength::Medium => "développée avec détails",
            StoryLength::Long => "riche et approfondie",
        }
    }
}

impl std::fmt::Display for StoryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for StoryLength {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(StoryLength::Short),
            "medium" => Ok(StoryLength::Medium),
            "long" => Ok(StoryLength::Long),
            other => Err(RequestError::new(RequestErrorKind::UnknownLength(
                other.to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ids_round_trip_through_from_str() {
        for length in StoryLength::iter() {
            let parsed: StoryLength = length.id().parse().unwrap();
            assert_eq!(parsed, length);
        }
    }

    #[test]
    fn word_ranges_match_the_catalog() {
        assert_eq!(StoryLength::Short.word_range(), "100-200");
        assert_eq!(StoryLength::Medium.word_range(), "300-500");
        assert_eq!(StoryLength::Long.word_range(), "600-1000");
    }
}
