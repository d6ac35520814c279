//! The structured story record produced by the pipeline.

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A validated, fully populated story.
///
/// Every field is guaranteed present after normalization: `title` and
/// `story` are non-empty, `themes` is never empty (it defaults to the
/// request's genres), and `word_count` is derived from the story text when
/// the model did not supply one.
///
/// Serialized with camelCase keys to match the client wire format.
///
/// # Examples
///
/// ```
/// use raconteur_core::{StoryRecord, count_words};
/// use chrono::Utc;
///
/// let record = StoryRecord::builder()
///     .title("La Porte".to_string())
///     .story("Elle s'ouvrit toute seule.".to_string())
///     .themes(vec!["horror".to_string()])
///     .inspiration("Une porte entrouverte".to_string())
///     .word_count(count_words("Elle s'ouvrit toute seule."))
///     .generated_at(Utc::now())
///     .build()
///     .unwrap();
///
/// assert_eq!(record.word_count, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    /// Story title
    pub title: String,
    /// Full story text
    pub story: String,
    /// Themes woven into the story
    pub themes: Vec<String>,
    /// Visual elements that inspired the story
    pub inspiration: String,
    /// Word count of the story text
    pub word_count: u32,
    /// When the record was produced
    pub generated_at: DateTime<Utc>,
}

impl StoryRecord {
    /// Creates a new builder for `StoryRecord`.
    pub fn builder() -> StoryRecordBuilder {
        StoryRecordBuilder::default()
    }
}

/// Count whitespace-delimited tokens in a text.
///
/// # Examples
///
/// ```
/// use raconteur_core::count_words;
///
/// assert_eq!(count_words("Y Y Y"), 3);
/// assert_eq!(count_words("  spaced   out  "), 2);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}
