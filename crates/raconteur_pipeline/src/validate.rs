//! Candidate validation and normalization.

use crate::RawStory;
use chrono::Utc;
use raconteur_core::{Genre, StoryRecord, count_words};
use raconteur_error::{PipelineError, PipelineErrorKind};

/// Default title when the model omitted one.
const DEFAULT_TITLE: &str = "Histoire Sans Titre";

/// Default inspiration line when the model omitted one.
const DEFAULT_INSPIRATION: &str = "Inspiré par l'image fournie";

/// Whether `wordCount` comes from the model or is recomputed locally.
///
/// The model's self-reported count is approximate at best; recomputing from
/// the normalized story text is the default. `TrustUpstream` keeps the
/// model's value when it supplied one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordCountPolicy {
    /// Always count whitespace-delimited tokens of the final story text
    #[default]
    Recompute,
    /// Use the model-reported value when present, recompute otherwise
    TrustUpstream,
}

/// Normalize a recovered candidate into a fully populated [`StoryRecord`].
///
/// The sole hard gate: a candidate with neither title nor story (after
/// trimming) is `InvalidStoryStructure`. Everything else is filled from
/// defaults so partial records remain usable: title falls back to a fixed
/// placeholder, story to the raw response text, themes to the request's
/// genres, and inspiration to a fixed line.
///
/// # Errors
///
/// Returns `InvalidStoryStructure` when both `title` and `story` are absent.
pub fn normalize(
    candidate: &RawStory,
    raw_text: &str,
    genres: &[Genre],
    policy: WordCountPolicy,
) -> Result<StoryRecord, PipelineError> {
    let title = candidate.title.as_deref().map(clean_text).filter(|s| !s.is_empty());
    let story = candidate.story.as_deref().map(clean_text).filter(|s| !s.is_empty());

    if title.is_none() && story.is_none() {
        return Err(PipelineError::new(
            PipelineErrorKind::InvalidStoryStructure,
            "recovered candidate has neither title nor story",
        ));
    }

    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let story = story.unwrap_or_else(|| raw_text.trim().to_string());

    let themes = match &candidate.themes {
        Some(themes) if !themes.is_empty() => themes.clone(),
        _ => genres.iter().map(|g| g.id().to_string()).collect(),
    };

    let inspiration = candidate
        .inspiration
        .as_deref()
        .map(clean_text)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_INSPIRATION.to_string());

    let word_count = match policy {
        WordCountPolicy::Recompute => count_words(&story),
        WordCountPolicy::TrustUpstream => {
            candidate.word_count.unwrap_or_else(|| count_words(&story))
        }
    };

    Ok(StoryRecord {
        title,
        story,
        themes,
        inspiration,
        word_count,
        generated_at: Utc::now(),
    })
}

/// Trim whitespace and one pair of surrounding quote characters, then
/// unescape literal `\n` and `\"` sequences left over from double-encoded
/// model output.
fn clean_text(text: &str) -> String {
    let trimmed = text.trim();
    let unquoted = if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };
    unquoted
        .replace("\\n", "\n")
        .replace("\\\"", "\"")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENRES: [Genre; 2] = [Genre::Horror, Genre::Comedy];

    fn candidate(title: Option<&str>, story: Option<&str>) -> RawStory {
        RawStory {
            title: title.map(str::to_string),
            story: story.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn both_fields_absent_is_the_sole_hard_gate() {
        let err = normalize(&candidate(None, None), "raw", &GENRES, WordCountPolicy::default())
            .unwrap_err();
        assert_eq!(err.kind, PipelineErrorKind::InvalidStoryStructure);
    }

    #[test]
    fn missing_title_gets_the_placeholder() {
        let record = normalize(
            &candidate(None, Some("Y Y Y")),
            "raw",
            &GENRES,
            WordCountPolicy::default(),
        )
        .unwrap();
        assert_eq!(record.title, DEFAULT_TITLE);
        assert_eq!(record.story, "Y Y Y");
    }

    #[test]
    fn missing_story_falls_back_to_raw_text() {
        let record = normalize(
            &candidate(Some("X"), None),
            "  the raw response  ",
            &GENRES,
            WordCountPolicy::default(),
        )
        .unwrap();
        assert_eq!(record.story, "the raw response");
    }

    #[test]
    fn themes_default_to_request_genres() {
        let record = normalize(
            &candidate(Some("X"), Some("Y")),
            "raw",
            &GENRES,
            WordCountPolicy::default(),
        )
        .unwrap();
        assert_eq!(record.themes, vec!["horror", "comedy"]);
    }

    #[test]
    fn surrounding_quotes_and_escapes_are_cleaned() {
        let record = normalize(
            &candidate(Some("\"X\""), Some("\"line one\\nline two said \\\"hi\\\"\"")),
            "raw",
            &GENRES,
            WordCountPolicy::default(),
        )
        .unwrap();
        assert_eq!(record.title, "X");
        assert_eq!(record.story, "line one\nline two said \"hi\"");
    }

    #[test]
    fn recompute_policy_ignores_the_upstream_count() {
        let mut raw = candidate(Some("X"), Some("one two three"));
        raw.word_count = Some(99);
        let record = normalize(&raw, "raw", &GENRES, WordCountPolicy::Recompute).unwrap();
        assert_eq!(record.word_count, 3);
    }

    #[test]
    fn trust_policy_keeps_the_upstream_count_when_present() {
        let mut raw = candidate(Some("X"), Some("one two three"));
        raw.word_count = Some(99);
        let record = normalize(&raw, "raw", &GENRES, WordCountPolicy::TrustUpstream).unwrap();
        assert_eq!(record.word_count, 99);

        raw.word_count = None;
        let record = normalize(&raw, "raw", &GENRES, WordCountPolicy::TrustUpstream).unwrap();
        assert_eq!(record.word_count, 3);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let err = normalize(
            &candidate(Some("  "), Some("\"\"")),
            "raw",
            &GENRES,
            WordCountPolicy::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, PipelineErrorKind::InvalidStoryStructure);
    }
}
