//! Tiered recovery of a structured story from free-form model output.
//!
//! The model is prompted to emit pure JSON but does not always comply:
//! responses arrive wrapped in markdown fences, preceded by conversational
//! prose, or truncated mid-object. Each tier is attempted only when the
//! previous one fails, and the final tier never fails, so this module never
//! produces an error for merely-imperfect formatting.

use raconteur_core::Genre;
use serde_json::Value;

/// Ceiling on the salvaged story text when no `story` field can be excised.
const SALVAGE_MAX_CHARS: usize = 1000;

/// Title given to a salvaged story.
const SALVAGE_TITLE: &str = "Histoire Générée";

/// Inspiration line given to a salvaged story.
const SALVAGE_INSPIRATION: &str = "Basé sur l'analyse de l'image fournie";

/// A tolerant story candidate read from model output.
///
/// Every field is optional; wrong-typed fields degrade to absent rather
/// than failing the parse. Only the validator decides whether a candidate
/// is usable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStory {
    /// Story title, when present and a string
    pub title: Option<String>,
    /// Story text, when present and a string
    pub story: Option<String>,
    /// Themes, when present and an array with at least one string
    pub themes: Option<Vec<String>>,
    /// Inspiration line, when present and a string
    pub inspiration: Option<String>,
    /// Model-reported word count, when present and numeric
    pub word_count: Option<u32>,
}

impl RawStory {
    /// Read a candidate from a parsed JSON object, field by field.
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: string_field(value, "title"),
            story: string_field(value, "story"),
            themes: value.get("themes").and_then(|t| t.as_array()).map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            }).filter(|v| !v.is_empty()),
            inspiration: string_field(value, "inspiration"),
            word_count: value.get("wordCount").and_then(|w| {
                w.as_u64()
                    .or_else(|| w.as_str().and_then(|s| s.parse().ok()))
                    .map(|n| n as u32)
            }),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .filter(|s| !s.trim().is_empty())
}

/// How a story candidate was obtained.
///
/// The degradation path is explicit: callers can log or branch on the tier
/// without re-deriving it from the candidate's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// The cleaned response parsed directly as a JSON object
    Parsed(RawStory),
    /// An object embedded in surrounding prose parsed
    Recovered(RawStory),
    /// No parseable structure; a degraded candidate built from the raw text
    Salvaged(RawStory),
}

impl ParseOutcome {
    /// The recovered candidate, whichever tier produced it.
    pub fn story(&self) -> &RawStory {
        match self {
            ParseOutcome::Parsed(s) | ParseOutcome::Recovered(s) | ParseOutcome::Salvaged(s) => s,
        }
    }

    /// Tier name for logging.
    pub fn tier(&self) -> &'static str {
        match self {
            ParseOutcome::Parsed(_) => "parsed",
            ParseOutcome::Recovered(_) => "recovered",
            ParseOutcome::Salvaged(_) => "salvaged",
        }
    }
}

/// Extract a story candidate from raw model output.
///
/// Tier 1 strips markdown fences and parses the whole response. Tier 2
/// extracts the first balanced `{...}` span and parses that. Tier 3 builds
/// a degraded candidate from the text itself and cannot fail.
///
/// # Examples
///
/// ```
/// use raconteur_core::Genre;
/// use raconteur_pipeline::{ParseOutcome, recover};
///
/// let raw = "Sure! ```json\n{\"title\": \"X\", \"story\": \"Y Y Y\"}\n```";
/// let outcome = recover(raw, &[Genre::Horror]);
/// assert!(matches!(outcome, ParseOutcome::Recovered(_)));
/// assert_eq!(outcome.story().title.as_deref(), Some("X"));
/// ```
pub fn recover(raw: &str, genres: &[Genre]) -> ParseOutcome {
    let cleaned = strip_fences(raw);
    if let Some(object) = parse_object(&cleaned) {
        return ParseOutcome::Parsed(RawStory::from_value(&object));
    }

    if let Some(span) = extract_balanced(raw, '{', '}')
        && let Some(object) = parse_object(&strip_fences(&span))
    {
        return ParseOutcome::Recovered(RawStory::from_value(&object));
    }

    tracing::warn!(
        response_len = raw.len(),
        "No parseable story structure in model output, salvaging"
    );
    ParseOutcome::Salvaged(salvage(raw, genres))
}

/// Parse a string as a JSON object, rejecting non-object values.
fn parse_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

/// Remove markdown code-fence markers and trim.
fn strip_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extract content between balanced delimiters.
///
/// Finds the first occurrence of `open` and extracts content up to the
/// matching `close`, handling nesting and quoted strings correctly.
fn extract_balanced(text: &str, open: char, close: char) -> Option<String> {
    let start = text.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start..start + i + ch.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

/// Build the terminal-fallback candidate from unstructured text.
///
/// Prefers the `"story"` field value excised between its quotes when the
/// response contains a recognizable fragment of one; otherwise uses the
/// fence-stripped text, bounded to [`SALVAGE_MAX_CHARS`].
fn salvage(raw: &str, genres: &[Genre]) -> RawStory {
    let story = match excise_story_field(raw) {
        Some(excised) if !excised.trim().is_empty() => excised,
        _ => {
            let stripped = strip_fences(raw);
            if stripped.is_empty() {
                raw.trim().to_string()
            } else {
                truncate_chars(stripped, SALVAGE_MAX_CHARS)
            }
        }
    };

    RawStory {
        title: Some(SALVAGE_TITLE.to_string()),
        story: Some(story),
        themes: Some(genres.iter().map(|g| g.id().to_string()).collect()),
        inspiration: Some(SALVAGE_INSPIRATION.to_string()),
        word_count: None,
    }
}

/// Pull the value of a `"story"` field out of broken JSON.
///
/// Scans for the key, its colon, and the opening quote, then walks to the
/// first unescaped closing quote, unescaping `\n` and `\"` along the way.
fn excise_story_field(text: &str) -> Option<String> {
    let key_pos = text.find("\"story\"")?;
    let after_key = &text[key_pos + "\"story\"".len()..];
    let colon = after_key.find(':')?;
    let after_colon = after_key[colon + 1..].trim_start();
    let rest = after_colon.strip_prefix('"')?;

    let mut value = String::new();
    let mut chars = rest.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some('n') => value.push('\n'),
                Some('"') => value.push('"'),
                Some('\\') => value.push('\\'),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => return None,
            },
            '"' => return Some(value),
            other => value.push(other),
        }
    }
    // Truncated response: the closing quote never arrived.
    Some(value)
}

/// Truncate to a maximum number of characters on a char boundary.
fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text,
    }
}
