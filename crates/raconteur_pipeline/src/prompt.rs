//! Prompt composition.

use raconteur_core::{Genre, Language, StoryLength};

/// Build the instruction text sent to the model.
///
/// Pure function of its inputs: identical parameters always produce an
/// identical prompt (no timestamps, no randomness). The genre identifiers
/// appear verbatim so the model can echo them back as themes.
///
/// # Examples
///
/// ```
/// use raconteur_core::{Genre, Language, StoryLength};
/// use raconteur_pipeline::compose_prompt;
///
/// let prompt = compose_prompt(
///     &[Genre::Horror, Genre::Comedy],
///     StoryLength::Short,
///     Language::En,
/// );
/// assert!(prompt.contains("horror, comedy"));
/// assert!(prompt.contains("100-200"));
/// assert!(prompt.contains("LANGUAGE: English"));
/// ```
pub fn compose_prompt(genres: &[Genre], length: StoryLength, language: Language) -> String {
    let genre_ids = genres
        .iter()
        .map(|g| g.id())
        .collect::<Vec<_>>()
        .join(", ");
    let genre_glosses = genres
        .iter()
        .map(|g| g.description())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze this image carefully and create a captivating story of {words} words.\n\
         \n\
         GENRES: {genre_ids} ({genre_glosses})\n\
         LENGTH: {style_hint} ({words} words)\n\
         {language_line}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Observe every visual detail of the image (characters, objects, setting, mood, colors, composition)\n\
         2. Create a story that integrates the requested genres naturally\n\
         3. The story must be directly inspired by the observed visual elements\n\
         4. Complete narrative arc: opening situation, development, resolution\n\
         5. Respect the requested word count strictly\n\
         6. Write the story entirely in {language_name}\n\
         \n\
         RESPONSE FORMAT (JSON only):\n\
         {{\n\
         \x20 \"title\": \"Story title in {language_name}\",\n\
         \x20 \"story\": \"Complete story text in {language_name}\",\n\
         \x20 \"themes\": [\"theme1\", \"theme2\", \"theme3\"],\n\
         \x20 \"inspiration\": \"Visual elements that inspired the story\",\n\
         \x20 \"wordCount\": approximate_word_count\n\
         }}\n\
         \n\
         IMPORTANT: Respond ONLY with the JSON, no additional text.",
        words = length.word_range(),
        style_hint = length.style_hint(),
        language_line = language.instruction_line(),
        language_name = language.display_name(),
    )
}
