//! The fixed language catalog.

use serde::{Deserialize, Serialize};

/// Output language for a generated story.
///
/// Each language carries a display name and the instruction line embedded
/// in the prompt. Unrecognized tags resolve to the default ([`Language::Fr`])
/// instead of failing; use [`Language::from_tag`] for that behavior.
///
/// # Examples
///
/// ```
/// use raconteur_core::Language;
///
/// assert_eq!(Language::from_tag("en"), Language::En);
/// assert_eq!(Language::from_tag("nl"), Language::Fr);
/// assert_eq!(Language::default(), Language::Fr);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
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
pub enum Language {
    /// French (default)
    #[default]
    Fr,
    /// English
    En,
    /// Spanish
    Es,
    /// German
    De,
    /// Italian
    It,
    /// Russian
    Ru,
}

impl Language {
    /// The short identifier used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::It => "it",
            Language::Ru => "ru",
        }
    }

    /// Human-readable name, used inside the prompt's schema template.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
            Language::Es => "Español",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Ru => "Русский",
        }
    }

    /// Instruction line embedded verbatim in the prompt.
    pub fn instruction_line(&self) -> &'static str {
        match self {
            Language::Fr => "LANGUE: Français",
            Language::En => "LANGUAGE: English",
            Language::Es => "IDIOMA: Español",
            Language::De => "SPRACHE: Deutsch",
            Language::It => "LINGUA: Italiano",
            Language::Ru => "ЯЗЫК: Русский",
        }
    }

    /// Resolve a language tag, falling back to the default for unknown tags.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "fr" => Language::Fr,
            "en" => Language::En,
            "es" => Language::Es,
            "de" => Language::De,
            "it" => Language::It,
            "ru" => Language::Ru,
            _ => Language::default(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn unknown_tags_fall_back_to_french() {
        assert_eq!(Language::from_tag(""), Language::Fr);
        assert_eq!(Language::from_tag("zz"), Language::Fr);
        assert_eq!(Language::from_tag("EN"), Language::Fr);
    }

    #[test]
    fn every_language_has_an_instruction_line() {
        for lang in Language::iter() {
            assert!(lang.instruction_line().contains(": "));
            assert!(!lang.display_name().is_empty());
        }
    }
}
