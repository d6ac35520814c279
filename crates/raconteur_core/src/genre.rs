//! The fixed genre catalog.

use raconteur_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};

/// A narrative genre used to steer generation tone.
///
/// The catalog is fixed; requests carrying identifiers outside it are
/// rejected during validation. Each genre carries a descriptive gloss used
/// only when composing prompt text.
///
/// # Examples
///
/// ```
/// use raconteur_core::Genre;
///
/// let genre: Genre = "sci-fi".parse().unwrap();
/// assert_eq!(genre, Genre::SciFi);
/// assert_eq!(genre.id(), "sci-fi");
/// assert!("western".parse::<Genre>().is_err());
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
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    /// Horror
    Horror,
    /// Fantasy
    Fantasy,
    /// Science fiction
    SciFi,
    /// Romance
    Romance,
    /// Adventure
    Adventure,
    /// Mystery
    Mystery,
    /// Comedy
    Comedy,
    /// Drama
    Drama,
    /// Thriller
    Thriller,
    /// Historical fiction
    Historical,
}

impl Genre {
    /// The short identifier used on the wire and in prompt text.
    pub fn id(&self) -> &'static str {
        match self {
            Genre::Horror => "horror",
            Genre::Fantasy => "fantasy",
            Genre::SciFi => "sci-fi",
            Genre::Romance => "romance",
            Genre::Adventure => "adventure",
            Genre::Mystery => "mystery",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Thriller => "thriller",
            Genre::Historical => "historical",
        }
    }

    /// Descriptive gloss injected alongside the identifier in prompt text.
    pub fn description(&self) -> &'static str {
        match self {
            Genre::Horror => {
                "atmosphère terrifiante, suspense, éléments surnaturels ou psychologiques effrayants"
            }
            Genre::Fantasy => "éléments magiques, créatures fantastiques, mondes imaginaires",
            Genre::SciFi => {
                "technologie avancée, futur, exploration spatiale, concepts scientifiques"
            }
            Genre::Romance => "relations amoureuses, émotions, connexions humaines profondes",
            Genre::Adventure => "action, exploration, découvertes, voyages épiques",
            Genre::Mystery => "énigmes, secrets à résoudre, révélations progressives",
            Genre::Comedy => "situations amusantes, humour, légèreté, moments drôles",
            Genre::Drama => "émotions intenses, conflits humains, situations complexes",
            Genre::Thriller => "tension constante, suspense, rebondissements, rythme soutenu",
            Genre::Historical => {
                "contexte historique précis, époque passée, authenticité culturelle"
            }
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Genre {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horror" => Ok(Genre::Horror),
            "fantasy" => Ok(Genre::Fantasy),
            "sci-fi" => Ok(Genre::SciFi),
            "romance" => Ok(Genre::Romance),
            "adventure" => Ok(Genre::Adventure),
            "mystery" => Ok(Genre::Mystery),
            "comedy" => Ok(Genre::Comedy),
            "drama" => Ok(Genre::Drama),
            "thriller" => Ok(Genre::Thriller),
            "historical" => Ok(Genre::Historical),
            other => Err(RequestError::new(RequestErrorKind::UnknownGenre(
                other.to_string(),
            ))),
        }
    }
}
