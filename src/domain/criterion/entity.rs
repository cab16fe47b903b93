use serde::{Deserialize, Serialize};

use crate::domain::film::Film;

/// A single well-typed filter predicate applied against the catalog.
/// Exactly one criterion is active per search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterCriterion {
    /// Exact, case-sensitive equality against the genre field
    Genre { value: String },

    /// Case-insensitive substring match against the title only
    KeywordInTitle { value: String },

    /// Inclusive on both ends; an inverted range matches nothing
    YearRange { from: i32, to: i32 },
}

impl FilterCriterion {
    pub fn matches(&self, film: &Film) -> bool {
        match self {
            FilterCriterion::Genre { value } => film.genre == *value,
            FilterCriterion::KeywordInTitle { value } => film
                .title
                .to_lowercase()
                .contains(&value.to_lowercase()),
            FilterCriterion::YearRange { from, to } => {
                *from <= film.year && film.year <= *to
            }
        }
    }
}

impl std::fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterCriterion::Genre { value } => write!(f, "genre:{}", value),
            FilterCriterion::KeywordInTitle { value } => write!(f, "keyword:{}", value),
            FilterCriterion::YearRange { from, to } => write!(f, "years:{}..{}", from, to),
        }
    }
}
