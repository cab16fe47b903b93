// src/domain/criterion/engine.rs
//
// Pure filtering half of the filter-and-paginate engine.
//
// DESIGN PRINCIPLES:
// 1. Pure - no I/O, no shared state, safe to call concurrently
// 2. Deterministic - same catalog + criterion => same result
// 3. Order-preserving - matches keep their relative catalog order

use crate::domain::criterion::FilterCriterion;
use crate::domain::film::{Catalog, Film};

/// Apply one criterion to the full catalog.
///
/// Never fails: degenerate inputs (empty catalog, inverted year range,
/// keyword with no hits) produce an empty result, not an error.
pub fn filter(catalog: &Catalog, criterion: &FilterCriterion) -> Vec<Film> {
    let matches: Vec<Film> = catalog
        .films()
        .iter()
        .filter(|film| criterion.matches(film))
        .cloned()
        .collect();

    log::debug!(
        "filter {} matched {} of {} films",
        criterion,
        matches.len(),
        catalog.len()
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, genre: &str, year: i32) -> Film {
        Film {
            title: title.to_string(),
            description: format!("{} ({})", title, year),
            genre: genre.to_string(),
            year,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            film("The Long Night", "Thriller", 1995),
            film("Night Shift", "Comedy", 1982),
            film("Quiet River", "Drama", 1995),
            film("NIGHTFALL", "Thriller", 2001),
            film("Morning Light", "Drama", 1988),
        ])
    }

    #[test]
    fn test_genre_filter_is_exact_and_order_preserving() {
        let result = filter(
            &catalog(),
            &FilterCriterion::Genre {
                value: "Drama".to_string(),
            },
        );
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|f| f.genre == "Drama"));
        assert_eq!(result[0].title, "Quiet River");
        assert_eq!(result[1].title, "Morning Light");
    }

    #[test]
    fn test_genre_filter_is_case_sensitive() {
        let result = filter(
            &catalog(),
            &FilterCriterion::Genre {
                value: "drama".to_string(),
            },
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_keyword_matches_case_insensitively() {
        let lower = filter(
            &catalog(),
            &FilterCriterion::KeywordInTitle {
                value: "night".to_string(),
            },
        );
        let upper = filter(
            &catalog(),
            &FilterCriterion::KeywordInTitle {
                value: "NIGHT".to_string(),
            },
        );
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 3);
        assert_eq!(lower[0].title, "The Long Night");
        assert_eq!(lower[1].title, "Night Shift");
        assert_eq!(lower[2].title, "NIGHTFALL");
    }

    #[test]
    fn test_year_range_is_inclusive_on_both_ends() {
        let result = filter(&catalog(), &FilterCriterion::YearRange { from: 1982, to: 1995 });
        assert_eq!(result.len(), 4);
        assert!(result.iter().all(|f| (1982..=1995).contains(&f.year)));
    }

    #[test]
    fn test_inverted_year_range_is_empty() {
        let result = filter(&catalog(), &FilterCriterion::YearRange { from: 2001, to: 1995 });
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let empty = Catalog::default();
        let result = filter(
            &empty,
            &FilterCriterion::KeywordInTitle {
                value: "anything".to_string(),
            },
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_catalog() {
        let before = catalog();
        let _ = filter(
            &before,
            &FilterCriterion::Genre {
                value: "Thriller".to_string(),
            },
        );
        assert_eq!(before, catalog());
    }
}
