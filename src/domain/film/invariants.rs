use super::entity::Film;
use crate::domain::{DomainError, DomainResult};

/// Validates all Film invariants
pub fn validate_film(film: &Film) -> DomainResult<()> {
    if film.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Film title cannot be empty".to_string(),
        ));
    }
    if film.genre.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Film genre cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Film domain:
///
/// 1. Title and genre are non-empty
/// 2. Records carry no identity; duplicates are allowed
/// 3. Records are immutable once loaded

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_film() {
        let film = Film {
            title: "Stalker".to_string(),
            description: "Three men enter the Zone".to_string(),
            genre: "Drama".to_string(),
            year: 1979,
        };
        assert!(validate_film(&film).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let film = Film {
            title: "   ".to_string(),
            description: String::new(),
            genre: "Drama".to_string(),
            year: 1979,
        };
        assert!(validate_film(&film).is_err());
    }

    #[test]
    fn test_empty_genre_fails() {
        let film = Film {
            title: "Stalker".to_string(),
            description: String::new(),
            genre: "".to_string(),
            year: 1979,
        };
        assert!(validate_film(&film).is_err());
    }
}
