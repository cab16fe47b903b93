use serde::{Deserialize, Serialize};

/// A single film record as stored in the catalog fixture.
/// All four fields are required; a record missing any of them is a
/// schema violation surfaced by the repository as `DataMalformed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Display title
    pub title: String,

    /// Free-form synopsis
    pub description: String,

    /// Genre name, matched exactly as stored
    pub genre: String,

    /// Release year
    pub year: i32,
}

/// The full film catalog for one process lifetime.
///
/// Order is significant: it comes verbatim from the fixture and
/// determines pagination slice boundaries. The catalog is never
/// mutated after loading; no deduplication, no reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<Film>);

impl Catalog {
    pub fn new(films: Vec<Film>) -> Self {
        Self(films)
    }

    pub fn films(&self) -> &[Film] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sorted, deduplicated genre names across the whole catalog.
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = self.0.iter().map(|f| f.genre.clone()).collect();
        genres.sort();
        genres.dedup();
        genres
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self(Vec::new())
    }
}
