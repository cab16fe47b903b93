// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are render-friendly representations for the serving layer
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain values only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::{Film, Page};

/// Fixed column list for tabular film rendering.
pub const FILM_COLUMNS: [&str; 4] = ["title", "description", "genre", "year"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmDto {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub year: i32,
}

impl From<Film> for FilmDto {
    fn from(film: Film) -> Self {
        Self {
            title: film.title,
            description: film.description,
            genre: film.genre,
            year: film.year,
        }
    }
}

/// One page of films plus everything a table template needs: the fixed
/// column list, the echoed page number, and navigation flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilmTableDto {
    pub title: String,
    pub columns: Vec<String>,
    pub items: Vec<FilmDto>,
    pub page: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub offset: usize,
}

impl FilmTableDto {
    pub fn from_page(title: impl Into<String>, page: Page<Film>) -> Self {
        Self {
            title: title.into(),
            columns: FILM_COLUMNS.iter().map(|c| c.to_string()).collect(),
            items: page.items.into_iter().map(FilmDto::from).collect(),
            page: page.page,
            has_prev: page.has_prev,
            has_next: page.has_next,
            offset: page.offset,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreListDto {
    pub title: String,
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsDto {
    pub title: String,
    pub stats: serde_json::Value,
}
