// src/application/queries.rs
//
// Query Handlers - the boundary the serving layer calls
//
// RULES:
// - Accept raw request input (query/form parameters, session id)
// - Parse and validate it here; the engine never sees bad input
// - Call services
// - Return DTOs

use uuid::Uuid;

use crate::application::dto::{FilmTableDto, GenreListDto, StatisticsDto};
use crate::application::state::AppState;
use crate::domain::{FilterCriterion, PageRequest};
use crate::error::{AppError, AppResult};

/// Sorted unique genre names, for the genre index page.
pub fn list_genres(state: &AppState) -> AppResult<GenreListDto> {
    let genres = state.browse_service.list_genres()?;
    Ok(GenreListDto {
        title: "Genres".to_string(),
        genres,
    })
}

/// Films of one genre, filtered and paginated in a single request.
pub fn films_by_genre(state: &AppState, genre: &str, page: u32) -> AppResult<FilmTableDto> {
    let criterion = FilterCriterion::Genre {
        value: genre.to_string(),
    };
    let result = state
        .browse_service
        .search(&criterion, PageRequest::for_page(page))?;
    Ok(FilmTableDto::from_page(format!("Genre: {}", genre), result))
}

/// Submit a keyword search for this session (PRG pattern: the caller
/// redirects to `view_results` afterwards).
pub fn submit_keyword_search(state: &AppState, session: Uuid, keyword: &str) -> AppResult<()> {
    if keyword.trim().is_empty() {
        return Err(AppError::InvalidCriterion(
            "keyword must not be empty".to_string(),
        ));
    }
    state.session_service.submit(
        session,
        FilterCriterion::KeywordInTitle {
            value: keyword.to_string(),
        },
    );
    Ok(())
}

/// Submit a year-range search for this session. Non-numeric bounds are
/// rejected here, before anything reaches the engine. An inverted range
/// is well-typed and simply matches nothing.
pub fn submit_year_search(
    state: &AppState,
    session: Uuid,
    year_from: &str,
    year_to: &str,
) -> AppResult<()> {
    let from: i32 = year_from
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidCriterion(format!("year_from is not a year: {:?}", year_from)))?;
    let to: i32 = year_to
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidCriterion(format!("year_to is not a year: {:?}", year_to)))?;

    state
        .session_service
        .submit(session, FilterCriterion::YearRange { from, to });
    Ok(())
}

/// Paginated view of the session's most recent search. A session that
/// never submitted sees an empty page.
pub fn view_results(state: &AppState, session: Uuid, page: u32) -> AppResult<FilmTableDto> {
    let title = match state.session_service.last_criterion(session) {
        Some(FilterCriterion::KeywordInTitle { .. }) => "Search by keyword",
        Some(FilterCriterion::YearRange { .. }) => "Search by year",
        Some(FilterCriterion::Genre { .. }) => "Search by genre",
        None => "Search",
    };
    let result = state
        .session_service
        .view(session, PageRequest::for_page(page))?;
    Ok(FilmTableDto::from_page(title, result))
}

/// The precomputed statistics report, passed through uninterpreted.
pub fn show_statistics(state: &AppState) -> AppResult<StatisticsDto> {
    let report = state.statistics_service.report()?;
    Ok(StatisticsDto {
        title: "Statistics".to_string(),
        stats: report.0,
    })
}
