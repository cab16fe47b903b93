// src/lib.rs
// FilmHub - Film catalog browser core
//
// Architecture:
// - Domain-centric: the filter-and-paginate engine is pure and lives in domain
// - Layered: repositories (fixture access) -> services -> application boundary
// - Explicit: no implicit behavior, no hidden global state
// - Read-only: the catalog is fixture data, never written back

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    filter,
    paginate,
    validate_film,
    // Catalog
    Catalog,
    Film,
    // Criteria
    FilterCriterion,
    // Pagination
    Page,
    PageRequest,
    // Statistics
    StatisticsReport,
    DEFAULT_PAGE_SIZE,
};

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services & Boundary
// ============================================================================

pub use application::AppState;
pub use services::{BrowseService, SearchSessionService, StatisticsService};
