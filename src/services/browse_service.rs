// src/services/browse_service.rs
use std::sync::Arc;

use crate::domain::{filter, paginate, Film, FilterCriterion, Page, PageRequest};
use crate::error::AppResult;
use crate::repositories::CatalogRepository;

/// Stateless browsing over the catalog: every call reads the catalog
/// through the repository and runs the pure filter-and-paginate engine
/// on it. Nothing is kept between calls.
pub struct BrowseService {
    catalog_repo: Arc<dyn CatalogRepository>,
}

impl BrowseService {
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog_repo }
    }

    /// Sorted unique genre names across the whole catalog.
    pub fn list_genres(&self) -> AppResult<Vec<String>> {
        let catalog = self.catalog_repo.load()?;
        Ok(catalog.genres())
    }

    /// Filter the catalog by one criterion and slice out the requested
    /// page. Degenerate inputs (no matches, page past the end) produce
    /// an empty page, never an error.
    pub fn search(
        &self,
        criterion: &FilterCriterion,
        request: PageRequest,
    ) -> AppResult<Page<Film>> {
        let catalog = self.catalog_repo.load()?;
        let matches = filter(&catalog, criterion);
        Ok(paginate(&matches, request))
    }
}
