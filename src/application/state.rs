// src/application/state.rs

use std::path::Path;
use std::sync::Arc;

use crate::error::AppResult;
use crate::repositories::{
    CachedCatalogRepository, CatalogRepository, JsonCatalogRepository, JsonStatisticsRepository,
    StatisticsRepository,
};
use crate::services::{BrowseService, SearchSessionService, StatisticsService};

pub const FILMS_FILE: &str = "films.json";
pub const STATS_FILE: &str = "statistics.json";

/// Shared application state for the serving layer.
/// All fields are Arc-wrapped for thread-safe sharing across requests.
pub struct AppState {
    pub browse_service: Arc<BrowseService>,
    pub session_service: Arc<SearchSessionService>,
    pub statistics_service: Arc<StatisticsService>,
    catalog_cache: Option<Arc<CachedCatalogRepository>>,
}

impl AppState {
    /// Wire repositories and services over a data directory containing
    /// `films.json` and `statistics.json`. Every request re-reads the
    /// fixtures; see `with_cached_catalog` for the cached variant.
    pub fn new(data_dir: &Path) -> Self {
        let catalog_repo: Arc<dyn CatalogRepository> =
            Arc::new(JsonCatalogRepository::new(data_dir.join(FILMS_FILE)));
        let statistics_repo: Arc<dyn StatisticsRepository> =
            Arc::new(JsonStatisticsRepository::new(data_dir.join(STATS_FILE)));

        Self::wire(catalog_repo, statistics_repo, None)
    }

    /// Like `new`, but the catalog is parsed once and served from the
    /// cache until `reload_catalog` is called. Invalidation is explicit
    /// only.
    pub fn with_cached_catalog(data_dir: &Path) -> Self {
        let source: Arc<dyn CatalogRepository> =
            Arc::new(JsonCatalogRepository::new(data_dir.join(FILMS_FILE)));
        let cache = Arc::new(CachedCatalogRepository::new(source));
        let statistics_repo: Arc<dyn StatisticsRepository> =
            Arc::new(JsonStatisticsRepository::new(data_dir.join(STATS_FILE)));

        Self::wire(cache.clone(), statistics_repo, Some(cache))
    }

    fn wire(
        catalog_repo: Arc<dyn CatalogRepository>,
        statistics_repo: Arc<dyn StatisticsRepository>,
        catalog_cache: Option<Arc<CachedCatalogRepository>>,
    ) -> Self {
        Self {
            browse_service: Arc::new(BrowseService::new(catalog_repo.clone())),
            session_service: Arc::new(SearchSessionService::new(catalog_repo)),
            statistics_service: Arc::new(StatisticsService::new(statistics_repo)),
            catalog_cache,
        }
    }

    /// Re-read the catalog fixture. A no-op error-free call when the
    /// state was built without a cache (fresh reads already see the
    /// source on every request).
    pub fn reload_catalog(&self) -> AppResult<()> {
        match &self.catalog_cache {
            Some(cache) => cache.reload(),
            None => Ok(()),
        }
    }
}
