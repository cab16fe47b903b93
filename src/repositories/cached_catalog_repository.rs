// src/repositories/cached_catalog_repository.rs
//
// Opt-in cache over a CatalogRepository.
//
// Invalidation is explicit only: the cached catalog is served until
// `reload()` is called. The source fixture is never assumed to change
// behind the process's back.

use std::sync::{Arc, RwLock};

use crate::domain::Catalog;
use crate::error::AppResult;
use crate::repositories::CatalogRepository;

pub struct CachedCatalogRepository {
    inner: Arc<dyn CatalogRepository>,
    cached: RwLock<Option<Catalog>>,
}

impl CachedCatalogRepository {
    pub fn new(inner: Arc<dyn CatalogRepository>) -> Self {
        Self {
            inner,
            cached: RwLock::new(None),
        }
    }

    /// Drop the cached catalog and read a fresh one from the source.
    pub fn reload(&self) -> AppResult<()> {
        let fresh = self.inner.load()?;
        log::info!("catalog cache reloaded: {} films", fresh.len());
        *self.cached.write().unwrap() = Some(fresh);
        Ok(())
    }
}

impl CatalogRepository for CachedCatalogRepository {
    fn load(&self) -> AppResult<Catalog> {
        if let Some(catalog) = self.cached.read().unwrap().as_ref() {
            return Ok(catalog.clone());
        }

        let fresh = self.inner.load()?;
        *self.cached.write().unwrap() = Some(fresh.clone());
        Ok(fresh)
    }
}
