// src/repositories/catalog_repository.rs
//
// Film catalog access over the JSON fixture

use std::fs;
use std::path::PathBuf;

use crate::domain::Catalog;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait CatalogRepository: Send + Sync {
    /// Read the full catalog from the backing fixture.
    /// Fresh read, point-in-time consistent within one call.
    fn load(&self) -> AppResult<Catalog>;
}

pub struct JsonCatalogRepository {
    path: PathBuf,
}

impl JsonCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogRepository for JsonCatalogRepository {
    fn load(&self) -> AppResult<Catalog> {
        let raw = fs::read_to_string(&self.path).map_err(|source| AppError::DataUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let catalog: Catalog =
            serde_json::from_str(&raw).map_err(|e| AppError::DataMalformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        log::debug!(
            "loaded {} films from {}",
            catalog.len(),
            self.path.display()
        );

        Ok(catalog)
    }
}
