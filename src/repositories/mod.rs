// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data accessors
// - NO business logic
// - NO invariant enforcement beyond schema validation
// - NO cross-repository calls
// - Every load is a full, fresh read of the fixture (the cache
//   decorator is the one explicit exception)

pub mod cached_catalog_repository;
pub mod catalog_repository;
pub mod statistics_repository;

pub use cached_catalog_repository::CachedCatalogRepository;
pub use catalog_repository::{CatalogRepository, JsonCatalogRepository};
pub use statistics_repository::{JsonStatisticsRepository, StatisticsRepository};

#[cfg(test)]
pub use catalog_repository::MockCatalogRepository;
#[cfg(test)]
pub use statistics_repository::MockStatisticsRepository;
