// src/repositories/statistics_repository.rs
//
// Statistics fixture access. The payload shape is caller-opaque.

use std::fs;
use std::path::PathBuf;

use crate::domain::StatisticsReport;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait StatisticsRepository: Send + Sync {
    fn load(&self) -> AppResult<StatisticsReport>;
}

pub struct JsonStatisticsRepository {
    path: PathBuf,
}

impl JsonStatisticsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatisticsRepository for JsonStatisticsRepository {
    fn load(&self) -> AppResult<StatisticsReport> {
        let raw = fs::read_to_string(&self.path).map_err(|source| AppError::DataUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(|e| AppError::DataMalformed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        log::debug!("loaded statistics from {}", self.path.display());

        Ok(StatisticsReport::new(value))
    }
}
