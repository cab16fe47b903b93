// src/services/statistics_service.rs
use std::sync::Arc;

use crate::domain::StatisticsReport;
use crate::error::AppResult;
use crate::repositories::StatisticsRepository;

/// Statistics are precomputed outside this process; the service only
/// loads the report and passes it through uninterpreted.
pub struct StatisticsService {
    statistics_repo: Arc<dyn StatisticsRepository>,
}

impl StatisticsService {
    pub fn new(statistics_repo: Arc<dyn StatisticsRepository>) -> Self {
        Self { statistics_repo }
    }

    pub fn report(&self) -> AppResult<StatisticsReport> {
        self.statistics_repo.load()
    }
}
