// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod browse_service;
pub mod session_service;
pub mod statistics_service;

#[cfg(test)]
mod browse_service_tests;

// Re-export all services and their types
pub use browse_service::BrowseService;

pub use session_service::{SearchSessionService, StoredSearch};

pub use statistics_service::StatisticsService;
