pub mod entity;

pub use entity::StatisticsReport;
