pub mod engine;
pub mod entity;

pub use engine::filter;
pub use entity::FilterCriterion;
