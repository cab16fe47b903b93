pub mod engine;
pub mod entity;

pub use engine::paginate;
pub use entity::{Page, PageRequest, DEFAULT_PAGE_SIZE};
