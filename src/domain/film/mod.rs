pub mod entity;
pub mod invariants;

pub use entity::{Catalog, Film};
pub use invariants::validate_film;
