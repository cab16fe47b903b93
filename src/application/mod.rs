// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the domain/repository/service foundation
// - It provides the boundary between the serving layer and the services
// - It translates raw request input into typed criteria and DTOs

pub mod dto;
pub mod queries;
pub mod state;

pub use dto::*;
pub use queries::*;
pub use state::AppState;
