//! Thin HTTP layer over the station engine.
//!
//! Routes wrap the repository, query engine and validator 1:1; no
//! business logic lives here.

mod dto;
mod routes;
mod state;

pub use dto::{ListStationsQuery, StationInput, StationView};
pub use routes::{AppError, create_router};
pub use state::AppState;
