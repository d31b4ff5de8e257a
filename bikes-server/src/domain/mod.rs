//! Core domain types for the station catalog.

mod error;
mod station;
mod summary;

pub use error::StationError;
pub use station::{Position, Station};
pub use summary::{StationSummary, summarize};
