//! Caller-visible errors from the station engine.
//!
//! These are the only structured errors the repository and validation
//! surface. Remote-store faults are a separate type
//! ([`crate::store::StoreError`]) and never cross the repository
//! boundary: they are logged and masked by fallback.

/// Structured errors surfaced to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StationError {
    /// Duplicate station number on create.
    #[error("station {0} already exists")]
    Conflict(i32),

    /// No station with this number.
    #[error("station {0} not found")]
    NotFound(i32),

    /// Input rejected; the caller must fix the listed fields.
    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),
}
