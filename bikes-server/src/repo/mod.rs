//! Station repository: the canonical owner of the station collection.
//!
//! Two backends satisfy one capability surface:
//!
//! - [`MemoryRepository`]: snapshot-seeded, synchronous, immediately
//!   consistent, with a TTL summary cache.
//! - [`DocumentRepository`]: remote document store, falling back to an
//!   in-process snapshot on any fault.
//!
//! The backend is picked once at construction; callers only see
//! [`StationRepository`]. Every other component reads snapshots from the
//! repository or mutates through it, never through a second copy.

mod document;
mod memory;

pub use document::DocumentRepository;
pub use memory::MemoryRepository;

use crate::domain::{Station, StationError, StationSummary};
use crate::store::DocumentStoreClient;

/// The station repository, dispatching to the configured backend.
pub enum StationRepository {
    /// In-memory catalog seeded from the snapshot file.
    Memory(MemoryRepository),
    /// Remote document store with local fallback.
    Document(DocumentRepository<DocumentStoreClient>),
}

impl StationRepository {
    /// Build the in-memory backend over the given stations.
    pub fn in_memory(stations: Vec<Station>) -> Self {
        Self::Memory(MemoryRepository::new(stations))
    }

    /// Full snapshot of the catalog. Stable order is not guaranteed
    /// across backends.
    pub async fn list_all(&self) -> Vec<Station> {
        match self {
            Self::Memory(repo) => repo.list_all().await,
            Self::Document(repo) => repo.list_all().await,
        }
    }

    /// Look up one station by number.
    pub async fn get_by_number(&self, number: i32) -> Option<Station> {
        match self {
            Self::Memory(repo) => repo.get_by_number(number).await,
            Self::Document(repo) => repo.get_by_number(number).await,
        }
    }

    /// Insert a new station. Fails with [`StationError::Conflict`] when
    /// the number is already taken.
    pub async fn create(&self, station: Station) -> Result<Station, StationError> {
        match self {
            Self::Memory(repo) => repo.create(station).await,
            Self::Document(repo) => repo.create(station).await,
        }
    }

    /// Replace the mutable fields of an existing station, preserving its
    /// number. Fails with [`StationError::NotFound`] when absent.
    pub async fn update(&self, station: Station) -> Result<Station, StationError> {
        match self {
            Self::Memory(repo) => repo.update(station).await,
            Self::Document(repo) => repo.update(station).await,
        }
    }

    /// Remove a station. `true` if something was removed.
    pub async fn delete(&self, number: i32) -> bool {
        match self {
            Self::Memory(repo) => repo.delete(number).await,
            Self::Document(repo) => repo.delete(number).await,
        }
    }

    /// Aggregate summary of the catalog.
    pub async fn summary(&self) -> StationSummary {
        match self {
            Self::Memory(repo) => repo.summary().await,
            Self::Document(repo) => repo.summary().await,
        }
    }
}
