//! In-memory repository backend.

use tokio::sync::RwLock;

use crate::cache::SummaryCache;
use crate::domain::{Station, StationError, StationSummary, summarize};

/// Repository backend holding the whole catalog in memory.
///
/// Stations are kept in insertion order, which is the tie-break order
/// for stable sorts downstream. All mutations serialize through the
/// write lock; reads clone the collection under the read lock, so a
/// caller's snapshot never observes a half-applied update.
pub struct MemoryRepository {
    stations: RwLock<Vec<Station>>,
    summary: SummaryCache,
}

impl MemoryRepository {
    /// Create a repository over the given stations (snapshot order).
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations: RwLock::new(stations),
            summary: SummaryCache::default(),
        }
    }

    /// Full snapshot of the catalog, in insertion order.
    pub async fn list_all(&self) -> Vec<Station> {
        self.stations.read().await.clone()
    }

    /// Look up one station by number.
    pub async fn get_by_number(&self, number: i32) -> Option<Station> {
        let guard = self.stations.read().await;
        guard.iter().find(|s| s.number == number).cloned()
    }

    /// Insert a new station.
    pub async fn create(&self, station: Station) -> Result<Station, StationError> {
        {
            let mut guard = self.stations.write().await;
            if guard.iter().any(|s| s.number == station.number) {
                return Err(StationError::Conflict(station.number));
            }
            guard.push(station.clone());
        }
        self.summary.invalidate().await;
        Ok(station)
    }

    /// Replace an existing station's fields, preserving its number.
    pub async fn update(&self, station: Station) -> Result<Station, StationError> {
        {
            let mut guard = self.stations.write().await;
            let Some(existing) = guard.iter_mut().find(|s| s.number == station.number) else {
                return Err(StationError::NotFound(station.number));
            };
            *existing = station.clone();
        }
        self.summary.invalidate().await;
        Ok(station)
    }

    /// Remove a station by number.
    pub async fn delete(&self, number: i32) -> bool {
        let removed = {
            let mut guard = self.stations.write().await;
            let before = guard.len();
            guard.retain(|s| s.number != number);
            guard.len() != before
        };
        if removed {
            self.summary.invalidate().await;
        }
        removed
    }

    /// Aggregate summary, served from the TTL cache.
    pub async fn summary(&self) -> StationSummary {
        self.summary
            .get_or_compute(async {
                let guard = self.stations.read().await;
                summarize(&guard)
            })
            .await
    }
}
