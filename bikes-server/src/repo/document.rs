//! Document-store repository backend with local fallback.

use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::domain::{Station, StationError, StationSummary, summarize};
use crate::store::{DocumentStore, StoreError};

/// Repository backend over a remote document store.
///
/// Every operation tries the store first; on a fault the operation is
/// logged and served from an in-process fallback set seeded from the
/// startup snapshot. The fallback is not re-synced with the store, so
/// after a fault-then-recovery sequence answers may alternate between
/// the two data sets across calls. Callers must tolerate this.
///
/// [`StoreError::Conflict`] is a structured result, not a fault, and
/// never triggers fallback.
pub struct DocumentRepository<S> {
    store: S,
    fallback: RwLock<Vec<Station>>,
}

impl<S: DocumentStore> DocumentRepository<S> {
    /// Create a repository over `store`, with `seed` as the fallback
    /// set (and the seed data for an empty store).
    pub fn new(store: S, seed: Vec<Station>) -> Self {
        Self {
            store,
            fallback: RwLock::new(seed),
        }
    }

    /// Populate an empty store from the fallback set.
    ///
    /// Returns the number of stations written; 0 when the store already
    /// holds documents. Individual seed failures are logged and skipped.
    pub async fn seed_if_empty(&self) -> Result<usize, StoreError> {
        let existing = self.store.query_all().await?;
        if !existing.is_empty() {
            return Ok(0);
        }

        let seed = self.fallback.read().await.clone();
        let results = join_all(seed.iter().map(|s| self.store.create(s))).await;

        let mut count = 0;
        for (station, result) in seed.iter().zip(results) {
            match result {
                Ok(_) => count += 1,
                Err(StoreError::Conflict) => {}
                Err(e) => {
                    warn!(number = station.number, error = %e, "failed to seed station");
                }
            }
        }

        info!(count, "seeded document store from snapshot");
        Ok(count)
    }

    /// Full snapshot: the store's documents, or the fallback set.
    pub async fn list_all(&self) -> Vec<Station> {
        match self.store.query_all().await {
            Ok(stations) => stations,
            Err(e) => {
                warn!(error = %e, "document store unavailable, serving fallback snapshot");
                self.fallback.read().await.clone()
            }
        }
    }

    /// Look up one station by number.
    pub async fn get_by_number(&self, number: i32) -> Option<Station> {
        match self.store.get(&number.to_string()).await {
            Ok(found) => found,
            Err(e) => {
                warn!(number, error = %e, "document store unavailable, serving fallback snapshot");
                let guard = self.fallback.read().await;
                guard.iter().find(|s| s.number == number).cloned()
            }
        }
    }

    /// Insert a new station.
    pub async fn create(&self, station: Station) -> Result<Station, StationError> {
        match self.store.create(&station).await {
            Ok(created) => Ok(created),
            Err(StoreError::Conflict) => Err(StationError::Conflict(station.number)),
            Err(e) => {
                warn!(number = station.number, error = %e, "document store unavailable, creating in fallback set");
                let mut guard = self.fallback.write().await;
                if guard.iter().any(|s| s.number == station.number) {
                    return Err(StationError::Conflict(station.number));
                }
                guard.push(station.clone());
                Ok(station)
            }
        }
    }

    /// Replace an existing station, preserving its number.
    pub async fn update(&self, station: Station) -> Result<Station, StationError> {
        let fault = match self.store.get(&station.doc_id()).await {
            Ok(Some(_)) => match self.store.upsert(&station).await {
                Ok(updated) => return Ok(updated),
                Err(e) => e,
            },
            Ok(None) => return Err(StationError::NotFound(station.number)),
            Err(e) => e,
        };

        warn!(number = station.number, error = %fault, "document store unavailable, updating fallback set");
        let mut guard = self.fallback.write().await;
        let Some(existing) = guard.iter_mut().find(|s| s.number == station.number) else {
            return Err(StationError::NotFound(station.number));
        };
        *existing = station.clone();
        Ok(station)
    }

    /// Remove a station by number.
    pub async fn delete(&self, number: i32) -> bool {
        match self.store.delete(&number.to_string()).await {
            Ok(removed) => removed,
            Err(e) => {
                warn!(number, error = %e, "document store unavailable, deleting from fallback set");
                let mut guard = self.fallback.write().await;
                let before = guard.len();
                guard.retain(|s| s.number != number);
                guard.len() != before
            }
        }
    }

    /// Aggregate summary over whichever data set answers.
    pub async fn summary(&self) -> StationSummary {
        summarize(&self.list_all().await)
    }
}
