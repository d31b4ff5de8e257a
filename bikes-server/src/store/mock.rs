//! In-memory document store for testing without a remote collection.
//!
//! Mimics the real client's interface and can be toggled into a failing
//! state to exercise the repository's fallback path.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::RwLock;

use crate::domain::Station;

use super::DocumentStore;
use super::error::StoreError;

/// Document store backed by a map, with a failure toggle.
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    docs: Arc<RwLock<BTreeMap<i32, Station>>>,
    failing: Arc<AtomicBool>,
}

impl MockDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given stations.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        let docs = stations.into_iter().map(|s| (s.number, s)).collect();
        Self {
            docs: Arc::new(RwLock::new(docs)),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Toggle the failure state. While failing, every operation returns
    /// a 503-style fault.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn fail_if_down(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Api {
                status: 503,
                message: "mock store offline".to_string(),
            });
        }
        Ok(())
    }
}

impl DocumentStore for MockDocumentStore {
    async fn query_all(&self) -> Result<Vec<Station>, StoreError> {
        self.fail_if_down()?;
        let docs = self.docs.read().await;
        Ok(docs.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Station>, StoreError> {
        self.fail_if_down()?;
        let Ok(number) = id.parse::<i32>() else {
            return Ok(None);
        };
        let docs = self.docs.read().await;
        Ok(docs.get(&number).cloned())
    }

    async fn create(&self, station: &Station) -> Result<Station, StoreError> {
        self.fail_if_down()?;
        let mut docs = self.docs.write().await;
        if docs.contains_key(&station.number) {
            return Err(StoreError::Conflict);
        }
        docs.insert(station.number, station.clone());
        Ok(station.clone())
    }

    async fn upsert(&self, station: &Station) -> Result<Station, StoreError> {
        self.fail_if_down()?;
        let mut docs = self.docs.write().await;
        docs.insert(station.number, station.clone());
        Ok(station.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.fail_if_down()?;
        let Ok(number) = id.parse::<i32>() else {
            return Ok(false);
        };
        let mut docs = self.docs.write().await;
        Ok(docs.remove(&number).is_some())
    }
}
