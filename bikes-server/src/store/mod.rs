//! Remote document store access.
//!
//! The secondary repository backend persists stations as JSON documents
//! in a remote collection, keyed by the station's document id. The
//! [`DocumentStore`] trait is the seam between the repository and the
//! wire: the real HTTP client and the in-memory mock both implement it,
//! so fallback behavior is testable without a network.

mod client;
mod error;
mod mock;

pub use client::{DocumentStoreClient, DocumentStoreConfig};
pub use error::StoreError;
pub use mock::MockDocumentStore;

use std::future::Future;

use crate::domain::Station;

/// Capability contract for a remote document collection.
///
/// `Conflict` (duplicate id on create) is a structured outcome, not a
/// fault; everything else signals the store is unreachable or broken and
/// the repository falls back to its local snapshot.
pub trait DocumentStore: Send + Sync {
    /// Fetch every document in the collection.
    fn query_all(&self) -> impl Future<Output = Result<Vec<Station>, StoreError>> + Send;

    /// Point-lookup by document id. `Ok(None)` when the id is absent.
    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Station>, StoreError>> + Send;

    /// Insert a new document. Fails with [`StoreError::Conflict`] when
    /// the id already exists.
    fn create(&self, station: &Station) -> impl Future<Output = Result<Station, StoreError>> + Send;

    /// Insert or replace the document with the station's id.
    fn upsert(&self, station: &Station) -> impl Future<Output = Result<Station, StoreError>> + Send;

    /// Delete by document id; `Ok(false)` when the id was absent.
    fn delete(&self, id: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
