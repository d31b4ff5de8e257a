//! TTL cache for the station summary.
//!
//! The summary is cheap to compute but requested on every dashboard
//! refresh, so it is held for a fixed TTL and invalidated eagerly by
//! every mutating repository call. A miss recomputes synchronously;
//! an invalidated value is never served.

use std::future::Future;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::StationSummary;

/// Configuration for the summary cache.
#[derive(Debug, Clone)]
pub struct SummaryCacheConfig {
    /// TTL for the cached summary.
    pub ttl: Duration,
}

impl Default for SummaryCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// Single-entry get-or-compute cache for [`StationSummary`].
pub struct SummaryCache {
    inner: MokaCache<(), StationSummary>,
}

impl SummaryCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &SummaryCacheConfig) -> Self {
        let inner = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { inner }
    }

    /// Return the cached summary, computing it with `init` on a miss.
    pub async fn get_or_compute(&self, init: impl Future<Output = StationSummary>) -> StationSummary {
        self.inner.get_with((), init).await
    }

    /// Drop the cached summary. The next read recomputes.
    pub async fn invalidate(&self) {
        self.inner.invalidate(&()).await;
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new(&SummaryCacheConfig::default())
    }
}
