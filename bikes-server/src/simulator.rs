//! Availability simulator.
//!
//! Stands in for live telemetry: a periodic task that nudges each open
//! station's bike count by a small random delta and writes the result
//! back through the repository's public update path. Closed stations
//! are left alone. The task observes shutdown at tick boundaries only,
//! so a mutation is never abandoned halfway.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::domain::Station;
use crate::repo::StationRepository;

/// Configuration for the availability simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Time between ticks.
    pub interval: Duration,

    /// Largest per-tick change to a station's bike count, in either
    /// direction.
    pub max_delta: i32,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(15),
            max_delta: 3,
        }
    }
}

/// Apply one availability step to a station.
///
/// Bikes move by `delta`, clamped to `[0, bike_stands]`; free stands are
/// recomputed so the counts still sum to capacity; `last_update` is
/// stamped with `now_ms`.
pub fn perturb(station: &Station, delta: i32, now_ms: i64) -> Station {
    let capacity = station.bike_stands.max(0);
    let bikes = station.available_bikes.saturating_add(delta).clamp(0, capacity);

    Station {
        available_bikes: bikes,
        available_bike_stands: capacity - bikes,
        last_update: now_ms,
        ..station.clone()
    }
}

/// Periodic random walk over the open stations.
pub struct Simulator {
    config: SimulatorConfig,
    rng: StdRng,
}

impl Simulator {
    /// Create a simulator with a randomly seeded RNG.
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a simulator with a fixed RNG (for tests).
    pub fn with_rng(config: SimulatorConfig, rng: StdRng) -> Self {
        Self { config, rng }
    }

    /// Run one simulation pass over the current snapshot.
    ///
    /// A station that fails to update is logged and skipped; the rest
    /// of the pass continues.
    pub async fn tick(&mut self, repo: &StationRepository) {
        let stations = repo.list_all().await;
        let mut updated = 0usize;

        for station in stations {
            if !station.is_open() {
                continue;
            }

            let delta = self.rng.gen_range(-self.config.max_delta..=self.config.max_delta);
            let next = perturb(&station, delta, Utc::now().timestamp_millis());

            match repo.update(next).await {
                Ok(_) => updated += 1,
                Err(e) => {
                    warn!(number = station.number, error = %e, "simulator update failed");
                }
            }
        }

        debug!(updated, "applied availability tick");
    }

    /// Run until `shutdown` flips to `true` (or its sender is dropped).
    pub async fn run(mut self, repo: Arc<StationRepository>, mut shutdown: watch::Receiver<bool>) {
        info!(
            interval_secs = self.config.interval.as_secs(),
            "availability simulator started"
        );

        let mut interval = tokio::time::interval(self.config.interval);
        interval.tick().await; // First tick is immediate, skip it

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick(&repo).await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("availability simulator stopped");
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Position;
    use proptest::prelude::*;

    proptest! {
        /// The availability invariant holds after any step: counts
        /// stay within capacity and sum to it.
        #[test]
        fn perturb_preserves_invariant(
            bike_stands in 0i32..100,
            available_bikes in 0i32..100,
            delta in -50i32..50,
        ) {
            let before = Station {
                number: 1,
                name: "STATION 1".to_string(),
                address: "1 Main Street".to_string(),
                position: Position::default(),
                bike_stands,
                available_bike_stands: (bike_stands - available_bikes).max(0),
                available_bikes,
                status: "OPEN".to_string(),
                last_update: 0,
            };

            let after = perturb(&before, delta, 1);

            prop_assert!(after.available_bikes >= 0);
            prop_assert!(after.available_bike_stands >= 0);
            prop_assert!(after.available_bikes <= after.bike_stands.max(0));
            if after.bike_stands > 0 {
                prop_assert_eq!(
                    after.available_bikes + after.available_bike_stands,
                    after.bike_stands
                );
            }
        }
    }
}
