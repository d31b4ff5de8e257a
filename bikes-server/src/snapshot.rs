//! Startup snapshot loading.
//!
//! The catalog is seeded from a JSON file in the JCDecaux feed shape
//! (snake_case keys). The file is read once at startup; records are
//! lenient about missing counters and ignore fields the engine does not
//! use (contract name, banking, bonus).

use std::path::Path;

use serde::Deserialize;

use crate::domain::{Position, Station};

/// Errors from loading the snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Could not read the file.
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid station list.
    #[error("failed to parse snapshot: {message}")]
    Json { message: String },
}

#[derive(Debug, Default, Deserialize)]
struct PositionRecord {
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lng: f64,
}

/// One station record as it appears in the feed file.
#[derive(Debug, Deserialize)]
struct StationRecord {
    number: i32,
    #[serde(default)]
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    position: PositionRecord,
    #[serde(default)]
    bike_stands: i32,
    #[serde(default)]
    available_bike_stands: i32,
    #[serde(default)]
    available_bikes: i32,
    #[serde(default)]
    status: String,
    #[serde(default)]
    last_update: i64,
}

impl From<StationRecord> for Station {
    fn from(record: StationRecord) -> Self {
        Station {
            number: record.number,
            name: record.name,
            address: record.address,
            position: Position {
                lat: record.position.lat,
                lng: record.position.lng,
            },
            bike_stands: record.bike_stands,
            available_bike_stands: record.available_bike_stands,
            available_bikes: record.available_bikes,
            status: record.status,
            last_update: record.last_update,
        }
    }
}

/// Load the station snapshot from `path`, preserving file order.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Station>, SnapshotError> {
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<StationRecord> =
        serde_json::from_str(&contents).map_err(|e| SnapshotError::Json {
            message: e.to_string(),
        })?;

    Ok(records.into_iter().map(Station::from).collect())
}
