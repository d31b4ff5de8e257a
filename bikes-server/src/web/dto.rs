//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Position, Station};

/// Query parameters for the station list endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStationsQuery {
    /// Filter: exact status match (OPEN/CLOSED, case-insensitive).
    pub status: Option<String>,

    /// Filter: minimum available bikes.
    pub min_bikes: Option<i32>,

    /// Filter: substring of name or address.
    pub search: Option<String>,

    /// Sort key: name, availableBikes or occupancy.
    pub sort: Option<String>,

    /// Sort direction: asc or desc.
    pub dir: Option<String>,

    /// 1-based page number.
    pub page: Option<i64>,

    /// Items per page.
    pub page_size: Option<i64>,
}

/// Incoming station payload for create/update.
///
/// Every field defaults so a sparse payload reaches validation (and
/// gets a proper message list) instead of being rejected by the
/// deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInput {
    #[serde(default)]
    pub number: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub bike_stands: i32,
    #[serde(default)]
    pub available_bike_stands: i32,
    #[serde(default)]
    pub available_bikes: i32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub last_update: i64,
}

impl From<StationInput> for Station {
    fn from(input: StationInput) -> Self {
        Station {
            number: input.number,
            name: input.name,
            address: input.address,
            position: input.position,
            bike_stands: input.bike_stands,
            available_bike_stands: input.available_bike_stands,
            available_bikes: input.available_bikes,
            status: input.status,
            last_update: input.last_update,
        }
    }
}

/// A station in API responses, including the derived fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationView {
    pub number: i32,
    pub name: String,
    pub address: String,
    pub position: Position,
    pub bike_stands: i32,
    pub available_bike_stands: i32,
    pub available_bikes: i32,
    pub status: String,
    pub last_update: i64,
    pub last_update_local: String,
    pub occupancy: f64,
}

impl From<Station> for StationView {
    fn from(station: Station) -> Self {
        let last_update_local = station.last_update_local();
        let occupancy = station.occupancy();
        Self {
            number: station.number,
            name: station.name,
            address: station.address,
            position: station.position,
            bike_stands: station.bike_stands,
            available_bike_stands: station.available_bike_stands,
            available_bikes: station.available_bikes,
            status: station.status,
            last_update: station.last_update,
            last_update_local,
            occupancy,
        }
    }
}

/// Body for validation failures.
#[derive(Debug, Serialize)]
pub struct ValidationErrorBody {
    pub errors: Vec<String>,
}

/// Body for single-message errors.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}
