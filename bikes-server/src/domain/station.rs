//! Station domain type.

use chrono::DateTime;
use chrono_tz::Europe::Dublin;
use serde::{Deserialize, Serialize};

/// Geographic position of a station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// A bike docking station with capacity and live availability counts.
///
/// `number` is the unique identity of a station and never changes once
/// assigned; the storage key is its decimal rendering (see [`doc_id`]).
///
/// Whenever `bike_stands > 0`, a well-formed station satisfies
/// `available_bikes + available_bike_stands == bike_stands`, with both
/// counts in `[0, bike_stands]`. [`crate::validate`] enforces this before
/// any write is accepted; [`crate::simulator::perturb`] preserves it.
///
/// [`doc_id`]: Station::doc_id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Unique station number, positive.
    pub number: i32,

    /// Display name, e.g. "SMITHFIELD NORTH".
    pub name: String,

    /// Street address.
    pub address: String,

    /// Geographic position.
    #[serde(default)]
    pub position: Position,

    /// Total docking capacity.
    pub bike_stands: i32,

    /// Free docks.
    pub available_bike_stands: i32,

    /// Bikes currently docked.
    pub available_bikes: i32,

    /// "OPEN" or "CLOSED", compared case-insensitively.
    pub status: String,

    /// Last update timestamp, epoch milliseconds UTC.
    #[serde(default)]
    pub last_update: i64,
}

impl Station {
    /// Storage key for document stores. Maps 1:1 to `number`.
    pub fn doc_id(&self) -> String {
        self.number.to_string()
    }

    /// Whether the station is currently open.
    pub fn is_open(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("OPEN")
    }

    /// Fraction of the station's docks holding a bike, in `[0, 1]`.
    /// Zero-capacity stations report 0.
    pub fn occupancy(&self) -> f64 {
        if self.bike_stands > 0 {
            f64::from(self.available_bikes) / f64::from(self.bike_stands)
        } else {
            0.0
        }
    }

    /// `last_update` rendered in the Dublin time zone as
    /// `YYYY-MM-DD HH:MM:SS`.
    pub fn last_update_local(&self) -> String {
        let utc = DateTime::from_timestamp_millis(self.last_update).unwrap_or(DateTime::UNIX_EPOCH);
        utc.with_timezone(&Dublin)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn station(bike_stands: i32, available_bikes: i32) -> Station {
        Station {
            number: 42,
            name: "SMITHFIELD NORTH".to_string(),
            address: "Smithfield North".to_string(),
            position: Position {
                lat: 53.349562,
                lng: -6.278198,
            },
            bike_stands,
            available_bike_stands: bike_stands - available_bikes,
            available_bikes,
            status: "OPEN".to_string(),
            last_update: 0,
        }
    }

    #[test]
    fn occupancy_is_bikes_over_stands() {
        assert_eq!(station(30, 15).occupancy(), 0.5);
        assert_eq!(station(20, 20).occupancy(), 1.0);
        assert_eq!(station(20, 0).occupancy(), 0.0);
    }

    #[test]
    fn occupancy_zero_capacity() {
        assert_eq!(station(0, 0).occupancy(), 0.0);
    }

    #[test]
    fn doc_id_is_decimal_number() {
        assert_eq!(station(30, 15).doc_id(), "42");
    }

    #[test]
    fn is_open_case_insensitive() {
        let mut s = station(30, 15);
        assert!(s.is_open());
        s.status = "open".to_string();
        assert!(s.is_open());
        s.status = " Open ".to_string();
        assert!(s.is_open());
        s.status = "CLOSED".to_string();
        assert!(!s.is_open());
    }

    #[test]
    fn last_update_local_winter_matches_utc() {
        let mut s = station(30, 15);
        s.last_update = Utc
            .with_ymd_and_hms(2021, 1, 15, 12, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(s.last_update_local(), "2021-01-15 12:00:00");
    }

    #[test]
    fn last_update_local_summer_is_offset() {
        let mut s = station(30, 15);
        s.last_update = Utc
            .with_ymd_and_hms(2021, 7, 1, 12, 0, 0)
            .unwrap()
            .timestamp_millis();
        // Irish Standard Time, UTC+1
        assert_eq!(s.last_update_local(), "2021-07-01 13:00:00");
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(station(30, 15)).unwrap();
        assert_eq!(json["number"], 42);
        assert_eq!(json["bikeStands"], 30);
        assert_eq!(json["availableBikeStands"], 15);
        assert_eq!(json["availableBikes"], 15);
        assert_eq!(json["position"]["lat"], 53.349562);
    }

    #[test]
    fn deserializes_with_defaults() {
        let s: Station = serde_json::from_str(
            r#"{"number":1,"name":"A","address":"B","bikeStands":10,
                "availableBikeStands":4,"availableBikes":6,"status":"OPEN"}"#,
        )
        .unwrap();
        assert_eq!(s.last_update, 0);
        assert_eq!(s.position, Position::default());
    }
}
