//! Aggregate statistics over the station catalog.

use serde::Serialize;

use super::Station;

/// Roll-up of the full station set.
///
/// Has no identity of its own: recomputed (or served from a TTL cache)
/// per request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSummary {
    pub total_stations: usize,
    pub total_bike_stands: i64,
    pub total_available_bikes: i64,
    pub open_stations: usize,
    pub closed_stations: usize,
}

/// Fold a station snapshot into a summary in a single pass.
///
/// OPEN/CLOSED are counted case-insensitively; a station with any other
/// status contributes to the totals but to neither count.
pub fn summarize(stations: &[Station]) -> StationSummary {
    let mut summary = StationSummary {
        total_stations: stations.len(),
        ..StationSummary::default()
    };

    for station in stations {
        summary.total_bike_stands += i64::from(station.bike_stands);
        summary.total_available_bikes += i64::from(station.available_bikes);
        if station.is_open() {
            summary.open_stations += 1;
        } else if station.status.trim().eq_ignore_ascii_case("CLOSED") {
            summary.closed_stations += 1;
        }
    }

    summary
}
