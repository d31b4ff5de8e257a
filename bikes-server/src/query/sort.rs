//! Station sorting.

use crate::domain::Station;

/// Sortable station attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    AvailableBikes,
    Occupancy,
}

impl SortKey {
    /// Parse a sort key from a query parameter. Unrecognized input
    /// falls back to `Name`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "availablebikes" => Self::AvailableBikes,
            "occupancy" => Self::Occupancy,
            _ => Self::Name,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    /// Parse a direction from a query parameter. Unrecognized input
    /// falls back to `Asc`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Stable in-place sort. Ties keep their snapshot order: descending
/// reverses the key comparison only, never the tie order.
pub fn sort_stations(stations: &mut [Station], key: SortKey, dir: SortDir) {
    stations.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::AvailableBikes => a.available_bikes.cmp(&b.available_bikes),
            SortKey::Occupancy => a.occupancy().total_cmp(&b.occupancy()),
        };
        match dir {
            SortDir::Asc => ord,
            SortDir::Desc => ord.reverse(),
        }
    });
}
