//! Station filtering criteria.

use crate::domain::Station;

/// Filter criteria, AND-combined. Empty criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct StationFilter {
    /// Exact status match, trimmed and case-insensitive.
    pub status: Option<String>,

    /// Keep stations with at least this many available bikes.
    pub min_bikes: Option<i32>,

    /// Substring match against name or address, case-insensitive.
    pub search: Option<String>,
}

impl StationFilter {
    /// Whether a station satisfies every present criterion.
    pub fn matches(&self, station: &Station) -> bool {
        if let Some(status) = &self.status {
            let wanted = status.trim();
            if !wanted.is_empty() && !station.status.trim().eq_ignore_ascii_case(wanted) {
                return false;
            }
        }

        if let Some(min) = self.min_bikes
            && station.available_bikes < min
        {
            return false;
        }

        if let Some(search) = &self.search {
            let term = search.trim().to_lowercase();
            if !term.is_empty()
                && !station.name.to_lowercase().contains(&term)
                && !station.address.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        true
    }

    /// Keep the matching stations, preserving order.
    pub fn apply(&self, stations: Vec<Station>) -> Vec<Station> {
        stations.into_iter().filter(|s| self.matches(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn station(number: i32, name: &str, address: &str, bikes: i32, status: &str) -> Station {
        Station {
            number,
            name: name.to_string(),
            address: address.to_string(),
            position: Position::default(),
            bike_stands: 30,
            available_bike_stands: 30 - bikes,
            available_bikes: bikes,
            status: status.to_string(),
            last_update: 0,
        }
    }

    fn fixture() -> Vec<Station> {
        vec![
            station(1, "SMITHFIELD NORTH", "Smithfield North", 12, "OPEN"),
            station(2, "PARNELL STREET", "Parnell Street", 3, "OPEN"),
            station(3, "CUSTOM HOUSE QUAY", "Custom House Quay", 8, "CLOSED"),
        ]
    }

    #[test]
    fn status_filter_is_trimmed_and_case_insensitive() {
        let filter = StationFilter {
            status: Some("  open ".to_string()),
            ..StationFilter::default()
        };

        let result = filter.apply(fixture());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.status.eq_ignore_ascii_case("OPEN")));
    }

    #[test]
    fn status_filter_is_idempotent() {
        let filter = StationFilter {
            status: Some("OPEN".to_string()),
            ..StationFilter::default()
        };

        let once = filter.apply(fixture());
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn min_bikes_keeps_at_least() {
        let filter = StationFilter {
            min_bikes: Some(8),
            ..StationFilter::default()
        };

        let result = filter.apply(fixture());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.available_bikes >= 8));
    }

    #[test]
    fn search_matches_name_or_address() {
        let by_name = StationFilter {
            search: Some("smithfield".to_string()),
            ..StationFilter::default()
        };
        assert_eq!(by_name.apply(fixture()).len(), 1);

        let by_address = StationFilter {
            search: Some("quay".to_string()),
            ..StationFilter::default()
        };
        assert_eq!(by_address.apply(fixture())[0].number, 3);

        let no_match = StationFilter {
            search: Some("grand canal".to_string()),
            ..StationFilter::default()
        };
        assert!(no_match.apply(fixture()).is_empty());
    }

    #[test]
    fn criteria_combine_with_and() {
        let filter = StationFilter {
            status: Some("OPEN".to_string()),
            min_bikes: Some(5),
            search: Some("street".to_string()),
        };

        // PARNELL STREET is OPEN and matches "street" but has only 3 bikes.
        assert!(filter.apply(fixture()).is_empty());
    }

    #[test]
    fn blank_criteria_match_everything() {
        let filter = StationFilter {
            status: Some("   ".to_string()),
            min_bikes: None,
            search: Some("".to_string()),
        };

        assert_eq!(filter.apply(fixture()).len(), 3);
    }
}
