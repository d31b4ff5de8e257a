//! Structural and cross-field station validation.
//!
//! Every check runs; failures collect into an ordered message list that
//! blocks the write. Nothing is partially applied.

use crate::domain::{Station, StationError};

/// Validate a station, returning every failed check in order.
pub fn validate(station: &Station) -> Vec<String> {
    let mut errors = Vec::new();

    if station.number <= 0 {
        errors.push("Number must be a positive integer.".to_string());
    }

    if station.name.trim().is_empty() {
        errors.push("Name is required.".to_string());
    }

    if station.address.trim().is_empty() {
        errors.push("Address is required.".to_string());
    }

    if station.bike_stands < 0 {
        errors.push("BikeStands cannot be negative.".to_string());
    }

    if station.available_bikes < 0 {
        errors.push("AvailableBikes cannot be negative.".to_string());
    }

    if station.available_bike_stands < 0 {
        errors.push("AvailableBikeStands cannot be negative.".to_string());
    }

    if station.bike_stands > 0 {
        if station.available_bikes > station.bike_stands {
            errors.push("AvailableBikes cannot exceed BikeStands.".to_string());
        }

        if station.available_bike_stands > station.bike_stands {
            errors.push("AvailableBikeStands cannot exceed BikeStands.".to_string());
        }

        if station.available_bikes + station.available_bike_stands != station.bike_stands {
            errors.push("AvailableBikes + AvailableBikeStands must equal BikeStands.".to_string());
        }
    }

    let status = station.status.trim();
    if status.is_empty() {
        errors.push("Status is required.".to_string());
    } else if !status.eq_ignore_ascii_case("OPEN") && !status.eq_ignore_ascii_case("CLOSED") {
        errors.push("Status must be 'OPEN' or 'CLOSED'.".to_string());
    }

    errors
}

/// Validate, wrapping failures into [`StationError::Validation`].
pub fn check(station: &Station) -> Result<(), StationError> {
    let errors = validate(station);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(StationError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn valid_station() -> Station {
        Station {
            number: 42,
            name: "SMITHFIELD NORTH".to_string(),
            address: "Smithfield North".to_string(),
            position: Position::default(),
            bike_stands: 30,
            available_bike_stands: 15,
            available_bikes: 15,
            status: "OPEN".to_string(),
            last_update: 0,
        }
    }

    #[test]
    fn valid_station_passes() {
        assert!(validate(&valid_station()).is_empty());
        assert!(check(&valid_station()).is_ok());
    }

    #[test]
    fn zero_number_mentions_positive_integer() {
        let mut station = valid_station();
        station.number = 0;

        let errors = validate(&station);
        assert_eq!(errors, vec!["Number must be a positive integer."]);
    }

    #[test]
    fn blank_name_and_address_are_rejected() {
        let mut station = valid_station();
        station.name = "   ".to_string();
        station.address = String::new();

        let errors = validate(&station);
        assert_eq!(errors, vec!["Name is required.", "Address is required."]);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let mut station = valid_station();
        station.bike_stands = -1;
        station.available_bikes = -2;
        station.available_bike_stands = -3;

        let errors = validate(&station);
        assert_eq!(
            errors,
            vec![
                "BikeStands cannot be negative.",
                "AvailableBikes cannot be negative.",
                "AvailableBikeStands cannot be negative.",
            ]
        );
    }

    #[test]
    fn sum_mismatch_is_rejected() {
        let mut station = valid_station();
        station.bike_stands = 10;
        station.available_bikes = 6;
        station.available_bike_stands = 6;

        let errors = validate(&station);
        assert_eq!(
            errors,
            vec!["AvailableBikes + AvailableBikeStands must equal BikeStands."]
        );
    }

    #[test]
    fn counts_cannot_exceed_capacity() {
        let mut station = valid_station();
        station.bike_stands = 10;
        station.available_bikes = 12;
        station.available_bike_stands = 11;

        let errors = validate(&station);
        assert!(errors.contains(&"AvailableBikes cannot exceed BikeStands.".to_string()));
        assert!(errors.contains(&"AvailableBikeStands cannot exceed BikeStands.".to_string()));
    }

    #[test]
    fn zero_capacity_skips_cross_field_checks() {
        let mut station = valid_station();
        station.bike_stands = 0;
        station.available_bikes = 0;
        station.available_bike_stands = 0;

        assert!(validate(&station).is_empty());
    }

    #[test]
    fn status_must_be_open_or_closed() {
        let mut station = valid_station();
        station.status = "closed".to_string();
        assert!(validate(&station).is_empty());

        station.status = "BROKEN".to_string();
        assert_eq!(
            validate(&station),
            vec!["Status must be 'OPEN' or 'CLOSED'."]
        );

        station.status = "  ".to_string();
        assert_eq!(validate(&station), vec!["Status is required."]);
    }

    #[test]
    fn all_failures_collect_in_order() {
        let station = Station {
            number: 0,
            name: String::new(),
            address: String::new(),
            position: Position::default(),
            bike_stands: 10,
            available_bikes: 6,
            available_bike_stands: 6,
            status: String::new(),
            last_update: 0,
        };

        let errors = validate(&station);
        assert_eq!(
            errors,
            vec![
                "Number must be a positive integer.",
                "Name is required.",
                "Address is required.",
                "AvailableBikes + AvailableBikeStands must equal BikeStands.",
                "Status is required.",
            ]
        );

        assert_eq!(check(&station), Err(StationError::Validation(errors)));
    }
}
