use super::{DatasetError, TrainingExample};
use crate::assessment::MissionInput;
use crate::catalog::{Catalog, CatalogError};
use serde::{Deserialize, Serialize};

pub const FEATURE_NAMES: [&str; 5] = [
    "aircraft_precision",
    "aircraft_stealth",
    "target_difficulty",
    "weather_modifier",
    "time_modifier",
];

/// Numeric encoding of a mission selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub aircraft_precision: f64,
    pub aircraft_stealth: f64,
    pub target_difficulty: f64,
    pub weather_modifier: f64,
    pub time_modifier: f64,
}

impl FeatureVector {
    pub fn extract(catalog: &Catalog, input: &MissionInput) -> Result<Self, CatalogError> {
        let aircraft = catalog.aircraft(&input.aircraft)?;
        let target = catalog.target(&input.target)?;
        let weather = catalog.weather(&input.weather)?;
        let time = catalog.time(&input.time)?;

        Ok(Self {
            aircraft_precision: f64::from(aircraft.precision),
            aircraft_stealth: if aircraft.stealth { 1.0 } else { 0.0 },
            target_difficulty: f64::from(target.difficulty),
            weather_modifier: weather.precision_modifier,
            time_modifier: time.civilian_modifier,
        })
    }

    /// Values in [`FEATURE_NAMES`] order.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.aircraft_precision,
            self.aircraft_stealth,
            self.target_difficulty,
            self.weather_modifier,
            self.time_modifier,
        ]
    }
}

/// Feature rows for a labeled dataset, in row order.
pub fn prepare_features(
    catalog: &Catalog,
    examples: &[TrainingExample],
) -> Result<Vec<FeatureVector>, DatasetError> {
    examples
        .iter()
        .map(|example| FeatureVector::extract(catalog, &example.input()).map_err(DatasetError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_catalog_attributes() {
        let features = FeatureVector::extract(
            Catalog::standard(),
            &MissionInput::new("F-35A", "military_base", "light_rain", "night"),
        )
        .expect("valid input");
        assert_eq!(features.as_array(), [95.0, 1.0, 6.0, 0.9, 0.4]);
    }

    #[test]
    fn unknown_rows_are_reported() {
        let example = TrainingExample {
            aircraft: "Spitfire".to_string(),
            target: "bridge".to_string(),
            weather: "clear".to_string(),
            time_of_day: "night".to_string(),
            destruction_probability: 50.0,
            civilian_risk: 5.0,
            mission_rating: crate::assessment::MissionRating::D,
        };
        let err = prepare_features(Catalog::standard(), &[example]).expect_err("unknown aircraft");
        assert!(matches!(err, DatasetError::Catalog(_)));
    }
}
