//! Synthetic training data drawn from the rule engine, plus the tooling to
//! analyse it and to check learned models against the rules.

mod analysis;
mod features;
mod model;

pub use analysis::{RatingCount, RatingDistribution, SEVERE_IMBALANCE_RATIO};
pub use features::{prepare_features, FeatureVector, FEATURE_NAMES};
pub use model::{
    evaluate_predictor, EvaluationReport, LinearBaseline, LinearModel, MissionPredictor,
};

use crate::assessment::{MissionInput, MissionRating};
use crate::catalog::CatalogError;
use crate::MissionPlanner;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("invalid dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataset row references unknown catalog entry: {0}")]
    Catalog(#[from] CatalogError),
    #[error("dataset is empty")]
    Empty,
    #[error("{features} feature rows but {targets} target values")]
    LengthMismatch { features: usize, targets: usize },
    #[error("regression system is singular; features do not vary enough to fit")]
    Singular,
}

/// One labeled row: the mission selection and the rule engine's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub aircraft: String,
    pub target: String,
    pub weather: String,
    pub time_of_day: String,
    pub destruction_probability: f64,
    pub civilian_risk: f64,
    pub mission_rating: MissionRating,
}

impl TrainingExample {
    pub fn input(&self) -> MissionInput {
        MissionInput::new(
            self.aircraft.clone(),
            self.target.clone(),
            self.weather.clone(),
            self.time_of_day.clone(),
        )
    }
}

/// Every (aircraft, target, weather, time) combination in catalog order.
pub fn all_scenarios(planner: &MissionPlanner<'_>) -> Vec<MissionInput> {
    let catalog = planner.catalog();
    let mut scenarios = Vec::with_capacity(catalog.scenario_count());
    for aircraft in catalog.all_aircraft() {
        for target in catalog.all_targets() {
            for weather in catalog.all_weather() {
                for time in catalog.all_times() {
                    scenarios.push(MissionInput::new(
                        aircraft.id.clone(),
                        target.id.clone(),
                        weather.id.clone(),
                        time.id.clone(),
                    ));
                }
            }
        }
    }
    scenarios
}

/// Deterministic generator so sampled datasets reproduce across runs and platforms.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Independently drawn scenarios; repeats are possible.
pub fn sample_scenarios<R: Rng + ?Sized>(
    planner: &MissionPlanner<'_>,
    count: usize,
    rng: &mut R,
) -> Vec<MissionInput> {
    let catalog = planner.catalog();
    let mut scenarios = Vec::with_capacity(count);
    for _ in 0..count {
        let picked = (
            catalog.all_aircraft().choose(rng),
            catalog.all_targets().choose(rng),
            catalog.all_weather().choose(rng),
            catalog.all_times().choose(rng),
        );
        if let (Some(aircraft), Some(target), Some(weather), Some(time)) = picked {
            scenarios.push(MissionInput::new(
                aircraft.id.clone(),
                target.id.clone(),
                weather.id.clone(),
                time.id.clone(),
            ));
        }
    }
    scenarios
}

/// Run the rule engine over each scenario to produce labeled rows.
pub fn label(
    planner: &MissionPlanner<'_>,
    scenarios: &[MissionInput],
) -> Result<Vec<TrainingExample>, CatalogError> {
    scenarios
        .iter()
        .map(|input| {
            let outcome = planner.assess(input)?;
            Ok(TrainingExample {
                aircraft: input.aircraft.clone(),
                target: input.target.clone(),
                weather: input.weather.clone(),
                time_of_day: input.time.clone(),
                destruction_probability: outcome.destruction_probability,
                civilian_risk: outcome.civilian_risk,
                mission_rating: outcome.rating,
            })
        })
        .collect()
}

/// Labeled rows for the full scenario space.
pub fn generate_complete(
    planner: &MissionPlanner<'_>,
) -> Result<Vec<TrainingExample>, CatalogError> {
    let examples = label(planner, &all_scenarios(planner))?;
    info!(rows = examples.len(), "generated complete training dataset");
    Ok(examples)
}

pub fn write_csv<W: Write>(writer: W, examples: &[TrainingExample]) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for example in examples {
        csv_writer.serialize(example)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TrainingExample>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut examples = Vec::new();
    for record in csv_reader.deserialize::<TrainingExample>() {
        examples.push(record?);
    }
    Ok(examples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_dataset_covers_every_combination() {
        let planner = MissionPlanner::standard();
        let examples = generate_complete(&planner).expect("labels");
        assert_eq!(examples.len(), 1890);
        assert_eq!(examples[0].aircraft, "B-2");
        assert_eq!(examples[0].time_of_day, "early_morning");
        assert_eq!(examples[examples.len() - 1].aircraft, "NGAD-X");
    }

    #[test]
    fn sampling_is_reproducible_per_seed() {
        let planner = MissionPlanner::standard();
        let first = sample_scenarios(&planner, 25, &mut seeded_rng(7));
        let second = sample_scenarios(&planner, 25, &mut seeded_rng(7));
        assert_eq!(first.len(), 25);
        assert_eq!(first, second);
    }

    #[test]
    fn csv_uses_expected_columns() {
        let planner = MissionPlanner::standard();
        let rows = label(
            &planner,
            &[MissionInput::new("B-2", "wooden_house", "clear", "early_morning")],
        )
        .expect("labels");

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &rows).expect("writes");
        let text = String::from_utf8(buffer).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("aircraft,target,weather,time_of_day,destruction_probability,civilian_risk,mission_rating")
        );
        assert_eq!(
            lines.next(),
            Some("B-2,wooden_house,clear,early_morning,90.2,10.5,A-RANK")
        );

        let parsed = read_csv(text.as_bytes()).expect("reads");
        assert_eq!(parsed, rows);
    }

    #[test]
    fn read_rejects_unknown_rating_labels() {
        let text = "aircraft,target,weather,time_of_day,destruction_probability,civilian_risk,mission_rating\n\
                    B-2,bridge,clear,night,80.0,4.2,Z-RANK\n";
        assert!(matches!(read_csv(text.as_bytes()), Err(DatasetError::Csv(_))));
    }
}
