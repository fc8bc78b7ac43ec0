use super::features::FeatureVector;
use super::{DatasetError, TrainingExample};
use crate::assessment::{
    rate, round_tenth, MissionInput, MissionOutcome, CIVILIAN_RISK_CEILING, DESTRUCTION_CEILING,
};
use crate::catalog::{Catalog, CatalogError};
use crate::MissionPlanner;
use nalgebra::{SMatrix, SVector};
use serde::Serialize;

const FEATURES: usize = 5;
/// Feature columns plus the intercept.
const DESIGN: usize = FEATURES + 1;
/// Smallest singular value, relative to the largest, of a solvable system.
const RANK_TOLERANCE: f64 = 1e-10;

/// Anything that can stand in for the rule engine on a mission selection.
pub trait MissionPredictor {
    fn predict(&self, input: &MissionInput) -> Result<MissionOutcome, CatalogError>;
}

impl MissionPredictor for MissionPlanner<'_> {
    fn predict(&self, input: &MissionInput) -> Result<MissionOutcome, CatalogError> {
        self.assess(input)
    }
}

/// Ordinary least squares with an intercept term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearModel {
    pub intercept: f64,
    pub coefficients: [f64; FEATURES],
}

impl LinearModel {
    /// Fit via the normal equations `(X^T X) b = X^T y`, with the intercept as
    /// the first design column.
    pub fn fit(features: &[FeatureVector], targets: &[f64]) -> Result<Self, DatasetError> {
        if features.len() != targets.len() {
            return Err(DatasetError::LengthMismatch {
                features: features.len(),
                targets: targets.len(),
            });
        }
        if features.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut gram = SMatrix::<f64, DESIGN, DESIGN>::zeros();
        let mut moment = SVector::<f64, DESIGN>::zeros();
        for (row, target) in features.iter().zip(targets) {
            let design = design_row(row);
            gram += design * design.transpose();
            moment += design * *target;
        }

        // Rounding keeps an exactly rank-deficient system from producing a
        // zero pivot, so rank is judged on the singular value spread.
        let singular_values = gram.singular_values();
        if singular_values.min() <= singular_values.max() * RANK_TOLERANCE {
            return Err(DatasetError::Singular);
        }

        let solution = gram.lu().solve(&moment).ok_or(DatasetError::Singular)?;
        let mut coefficients = [0.0; FEATURES];
        for (slot, value) in coefficients.iter_mut().zip(solution.iter().skip(1)) {
            *slot = *value;
        }

        Ok(Self {
            intercept: solution[0],
            coefficients,
        })
    }

    pub fn predict(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.as_array())
            .fold(self.intercept, |acc, (weight, value)| acc + weight * value)
    }
}

fn design_row(features: &FeatureVector) -> SVector<f64, DESIGN> {
    let values = features.as_array();
    SVector::<f64, DESIGN>::from_fn(|index, _| if index == 0 { 1.0 } else { values[index - 1] })
}

/// Two linear regressions (one per percentage) whose clamped, rounded
/// predictions are passed through the rating ladder.
#[derive(Debug, Clone)]
pub struct LinearBaseline<'c> {
    catalog: &'c Catalog,
    pub destruction: LinearModel,
    pub civilian_risk: LinearModel,
}

impl<'c> LinearBaseline<'c> {
    pub fn fit(catalog: &'c Catalog, examples: &[TrainingExample]) -> Result<Self, DatasetError> {
        let features = super::prepare_features(catalog, examples)?;
        let destruction: Vec<f64> = examples
            .iter()
            .map(|example| example.destruction_probability)
            .collect();
        let civilian: Vec<f64> = examples.iter().map(|example| example.civilian_risk).collect();

        Ok(Self {
            catalog,
            destruction: LinearModel::fit(&features, &destruction)?,
            civilian_risk: LinearModel::fit(&features, &civilian)?,
        })
    }
}

impl MissionPredictor for LinearBaseline<'_> {
    fn predict(&self, input: &MissionInput) -> Result<MissionOutcome, CatalogError> {
        let features = FeatureVector::extract(self.catalog, input)?;
        let destruction_probability =
            round_tenth(self.destruction.predict(&features).clamp(0.0, DESTRUCTION_CEILING));
        let civilian_risk =
            round_tenth(self.civilian_risk.predict(&features).clamp(0.0, CIVILIAN_RISK_CEILING));

        Ok(MissionOutcome {
            destruction_probability,
            civilian_risk,
            rating: rate(destruction_probability, civilian_risk),
        })
    }
}

/// Agreement between a predictor and the rule engine over a scenario set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub samples: usize,
    pub destruction_mae: f64,
    pub civilian_risk_mae: f64,
    /// Fraction of scenarios whose predicted rating equals the rule rating.
    pub rating_accuracy: f64,
}

pub fn evaluate_predictor<P: MissionPredictor + ?Sized>(
    oracle: &MissionPlanner<'_>,
    predictor: &P,
    scenarios: &[MissionInput],
) -> Result<EvaluationReport, DatasetError> {
    if scenarios.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut destruction_error = 0.0;
    let mut civilian_error = 0.0;
    let mut matches = 0usize;

    for input in scenarios {
        let truth = oracle.assess(input)?;
        let predicted = predictor.predict(input)?;
        destruction_error += (truth.destruction_probability - predicted.destruction_probability).abs();
        civilian_error += (truth.civilian_risk - predicted.civilian_risk).abs();
        if truth.rating == predicted.rating {
            matches += 1;
        }
    }

    let samples = scenarios.len();
    let n = samples as f64;
    Ok(EvaluationReport {
        samples,
        destruction_mae: destruction_error / n,
        civilian_risk_mae: civilian_error / n,
        rating_accuracy: matches as f64 / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{all_scenarios, generate_complete, sample_scenarios, seeded_rng};

    fn standard_features() -> Vec<FeatureVector> {
        let planner = MissionPlanner::standard();
        all_scenarios(&planner)
            .iter()
            .map(|input| FeatureVector::extract(planner.catalog(), input).expect("valid"))
            .collect()
    }

    #[test]
    fn recovers_exact_linear_relationship() {
        let features = standard_features();
        let targets: Vec<f64> = features
            .iter()
            .map(|f| {
                1.5 + 0.2 * f.aircraft_precision - 4.0 * f.aircraft_stealth
                    + 0.7 * f.target_difficulty
                    + 10.0 * f.weather_modifier
                    - 3.0 * f.time_modifier
            })
            .collect();

        let model = LinearModel::fit(&features, &targets).expect("fits");
        let expected = [0.2, -4.0, 0.7, 10.0, -3.0];
        assert!((model.intercept - 1.5).abs() < 1e-6);
        for (actual, expected) in model.coefficients.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-6, "{actual} vs {expected}");
        }
    }

    #[test]
    fn constant_features_are_singular() {
        let row = FeatureVector {
            aircraft_precision: 90.0,
            aircraft_stealth: 1.0,
            target_difficulty: 4.0,
            weather_modifier: 1.0,
            time_modifier: 0.4,
        };
        let err = LinearModel::fit(&[row; 10], &[50.0; 10]).expect_err("singular");
        assert!(matches!(err, DatasetError::Singular));
    }

    #[test]
    fn fit_requires_rows() {
        assert!(matches!(LinearModel::fit(&[], &[]), Err(DatasetError::Empty)));
    }

    #[test]
    fn fit_reports_mismatched_lengths() {
        let features = standard_features();
        let err = LinearModel::fit(&features[..4], &[1.0, 2.0, 3.0]).expect_err("length mismatch");
        assert!(matches!(
            err,
            DatasetError::LengthMismatch {
                features: 4,
                targets: 3
            }
        ));
    }

    #[test]
    fn oracle_agrees_with_itself() {
        let planner = MissionPlanner::standard();
        let scenarios = sample_scenarios(&planner, 40, &mut seeded_rng(3));
        let report = evaluate_predictor(&planner, &planner, &scenarios).expect("evaluates");
        assert_eq!(report.samples, 40);
        assert_eq!(report.rating_accuracy, 1.0);
        assert_eq!(report.destruction_mae, 0.0);
        assert_eq!(report.civilian_risk_mae, 0.0);
    }

    #[test]
    fn baseline_predictions_stay_in_range() {
        let planner = MissionPlanner::standard();
        let examples = generate_complete(&planner).expect("labels");
        let baseline = LinearBaseline::fit(planner.catalog(), &examples).expect("fits");

        let scenarios = sample_scenarios(&planner, 60, &mut seeded_rng(11));
        for input in &scenarios {
            let outcome = baseline.predict(input).expect("valid input");
            assert!((0.0..=DESTRUCTION_CEILING).contains(&outcome.destruction_probability));
            assert!((0.0..=CIVILIAN_RISK_CEILING).contains(&outcome.civilian_risk));
        }

        let report = evaluate_predictor(&planner, &baseline, &scenarios).expect("evaluates");
        assert!((0.0..=1.0).contains(&report.rating_accuracy));
        assert!(report.destruction_mae.is_finite());
    }

    #[test]
    fn evaluation_requires_scenarios() {
        let planner = MissionPlanner::standard();
        assert!(matches!(
            evaluate_predictor(&planner, &planner, &[]),
            Err(DatasetError::Empty)
        ));
    }
}
