mod rules;

pub use rules::{adjusted_score, HeuristicRule, RuleCondition};

use crate::advisory::comparison_context;
use crate::assessment::{score, MissionOutcome, MissionRating};
use crate::catalog::{Catalog, CatalogError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome for one aircraft under fixed mission conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftResult {
    pub aircraft: String,
    pub outcome: MissionOutcome,
}

/// Recommended aircraft plus every aircraft's outcome, in catalog order.
///
/// The rating is the winner's unadjusted rating; heuristic adjustments only
/// drive the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best_aircraft: String,
    pub best_rating: MissionRating,
    pub results: Vec<AircraftResult>,
}

impl OptimizationResult {
    pub fn get(&self, aircraft: &str) -> Option<&MissionOutcome> {
        self.results
            .iter()
            .find(|result| result.aircraft == aircraft)
            .map(|result| &result.outcome)
    }

    pub fn best_outcome(&self) -> Option<&MissionOutcome> {
        self.get(&self.best_aircraft)
    }
}

/// One row of an aircraft comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AircraftComparison {
    pub aircraft: String,
    pub outcome: MissionOutcome,
    pub context: &'static str,
}

/// Score every aircraft against fixed conditions and pick the best fit.
///
/// The first aircraft to reach the running maximum adjusted score keeps it;
/// later aircraft must beat it strictly.
pub fn optimize(
    catalog: &Catalog,
    rules: &[HeuristicRule],
    target_id: &str,
    weather_id: &str,
    time_id: &str,
) -> Result<OptimizationResult, CatalogError> {
    let target = catalog.target(target_id)?;
    let weather = catalog.weather(weather_id)?;
    let time = catalog.time(time_id)?;
    let risk_table = catalog.civilian_risk_table();

    let mut results = Vec::with_capacity(catalog.all_aircraft().len());
    let mut best: Option<(f64, &str, MissionRating)> = None;

    for aircraft in catalog.all_aircraft() {
        let outcome = MissionOutcome::from(score(aircraft, target, weather, time, risk_table));
        let base = f64::from(outcome.rating.score());
        let adjusted = adjusted_score(base, aircraft, target, rules);

        debug!(
            aircraft = %aircraft.id,
            rating = %outcome.rating,
            base,
            adjusted,
            "scored aircraft for selection"
        );

        let improves = match best {
            Some((best_score, _, _)) => adjusted > best_score,
            None => true,
        };
        if improves {
            best = Some((adjusted, aircraft.id.as_str(), outcome.rating));
        }

        results.push(AircraftResult {
            aircraft: aircraft.id.clone(),
            outcome,
        });
    }

    let (_, best_aircraft, best_rating) = best.ok_or(CatalogError::NoAircraft)?;

    Ok(OptimizationResult {
        best_aircraft: best_aircraft.to_string(),
        best_rating,
        results,
    })
}

/// Every aircraft's outcome with a short contextual note for comparison tables.
pub fn compare(
    catalog: &Catalog,
    target_id: &str,
    weather_id: &str,
    time_id: &str,
) -> Result<Vec<AircraftComparison>, CatalogError> {
    let target = catalog.target(target_id)?;
    let weather = catalog.weather(weather_id)?;
    let time = catalog.time(time_id)?;
    let risk_table = catalog.civilian_risk_table();

    Ok(catalog
        .all_aircraft()
        .iter()
        .map(|aircraft| {
            let outcome = MissionOutcome::from(score(aircraft, target, weather, time, risk_table));
            AircraftComparison {
                aircraft: aircraft.id.clone(),
                outcome,
                context: comparison_context(aircraft, target, outcome.rating),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        AircraftSpec, CivilianRiskLevel, CivilianRiskTable, PayloadClass, TargetSpec, TimeSpec,
        WeatherSpec,
    };

    fn run(target: &str, weather: &str, time: &str) -> OptimizationResult {
        optimize(
            Catalog::standard(),
            &HeuristicRule::standard_set(),
            target,
            weather,
            time,
        )
        .expect("valid conditions")
    }

    #[test]
    fn tie_goes_to_first_aircraft_in_catalog_order() {
        // F-22 and F-35A both reach 5.5; F-22 is listed first.
        let result = run("wooden_house", "clear", "early_morning");
        assert_eq!(result.best_aircraft, "F-22");
        assert_eq!(result.best_rating, MissionRating::A);
        assert_eq!(result.results.len(), 9);
    }

    #[test]
    fn ac130_wins_hardened_low_risk_target() {
        let result = run("concrete_bunker", "clear", "early_morning");
        assert_eq!(result.best_aircraft, "AC-130");
        assert_eq!(result.best_rating, MissionRating::F);
    }

    #[test]
    fn reports_unadjusted_rating_of_winner() {
        let result = run("warehouse", "clear", "night");
        assert_eq!(result.best_aircraft, "Su-57");
        let outcome = result.best_outcome().expect("winner present");
        assert_eq!(outcome.rating, result.best_rating);
        assert_eq!(result.best_rating, MissionRating::C);
    }

    #[test]
    fn results_follow_catalog_order() {
        let result = run("bridge", "fog", "morning");
        let order: Vec<&str> = result
            .results
            .iter()
            .map(|entry| entry.aircraft.as_str())
            .collect();
        assert_eq!(order, Catalog::standard().ids(crate::catalog::EntryKind::Aircraft));
    }

    #[test]
    fn unknown_conditions_fail_lookup() {
        let err = optimize(
            Catalog::standard(),
            &HeuristicRule::standard_set(),
            "moon_base",
            "clear",
            "night",
        )
        .expect_err("unknown target");
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn winner_is_chosen_even_when_all_scores_are_negative() {
        let catalog = Catalog::new(
            vec![AircraftSpec {
                id: "glider".to_string(),
                precision: 10,
                payload: PayloadClass::Light,
                stealth: false,
            }],
            vec![TargetSpec {
                id: "fortress".to_string(),
                difficulty: 10,
                civilian_risk: CivilianRiskLevel::VeryHigh,
            }],
            vec![WeatherSpec {
                id: "storm".to_string(),
                precision_modifier: 0.5,
            }],
            vec![TimeSpec {
                id: "noon".to_string(),
                civilian_modifier: 1.0,
                description: String::new(),
            }],
            CivilianRiskTable::default(),
        )
        .expect("valid catalog");
        let rules = vec![HeuristicRule::new("penalty", RuleCondition::Always, -5.0)];

        let result = optimize(&catalog, &rules, "fortress", "storm", "noon").expect("optimizes");
        assert_eq!(result.best_aircraft, "glider");
        assert_eq!(result.best_rating, MissionRating::F);
    }

    #[test]
    fn compare_annotates_every_aircraft() {
        let rows = compare(Catalog::standard(), "warehouse", "clear", "night").expect("valid");
        assert_eq!(rows.len(), 9);
        let b2 = rows.iter().find(|row| row.aircraft == "B-2").expect("B-2 row");
        assert_eq!(b2.context, "Stealth advantage");
        let a10 = rows.iter().find(|row| row.aircraft == "A-10").expect("A-10 row");
        assert_eq!(a10.context, "Good for soft targets");
    }
}
