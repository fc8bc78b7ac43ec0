use crate::advisory::{aircraft_notes, improvement_recommendations};
use crate::assessment::{rate, score, MissionInput, MissionOutcome, MissionRating, MissionScore};
use crate::catalog::{Catalog, CatalogError};
use crate::optimizer::{self, AircraftComparison, HeuristicRule, OptimizationResult};

/// Stateless entry point binding the scorer, rater, and optimizer to one catalog.
#[derive(Debug, Clone)]
pub struct MissionPlanner<'c> {
    catalog: &'c Catalog,
    rules: Vec<HeuristicRule>,
}

impl MissionPlanner<'static> {
    /// Planner over the built-in catalog and heuristic rules.
    pub fn standard() -> Self {
        Self::new(Catalog::standard())
    }
}

impl<'c> MissionPlanner<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_rules(catalog, HeuristicRule::standard_set())
    }

    pub fn with_rules(catalog: &'c Catalog, rules: Vec<HeuristicRule>) -> Self {
        Self { catalog, rules }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn score(
        &self,
        aircraft: &str,
        target: &str,
        weather: &str,
        time: &str,
    ) -> Result<MissionScore, CatalogError> {
        Ok(score(
            self.catalog.aircraft(aircraft)?,
            self.catalog.target(target)?,
            self.catalog.weather(weather)?,
            self.catalog.time(time)?,
            self.catalog.civilian_risk_table(),
        ))
    }

    pub fn rate(&self, destruction_probability: f64, civilian_risk: f64) -> MissionRating {
        rate(destruction_probability, civilian_risk)
    }

    pub fn assess(&self, input: &MissionInput) -> Result<MissionOutcome, CatalogError> {
        self.score(&input.aircraft, &input.target, &input.weather, &input.time)
            .map(MissionOutcome::from)
    }

    pub fn optimize(
        &self,
        target: &str,
        weather: &str,
        time: &str,
    ) -> Result<OptimizationResult, CatalogError> {
        optimizer::optimize(self.catalog, &self.rules, target, weather, time)
    }

    pub fn compare(
        &self,
        target: &str,
        weather: &str,
        time: &str,
    ) -> Result<Vec<AircraftComparison>, CatalogError> {
        optimizer::compare(self.catalog, target, weather, time)
    }

    /// Advisory note for an aircraft id; unknown ids get a rating-only fallback.
    pub fn notes(&self, aircraft: &str, rating: MissionRating) -> &'static str {
        match self.catalog.aircraft(aircraft) {
            Ok(spec) => aircraft_notes(spec, rating),
            Err(_) => match rating {
                MissionRating::S | MissionRating::A => "Excellent choice",
                MissionRating::B => "Good option",
                MissionRating::C => "Consider alternatives",
                MissionRating::D | MissionRating::F => "Not recommended",
            },
        }
    }

    pub fn recommendations(
        &self,
        input: &MissionInput,
        outcome: &MissionOutcome,
    ) -> Result<Vec<&'static str>, CatalogError> {
        Ok(improvement_recommendations(
            self.catalog.aircraft(&input.aircraft)?,
            self.catalog.target(&input.target)?,
            &input.weather,
            outcome,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assess_matches_reference_scenarios() {
        let planner = MissionPlanner::standard();

        let outcome = planner
            .assess(&MissionInput::new("B-2", "wooden_house", "clear", "early_morning"))
            .expect("valid mission");
        assert_eq!(outcome.destruction_probability, 90.2);
        assert_eq!(outcome.civilian_risk, 10.5);
        assert_eq!(outcome.rating, MissionRating::A);

        let outcome = planner
            .assess(&MissionInput::new("Eurofighter", "nuclear_facility", "storm", "afternoon"))
            .expect("valid mission");
        assert_eq!(outcome.rating, MissionRating::F);

        let outcome = planner
            .assess(&MissionInput::new("F-35A", "military_base", "light_rain", "night"))
            .expect("valid mission");
        assert_eq!(outcome.rating, MissionRating::D);
    }

    #[test]
    fn score_rejects_unknown_aircraft() {
        let planner = MissionPlanner::standard();
        let err = planner
            .score("Spitfire", "bridge", "clear", "night")
            .expect_err("unknown aircraft");
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn notes_fall_back_for_unknown_aircraft() {
        let planner = MissionPlanner::standard();
        assert_eq!(planner.notes("F-22", MissionRating::A), "Excellent/stealth");
        assert_eq!(planner.notes("Spitfire", MissionRating::F), "Not recommended");
    }

    #[test]
    fn empty_rule_set_selects_on_rating_alone() {
        let planner = MissionPlanner::with_rules(Catalog::standard(), Vec::new());
        let result = planner
            .optimize("wooden_house", "clear", "early_morning")
            .expect("valid conditions");
        // B-2 is first in catalog order with an A rating.
        assert_eq!(result.best_aircraft, "B-2");
    }
}
