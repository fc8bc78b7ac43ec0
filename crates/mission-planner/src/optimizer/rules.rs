use crate::catalog::{AircraftSpec, CivilianRiskLevel, PayloadClass, TargetSpec};
use serde::{Deserialize, Serialize};

/// Predicate over an (aircraft, target) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum RuleCondition {
    Always,
    AircraftIn(Vec<String>),
    TargetIn(Vec<String>),
    DifficultyAtMost(u8),
    DifficultyAtLeast(u8),
    DifficultyBetween { min: u8, max: u8 },
    CivilianRiskIn(Vec<CivilianRiskLevel>),
    Stealth,
    PayloadIn(Vec<PayloadClass>),
    PrecisionAtLeast(u8),
    All(Vec<RuleCondition>),
}

impl RuleCondition {
    pub fn matches(&self, aircraft: &AircraftSpec, target: &TargetSpec) -> bool {
        match self {
            RuleCondition::Always => true,
            RuleCondition::AircraftIn(ids) => ids.iter().any(|id| *id == aircraft.id),
            RuleCondition::TargetIn(ids) => ids.iter().any(|id| *id == target.id),
            RuleCondition::DifficultyAtMost(max) => target.difficulty <= *max,
            RuleCondition::DifficultyAtLeast(min) => target.difficulty >= *min,
            RuleCondition::DifficultyBetween { min, max } => {
                (*min..=*max).contains(&target.difficulty)
            }
            RuleCondition::CivilianRiskIn(levels) => levels.contains(&target.civilian_risk),
            RuleCondition::Stealth => aircraft.stealth,
            RuleCondition::PayloadIn(classes) => classes.contains(&aircraft.payload),
            RuleCondition::PrecisionAtLeast(min) => aircraft.precision >= *min,
            RuleCondition::All(conditions) => conditions
                .iter()
                .all(|condition| condition.matches(aircraft, target)),
        }
    }
}

/// Additive adjustment applied to an aircraft's rating score when its condition holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicRule {
    pub name: String,
    pub condition: RuleCondition,
    pub adjustment: f64,
}

impl HeuristicRule {
    pub fn new(name: &str, condition: RuleCondition, adjustment: f64) -> Self {
        Self {
            name: name.to_string(),
            condition,
            adjustment,
        }
    }

    /// Platform suitability rules, evaluated in this order.
    pub fn standard_set() -> Vec<HeuristicRule> {
        use RuleCondition::{
            AircraftIn, All, CivilianRiskIn, DifficultyAtLeast, DifficultyAtMost,
            DifficultyBetween, PayloadIn, PrecisionAtLeast, Stealth, TargetIn,
        };

        let named = |ids: &[&str]| AircraftIn(ids.iter().map(|id| id.to_string()).collect());

        vec![
            HeuristicRule::new(
                "b2_overkill_for_routine_targets",
                All(vec![
                    named(&["B-2"]),
                    TargetIn(vec!["wooden_house".to_string(), "warehouse".to_string()]),
                ]),
                -2.0,
            ),
            HeuristicRule::new(
                "b2_limited_availability",
                named(&["B-2"]),
                -0.5,
            ),
            HeuristicRule::new("ngad_experimental_platform", named(&["NGAD-X"]), -1.0),
            HeuristicRule::new(
                "a10_soft_targets",
                All(vec![named(&["A-10"]), DifficultyAtMost(3)]),
                1.0,
            ),
            HeuristicRule::new(
                "ac130_extended_loiter",
                All(vec![
                    named(&["AC-130"]),
                    CivilianRiskIn(vec![CivilianRiskLevel::Low]),
                ]),
                0.8,
            ),
            HeuristicRule::new(
                "multirole_workhorse",
                All(vec![
                    named(&["F-15E", "F-35A"]),
                    DifficultyBetween { min: 4, max: 6 },
                ]),
                0.5,
            ),
            HeuristicRule::new(
                "stealth_in_populated_areas",
                All(vec![
                    CivilianRiskIn(vec![CivilianRiskLevel::High, CivilianRiskLevel::VeryHigh]),
                    Stealth,
                ]),
                0.5,
            ),
            HeuristicRule::new(
                "heavy_payload_for_hard_targets",
                All(vec![
                    DifficultyAtLeast(7),
                    PayloadIn(vec![PayloadClass::Heavy, PayloadClass::VeryHeavy]),
                ]),
                0.3,
            ),
            HeuristicRule::new(
                "precision_for_hardened_targets",
                All(vec![DifficultyAtLeast(8), PrecisionAtLeast(95)]),
                0.2,
            ),
        ]
    }
}

/// Fold every matching rule's adjustment into `base`, in rule order.
pub fn adjusted_score(
    base: f64,
    aircraft: &AircraftSpec,
    target: &TargetSpec,
    rules: &[HeuristicRule],
) -> f64 {
    rules
        .iter()
        .filter(|rule| rule.condition.matches(aircraft, target))
        .fold(base, |score, rule| score + rule.adjustment)
}
