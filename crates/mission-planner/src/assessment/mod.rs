mod rating;
mod scoring;

pub use rating::{rate, MissionRating};
pub use scoring::{
    difficulty_modifier, score, stealth_modifier, MissionScore, CIVILIAN_RISK_CEILING,
    DESTRUCTION_CEILING, DIFFICULTY_FLOOR,
};

pub(crate) use scoring::round_tenth;

use serde::{Deserialize, Serialize};

/// Catalog identifiers for one mission: aircraft, target, weather, and time of day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionInput {
    pub aircraft: String,
    pub target: String,
    pub weather: String,
    pub time: String,
}

impl MissionInput {
    pub fn new(
        aircraft: impl Into<String>,
        target: impl Into<String>,
        weather: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            aircraft: aircraft.into(),
            target: target.into(),
            weather: weather.into(),
            time: time.into(),
        }
    }
}

/// Everything about a mission except the aircraft, as used for comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionConditions {
    pub target: String,
    pub weather: String,
    pub time: String,
}

/// Derived assessment for one mission. Recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionOutcome {
    pub destruction_probability: f64,
    pub civilian_risk: f64,
    pub rating: MissionRating,
}

impl From<MissionScore> for MissionOutcome {
    fn from(score: MissionScore) -> Self {
        Self {
            destruction_probability: score.destruction_probability,
            civilian_risk: score.civilian_risk,
            rating: rate(score.destruction_probability, score.civilian_risk),
        }
    }
}
