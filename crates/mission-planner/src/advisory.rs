//! Short human-readable guidance attached to assessments and comparison rows.

use crate::assessment::{MissionOutcome, MissionRating};
use crate::catalog::{AircraftSpec, TargetSpec};

/// Targets hard enough that payload choice dominates the advice.
const HARDENED_TARGETS: [&str; 2] = ["nuclear_facility", "concrete_bunker"];
/// Precision at or above which "use a more precise aircraft" is pointless.
const TOP_TIER_PRECISION: u8 = 98;

/// Brief verdict on an aircraft for a given rating.
pub fn aircraft_notes(aircraft: &AircraftSpec, rating: MissionRating) -> &'static str {
    match rating {
        MissionRating::S | MissionRating::A => {
            if aircraft.stealth {
                "Excellent/stealth"
            } else {
                "Excellent choice"
            }
        }
        MissionRating::B => {
            if aircraft.precision >= 90 {
                "Good/high precision"
            } else {
                "Good option"
            }
        }
        MissionRating::C => {
            if aircraft.stealth {
                "Consider alternatives"
            } else {
                "Risky/non-stealth"
            }
        }
        MissionRating::D | MissionRating::F => {
            if aircraft.precision < 80 {
                "Low precision"
            } else {
                "Not recommended"
            }
        }
    }
}

/// Comparison-table note: the most specific suitability reason, else [`aircraft_notes`].
pub fn comparison_context(
    aircraft: &AircraftSpec,
    target: &TargetSpec,
    rating: MissionRating,
) -> &'static str {
    if aircraft.stealth && target.civilian_risk.is_high() {
        "Stealth advantage"
    } else if target.difficulty >= 7 && aircraft.payload.is_heavy() {
        "Heavy payload suitable"
    } else if aircraft.precision >= 95 {
        "High precision"
    } else if aircraft.id == "A-10" && target.difficulty <= 3 {
        "Good for soft targets"
    } else if aircraft.id == "AC-130"
        && target.civilian_risk == crate::catalog::CivilianRiskLevel::Low
    {
        "Extended loiter time"
    } else {
        aircraft_notes(aircraft, rating)
    }
}

/// Suggestions for missions rated C or worse; empty for better ratings.
pub fn improvement_recommendations(
    aircraft: &AircraftSpec,
    target: &TargetSpec,
    weather_id: &str,
    outcome: &MissionOutcome,
) -> Vec<&'static str> {
    let mut advice = Vec::new();
    if !outcome.rating.needs_improvement() {
        return advice;
    }

    if outcome.civilian_risk > 40.0 {
        advice.push("Consider operating during early morning hours (02:00-06:00)");
        advice.push("Use stealth aircraft to reduce civilian panic");
    }

    if outcome.destruction_probability < 80.0 {
        if weather_id != "clear" {
            advice.push("Wait for better weather conditions");
        }

        if aircraft.precision < TOP_TIER_PRECISION {
            advice.push("Consider using higher-precision aircraft");
        }

        if HARDENED_TARGETS.contains(&target.id.as_str()) {
            if aircraft.payload.is_heavy() {
                advice.push(
                    "Target is extremely hardened - even heavy munitions have limited effectiveness",
                );
                advice.push("Consider multiple coordinated strikes or alternative objectives");
            } else {
                advice.push(
                    "Consider using heavier payload aircraft or specialized bunker-buster munitions",
                );
            }
        }
    }

    advice
}
