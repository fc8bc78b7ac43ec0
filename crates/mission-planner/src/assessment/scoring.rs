use crate::catalog::{AircraftSpec, CivilianRiskTable, TargetSpec, TimeSpec, WeatherSpec};
use serde::{Deserialize, Serialize};

/// Destruction probability never reaches certainty.
pub const DESTRUCTION_CEILING: f64 = 99.9;
pub const CIVILIAN_RISK_CEILING: f64 = 95.0;
/// Lowest difficulty modifier, so every target stays attackable.
pub const DIFFICULTY_FLOOR: f64 = 0.3;
const DIFFICULTY_STEP: f64 = 0.08;
const STEALTH_MODIFIER: f64 = 0.7;

/// The two derived percentages for one mission, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissionScore {
    pub destruction_probability: f64,
    pub civilian_risk: f64,
}

pub fn difficulty_modifier(difficulty: u8) -> f64 {
    (1.0 - f64::from(difficulty) * DIFFICULTY_STEP).max(DIFFICULTY_FLOOR)
}

pub fn stealth_modifier(aircraft: &AircraftSpec) -> f64 {
    if aircraft.stealth {
        STEALTH_MODIFIER
    } else {
        1.0
    }
}

pub fn score(
    aircraft: &AircraftSpec,
    target: &TargetSpec,
    weather: &WeatherSpec,
    time: &TimeSpec,
    risk_table: &CivilianRiskTable,
) -> MissionScore {
    let destruction_probability = (f64::from(aircraft.precision)
        * weather.precision_modifier
        * difficulty_modifier(target.difficulty))
    .min(DESTRUCTION_CEILING);

    let base_civilian_risk = risk_table.score(&target.civilian_risk);
    let civilian_risk = (base_civilian_risk * time.civilian_modifier * stealth_modifier(aircraft))
        .min(CIVILIAN_RISK_CEILING);

    MissionScore {
        destruction_probability: round_tenth(destruction_probability),
        civilian_risk: round_tenth(civilian_risk),
    }
}

/// Round to one decimal place using correctly rounded decimal formatting, so
/// values like 44.46 land on 44.5 rather than drifting through `x * 10.0`.
pub(crate) fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn score_ids(aircraft: &str, target: &str, weather: &str, time: &str) -> MissionScore {
        let catalog = Catalog::standard();
        score(
            catalog.aircraft(aircraft).expect("aircraft"),
            catalog.target(target).expect("target"),
            catalog.weather(weather).expect("weather"),
            catalog.time(time).expect("time"),
            catalog.civilian_risk_table(),
        )
    }

    #[test]
    fn difficulty_modifier_is_floored() {
        assert!((difficulty_modifier(1) - 0.92).abs() < 1e-9);
        assert!((difficulty_modifier(6) - 0.52).abs() < 1e-9);
        assert_eq!(difficulty_modifier(9), DIFFICULTY_FLOOR);
        assert_eq!(difficulty_modifier(10), DIFFICULTY_FLOOR);
    }

    #[test]
    fn scores_stealth_bomber_on_soft_target() {
        let score = score_ids("B-2", "wooden_house", "clear", "early_morning");
        assert_eq!(score.destruction_probability, 90.2);
        assert_eq!(score.civilian_risk, 10.5);
    }

    #[test]
    fn scores_stealth_fighter_in_rain_at_night() {
        let score = score_ids("F-35A", "military_base", "light_rain", "night");
        assert_eq!(score.destruction_probability, 44.5);
        assert_eq!(score.civilian_risk, 9.8);
    }

    #[test]
    fn hardened_target_in_storm_uses_floor() {
        let score = score_ids("Eurofighter", "nuclear_facility", "storm", "afternoon");
        assert_eq!(score.destruction_probability, 12.8);
        assert_eq!(score.civilian_risk, 75.0);
    }

    #[test]
    fn outputs_are_clamped_to_ceilings() {
        let aircraft = AircraftSpec {
            id: "perfect".to_string(),
            precision: 100,
            payload: crate::catalog::PayloadClass::Light,
            stealth: false,
        };
        let target = TargetSpec {
            id: "trivial".to_string(),
            difficulty: 0,
            civilian_risk: crate::catalog::CivilianRiskLevel::VeryHigh,
        };
        let weather = WeatherSpec {
            id: "clear".to_string(),
            precision_modifier: 1.0,
        };
        let time = TimeSpec {
            id: "noon".to_string(),
            civilian_modifier: 1.0,
            description: String::new(),
        };
        let table = CivilianRiskTable {
            very_high: 200.0,
            ..CivilianRiskTable::default()
        };

        let score = score(&aircraft, &target, &weather, &time, &table);
        assert_eq!(score.destruction_probability, DESTRUCTION_CEILING);
        assert_eq!(score.civilian_risk, CIVILIAN_RISK_CEILING);
    }

    #[test]
    fn round_tenth_matches_decimal_rounding() {
        assert_eq!(round_tenth(90.16), 90.2);
        assert_eq!(round_tenth(44.46), 44.5);
        assert_eq!(round_tenth(12.75), 12.8);
        assert_eq!(round_tenth(0.0), 0.0);
    }
}
