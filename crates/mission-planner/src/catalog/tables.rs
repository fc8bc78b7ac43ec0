use super::domain::{
    AircraftSpec, CivilianRiskLevel, CivilianRiskTable, PayloadClass, TargetSpec, TimeSpec,
    WeatherSpec,
};
use super::Catalog;

fn aircraft(id: &str, precision: u8, payload: PayloadClass, stealth: bool) -> AircraftSpec {
    AircraftSpec {
        id: id.to_string(),
        precision,
        payload,
        stealth,
    }
}

fn target(id: &str, difficulty: u8, civilian_risk: CivilianRiskLevel) -> TargetSpec {
    TargetSpec {
        id: id.to_string(),
        difficulty,
        civilian_risk,
    }
}

fn weather(id: &str, precision_modifier: f64) -> WeatherSpec {
    WeatherSpec {
        id: id.to_string(),
        precision_modifier,
    }
}

fn time(id: &str, civilian_modifier: f64, description: &str) -> TimeSpec {
    TimeSpec {
        id: id.to_string(),
        civilian_modifier,
        description: description.to_string(),
    }
}

/// Built-in reference tables. Row order is significant: the optimizer breaks
/// ties in favour of the earliest aircraft.
pub(crate) fn standard_catalog() -> Catalog {
    use CivilianRiskLevel::{High, Low, Medium, VeryHigh};
    use PayloadClass::{Heavy, Light, Medium as MediumPayload, VeryHeavy};

    Catalog {
        aircraft: vec![
            aircraft("B-2", 98, VeryHeavy, true),
            aircraft("A-10", 75, Heavy, false),
            aircraft("AC-130", 88, VeryHeavy, false),
            aircraft("Su-57", 90, MediumPayload, true),
            aircraft("Eurofighter", 85, MediumPayload, false),
            aircraft("F-22", 95, Light, true),
            aircraft("F-15E", 85, Heavy, false),
            aircraft("F-35A", 95, MediumPayload, true),
            aircraft("NGAD-X", 99, MediumPayload, true),
        ],
        targets: vec![
            target("wooden_house", 1, VeryHigh),
            target("concrete_bunker", 8, Low),
            target("nuclear_facility", 9, VeryHigh),
            target("military_base", 6, Medium),
            target("bridge", 4, Low),
            target("command_center", 7, Medium),
            target("warehouse", 3, High),
        ],
        weather: vec![
            weather("clear", 1.0),
            weather("light_rain", 0.9),
            weather("heavy_rain", 0.7),
            weather("windy", 0.85),
            weather("storm", 0.5),
            weather("fog", 0.6),
        ],
        times: vec![
            time(
                "early_morning",
                0.2,
                "02:00-06:00 (Minimal civilian activity)",
            ),
            time("morning", 0.7, "06:00-12:00 (Moderate civilian activity)"),
            time("afternoon", 1.0, "12:00-18:00 (High civilian activity)"),
            time("evening", 0.8, "18:00-22:00 (Moderate civilian activity)"),
            time("night", 0.4, "22:00-02:00 (Low civilian activity)"),
        ],
        civilian_risk: CivilianRiskTable::default(),
    }
}
