use serde::{Deserialize, Serialize};
use std::fmt;

/// Mission quality tier. Variants are declared worst-first so `Ord` follows quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MissionRating {
    #[serde(rename = "F-RANK")]
    F,
    #[serde(rename = "D-RANK")]
    D,
    #[serde(rename = "C-RANK")]
    C,
    #[serde(rename = "B-RANK")]
    B,
    #[serde(rename = "A-RANK")]
    A,
    #[serde(rename = "S-RANK")]
    S,
}

impl MissionRating {
    /// Best to worst.
    pub const fn ordered() -> [Self; 6] {
        [Self::S, Self::A, Self::B, Self::C, Self::D, Self::F]
    }

    pub const fn label(self) -> &'static str {
        match self {
            MissionRating::S => "S-RANK",
            MissionRating::A => "A-RANK",
            MissionRating::B => "B-RANK",
            MissionRating::C => "C-RANK",
            MissionRating::D => "D-RANK",
            MissionRating::F => "F-RANK",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|rating| rating.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Ordinal used by the optimizer, S=6 down to F=1.
    pub const fn score(self) -> u8 {
        match self {
            MissionRating::S => 6,
            MissionRating::A => 5,
            MissionRating::B => 4,
            MissionRating::C => 3,
            MissionRating::D => 2,
            MissionRating::F => 1,
        }
    }

    pub const fn explanation(self) -> &'static str {
        match self {
            MissionRating::S => {
                "EXCELLENT - Mission approved. Minimal risk, maximum effectiveness."
            }
            MissionRating::A => "VERY GOOD - Mission approved. Low risk, high effectiveness.",
            MissionRating::B => "GOOD - Mission approved. Acceptable risk levels.",
            MissionRating::C => "ACCEPTABLE - Requires senior approval. Moderate risk.",
            MissionRating::D => {
                "POOR - Mission not recommended. High risk or low effectiveness."
            }
            MissionRating::F => {
                "ABORT - Mission rejected. Unacceptable risk or failure probability."
            }
        }
    }

    /// C and below come with improvement recommendations.
    pub const fn needs_improvement(self) -> bool {
        matches!(self, MissionRating::C | MissionRating::D | MissionRating::F)
    }
}

impl fmt::Display for MissionRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Map destruction probability and civilian risk onto a rating.
///
/// Tiers are checked from worst to best and the first match wins, so either
/// axis alone is enough to hold a mission down.
pub fn rate(destruction_probability: f64, civilian_risk: f64) -> MissionRating {
    if civilian_risk > 80.0 || destruction_probability < 40.0 {
        return MissionRating::F;
    }

    if civilian_risk > 60.0 || destruction_probability < 60.0 {
        return MissionRating::D;
    }

    if civilian_risk > 40.0 || destruction_probability < 75.0 {
        return MissionRating::C;
    }

    if civilian_risk > 20.0 || destruction_probability < 85.0 {
        return MissionRating::B;
    }

    if civilian_risk > 5.0 || destruction_probability < 95.0 {
        return MissionRating::A;
    }

    MissionRating::S
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_each_tier() {
        assert_eq!(rate(98.0, 2.0), MissionRating::S);
        assert_eq!(rate(90.0, 10.0), MissionRating::A);
        assert_eq!(rate(85.0, 25.0), MissionRating::B);
        assert_eq!(rate(75.0, 45.0), MissionRating::C);
        assert_eq!(rate(65.0, 65.0), MissionRating::D);
        assert_eq!(rate(30.0, 85.0), MissionRating::F);
    }

    #[test]
    fn civilian_risk_gate_dominates_high_destruction() {
        assert_eq!(rate(95.0, 85.0), MissionRating::F);
        assert_eq!(rate(99.9, 61.0), MissionRating::D);
    }

    #[test]
    fn low_destruction_gate_dominates_low_risk() {
        assert_eq!(rate(30.0, 10.0), MissionRating::F);
        assert_eq!(rate(59.9, 0.0), MissionRating::D);
    }

    #[test]
    fn thresholds_are_exclusive_on_risk_and_inclusive_on_destruction() {
        assert_eq!(rate(95.0, 5.0), MissionRating::S);
        assert_eq!(rate(94.9, 5.0), MissionRating::A);
        assert_eq!(rate(40.0, 80.0), MissionRating::D);
        assert_eq!(rate(85.0, 20.0), MissionRating::A);
    }

    #[test]
    fn ordinal_scores_follow_quality() {
        let scores: Vec<u8> = MissionRating::ordered()
            .into_iter()
            .map(MissionRating::score)
            .collect();
        assert_eq!(scores, vec![6, 5, 4, 3, 2, 1]);
        assert!(MissionRating::S > MissionRating::A);
        assert!(MissionRating::D > MissionRating::F);
    }

    #[test]
    fn labels_parse_and_serialize() {
        assert_eq!(MissionRating::parse("b-rank"), Some(MissionRating::B));
        assert_eq!(MissionRating::parse("Z-RANK"), None);
        let json = serde_json::to_string(&MissionRating::S).expect("serializes");
        assert_eq!(json, "\"S-RANK\"");
    }
}
