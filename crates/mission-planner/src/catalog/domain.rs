use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal weight class of the ordnance an aircraft carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadClass {
    Light,
    Medium,
    Heavy,
    VeryHeavy,
}

impl PayloadClass {
    pub const fn label(self) -> &'static str {
        match self {
            PayloadClass::Light => "light",
            PayloadClass::Medium => "medium",
            PayloadClass::Heavy => "heavy",
            PayloadClass::VeryHeavy => "very_heavy",
        }
    }

    pub const fn is_heavy(self) -> bool {
        matches!(self, PayloadClass::Heavy | PayloadClass::VeryHeavy)
    }
}

/// Qualitative civilian exposure attached to a target.
///
/// Labels outside the five known levels are kept as [`CivilianRiskLevel::Unrated`]
/// and score with the risk table fallback instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CivilianRiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
    Unrated(String),
}

impl CivilianRiskLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "very_low" => Some(Self::VeryLow),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "very_high" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CivilianRiskLevel::VeryLow => "very_low",
            CivilianRiskLevel::Low => "low",
            CivilianRiskLevel::Medium => "medium",
            CivilianRiskLevel::High => "high",
            CivilianRiskLevel::VeryHigh => "very_high",
            CivilianRiskLevel::Unrated(raw) => raw,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, CivilianRiskLevel::High | CivilianRiskLevel::VeryHigh)
    }
}

impl From<String> for CivilianRiskLevel {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or(Self::Unrated(value))
    }
}

impl From<CivilianRiskLevel> for String {
    fn from(value: CivilianRiskLevel) -> Self {
        match value {
            CivilianRiskLevel::Unrated(raw) => raw,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for CivilianRiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strike platform characteristics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftSpec {
    pub id: String,
    /// Sensor and weapon accuracy, 0-100.
    pub precision: u8,
    pub payload: PayloadClass,
    pub stealth: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub id: String,
    /// Hardness of the target, 1-10.
    pub difficulty: u8,
    pub civilian_risk: CivilianRiskLevel,
}

/// Weather condition scaling aircraft precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSpec {
    pub id: String,
    pub precision_modifier: f64,
}

impl WeatherSpec {
    /// Whole-percent precision loss, used by selection menus.
    pub fn precision_reduction_pct(&self) -> u32 {
        ((1.0 - self.precision_modifier) * 100.0).max(0.0) as u32
    }
}

/// Time-of-day window scaling the baseline civilian risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSpec {
    pub id: String,
    pub civilian_modifier: f64,
    #[serde(default)]
    pub description: String,
}

/// Base civilian risk score per qualitative level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CivilianRiskTable {
    pub very_low: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub very_high: f64,
    /// Score used for levels the table does not know.
    pub fallback: f64,
}

impl Default for CivilianRiskTable {
    fn default() -> Self {
        Self {
            very_low: 5.0,
            low: 15.0,
            medium: 35.0,
            high: 55.0,
            very_high: 75.0,
            fallback: 50.0,
        }
    }
}

impl CivilianRiskTable {
    pub fn score(&self, level: &CivilianRiskLevel) -> f64 {
        match level {
            CivilianRiskLevel::VeryLow => self.very_low,
            CivilianRiskLevel::Low => self.low,
            CivilianRiskLevel::Medium => self.medium,
            CivilianRiskLevel::High => self.high,
            CivilianRiskLevel::VeryHigh => self.very_high,
            CivilianRiskLevel::Unrated(_) => self.fallback,
        }
    }

    /// Lenient lookup by label; unknown labels yield the fallback score.
    pub fn score_label(&self, label: &str) -> f64 {
        self.score(&CivilianRiskLevel::from(label.to_string()))
    }

    pub(crate) fn entries(&self) -> [(&'static str, f64); 6] {
        [
            ("very_low", self.very_low),
            ("low", self.low),
            ("medium", self.medium),
            ("high", self.high),
            ("very_high", self.very_high),
            ("fallback", self.fallback),
        ]
    }
}
