mod domain;
mod tables;

pub use domain::{
    AircraftSpec, CivilianRiskLevel, CivilianRiskTable, PayloadClass, TargetSpec, TimeSpec,
    WeatherSpec,
};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

/// Which reference table an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Aircraft,
    Target,
    Weather,
    Time,
}

impl EntryKind {
    pub const fn label(self) -> &'static str {
        match self {
            EntryKind::Aircraft => "aircraft",
            EntryKind::Target => "target",
            EntryKind::Weather => "weather",
            EntryKind::Time => "time",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{kind} '{id}' not found in catalog")]
    NotFound { kind: EntryKind, id: String },
    #[error("duplicate {kind} id '{id}'")]
    Duplicate { kind: EntryKind, id: String },
    #[error("invalid {kind} '{id}': {reason}")]
    Invalid {
        kind: EntryKind,
        id: String,
        reason: String,
    },
    #[error("invalid civilian risk table entry '{level}': {value}")]
    InvalidRiskScore { level: &'static str, value: f64 },
    #[error("catalog must contain at least one aircraft")]
    NoAircraft,
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable reference tables every calculation reads from.
///
/// Each table keeps its insertion order; lookups are linear because the
/// tables hold a handful of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    aircraft: Vec<AircraftSpec>,
    targets: Vec<TargetSpec>,
    weather: Vec<WeatherSpec>,
    times: Vec<TimeSpec>,
    #[serde(default)]
    civilian_risk: CivilianRiskTable,
}

impl Catalog {
    /// Process-wide built-in catalog, constructed on first use.
    pub fn standard() -> &'static Catalog {
        static STANDARD: OnceLock<Catalog> = OnceLock::new();
        STANDARD.get_or_init(tables::standard_catalog)
    }

    pub fn new(
        aircraft: Vec<AircraftSpec>,
        targets: Vec<TargetSpec>,
        weather: Vec<WeatherSpec>,
        times: Vec<TimeSpec>,
        civilian_risk: CivilianRiskTable,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            aircraft,
            targets,
            weather,
            times,
            civilian_risk,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_reader(reader)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    pub fn aircraft(&self, id: &str) -> Result<&AircraftSpec, CatalogError> {
        self.aircraft
            .iter()
            .find(|spec| spec.id == id)
            .ok_or_else(|| not_found(EntryKind::Aircraft, id))
    }

    pub fn target(&self, id: &str) -> Result<&TargetSpec, CatalogError> {
        self.targets
            .iter()
            .find(|spec| spec.id == id)
            .ok_or_else(|| not_found(EntryKind::Target, id))
    }

    pub fn weather(&self, id: &str) -> Result<&WeatherSpec, CatalogError> {
        self.weather
            .iter()
            .find(|spec| spec.id == id)
            .ok_or_else(|| not_found(EntryKind::Weather, id))
    }

    pub fn time(&self, id: &str) -> Result<&TimeSpec, CatalogError> {
        self.times
            .iter()
            .find(|spec| spec.id == id)
            .ok_or_else(|| not_found(EntryKind::Time, id))
    }

    pub fn all_aircraft(&self) -> &[AircraftSpec] {
        &self.aircraft
    }

    pub fn all_targets(&self) -> &[TargetSpec] {
        &self.targets
    }

    pub fn all_weather(&self) -> &[WeatherSpec] {
        &self.weather
    }

    pub fn all_times(&self) -> &[TimeSpec] {
        &self.times
    }

    pub fn civilian_risk_table(&self) -> &CivilianRiskTable {
        &self.civilian_risk
    }

    /// Identifiers of one table in catalog order.
    pub fn ids(&self, kind: EntryKind) -> Vec<&str> {
        match kind {
            EntryKind::Aircraft => self.aircraft.iter().map(|spec| spec.id.as_str()).collect(),
            EntryKind::Target => self.targets.iter().map(|spec| spec.id.as_str()).collect(),
            EntryKind::Weather => self.weather.iter().map(|spec| spec.id.as_str()).collect(),
            EntryKind::Time => self.times.iter().map(|spec| spec.id.as_str()).collect(),
        }
    }

    /// Total number of (aircraft, target, weather, time) combinations.
    pub fn scenario_count(&self) -> usize {
        self.aircraft.len() * self.targets.len() * self.weather.len() * self.times.len()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.aircraft.is_empty() {
            return Err(CatalogError::NoAircraft);
        }

        check_unique(EntryKind::Aircraft, self.aircraft.iter().map(|s| &s.id))?;
        check_unique(EntryKind::Target, self.targets.iter().map(|s| &s.id))?;
        check_unique(EntryKind::Weather, self.weather.iter().map(|s| &s.id))?;
        check_unique(EntryKind::Time, self.times.iter().map(|s| &s.id))?;

        for spec in &self.aircraft {
            if spec.precision > 100 {
                return Err(invalid(
                    EntryKind::Aircraft,
                    &spec.id,
                    format!("precision {} exceeds 100", spec.precision),
                ));
            }
        }

        for spec in &self.targets {
            if !(1..=10).contains(&spec.difficulty) {
                return Err(invalid(
                    EntryKind::Target,
                    &spec.id,
                    format!("difficulty {} outside 1-10", spec.difficulty),
                ));
            }
            if let CivilianRiskLevel::Unrated(raw) = &spec.civilian_risk {
                warn!(
                    target_id = %spec.id,
                    level = %raw,
                    fallback = self.civilian_risk.fallback,
                    "unrecognized civilian risk level, using fallback score"
                );
            }
        }

        for spec in &self.weather {
            if !is_unit_interval(spec.precision_modifier) {
                return Err(invalid(
                    EntryKind::Weather,
                    &spec.id,
                    format!("precision modifier {} outside 0.0-1.0", spec.precision_modifier),
                ));
            }
        }

        for spec in &self.times {
            if !is_unit_interval(spec.civilian_modifier) {
                return Err(invalid(
                    EntryKind::Time,
                    &spec.id,
                    format!("civilian modifier {} outside 0.0-1.0", spec.civilian_modifier),
                ));
            }
        }

        for (level, value) in self.civilian_risk.entries() {
            if !value.is_finite() || value < 0.0 {
                return Err(CatalogError::InvalidRiskScore { level, value });
            }
        }

        Ok(())
    }
}

/// Lenient score lookup against the built-in risk table; unknown labels score 50.
pub fn civilian_risk_score(level: &str) -> f64 {
    Catalog::standard().civilian_risk_table().score_label(level)
}

/// Render a snake_case identifier for reports, e.g. `light_rain` -> `Light Rain`.
pub fn display_name(id: &str) -> String {
    id.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn not_found(kind: EntryKind, id: &str) -> CatalogError {
    CatalogError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn invalid(kind: EntryKind, id: &str, reason: String) -> CatalogError {
    CatalogError::Invalid {
        kind,
        id: id.to_string(),
        reason,
    }
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn check_unique<'a, I>(kind: EntryKind, ids: I) -> Result<(), CatalogError>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(CatalogError::Duplicate {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(())
}
