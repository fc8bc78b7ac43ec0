//! Strike mission assessment: scores an (aircraft, target, weather, time)
//! selection, rates it on an S-F ladder, and recommends the best-suited
//! aircraft for fixed conditions.

pub mod advisory;
pub mod assessment;
pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod matching;
pub mod optimizer;
mod planner;
pub mod telemetry;

pub use assessment::{
    rate, MissionConditions, MissionInput, MissionOutcome, MissionRating, MissionScore,
};
pub use catalog::{civilian_risk_score, Catalog, CatalogError, EntryKind};
pub use optimizer::{AircraftComparison, AircraftResult, HeuristicRule, OptimizationResult};
pub use planner::MissionPlanner;
