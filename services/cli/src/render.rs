use mission_planner::catalog::{display_name, Catalog, EntryKind, TargetSpec};
use mission_planner::dataset::{
    EvaluationReport, LinearBaseline, RatingDistribution, FEATURE_NAMES,
};
use mission_planner::{
    AircraftComparison, MissionConditions, MissionInput, MissionOutcome, MissionPlanner,
    MissionRating, OptimizationResult,
};
use serde::Serialize;
use std::io::{self, Write};

const WIDE_RULE: usize = 60;
const TABLE_RULE: usize = 90;

/// Everything a mission report shows, in a shape that also serializes to JSON.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentView<'a> {
    pub(crate) aircraft: &'a str,
    pub(crate) target: &'a str,
    pub(crate) weather: &'a str,
    pub(crate) time: &'a str,
    pub(crate) destruction_probability: f64,
    pub(crate) civilian_risk: f64,
    pub(crate) rating: MissionRating,
    pub(crate) assessment: &'static str,
    pub(crate) recommendations: Vec<&'static str>,
}

impl<'a> AssessmentView<'a> {
    pub(crate) fn new(
        input: &'a MissionInput,
        outcome: &MissionOutcome,
        recommendations: Vec<&'static str>,
    ) -> Self {
        Self {
            aircraft: &input.aircraft,
            target: &input.target,
            weather: &input.weather,
            time: &input.time,
            destruction_probability: outcome.destruction_probability,
            civilian_risk: outcome.civilian_risk,
            rating: outcome.rating,
            assessment: outcome.rating.explanation(),
            recommendations,
        }
    }
}

pub(crate) fn options<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "AVAILABLE OPTIONS:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    writeln!(out, "Aircraft: {}", catalog.ids(EntryKind::Aircraft).join(", "))?;
    writeln!(out, "Targets: {}", catalog.ids(EntryKind::Target).join(", "))?;
    writeln!(out, "Weather: {}", catalog.ids(EntryKind::Weather).join(", "))?;
    writeln!(out, "Time: {}", catalog.ids(EntryKind::Time).join(", "))?;
    writeln!(out)?;
    writeln!(out, "USAGE (case-insensitive, prefixes accepted):")?;
    writeln!(out, "mission-planner assess <aircraft> <target> <weather> <time>")?;
    writeln!(out, "mission-planner compare <target> <weather> <time>")?;
    writeln!(out, "mission-planner optimize <target> <weather> <time>")?;
    writeln!(out)?;
    writeln!(out, "EXAMPLES:")?;
    writeln!(out, "mission-planner assess F-35A military_base clear night")?;
    writeln!(out, "mission-planner assess b-2 nuclear_facility storm afternoon")?;
    writeln!(out, "mission-planner optimize wooden_house clear early")
}

pub(crate) fn mission_report<W: Write>(out: &mut W, view: &AssessmentView<'_>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(WIDE_RULE))?;
    writeln!(out, "MISSION ASSESSMENT REPORT")?;
    writeln!(out, "{}", "=".repeat(WIDE_RULE))?;
    writeln!(out, "Aircraft: {}", view.aircraft)?;
    writeln!(out, "Target: {}", display_name(view.target))?;
    writeln!(out, "Weather: {}", display_name(view.weather))?;
    writeln!(out, "Time: {}", display_name(view.time))?;
    writeln!(out, "{}", "-".repeat(WIDE_RULE))?;
    writeln!(
        out,
        "Target Destruction Probability: {:.1}%",
        view.destruction_probability
    )?;
    writeln!(out, "Civilian Risk Assessment: {:.1}%", view.civilian_risk)?;
    writeln!(out, "OVERALL MISSION RATING: {}", view.rating)?;
    writeln!(out, "{}", "-".repeat(WIDE_RULE))?;
    writeln!(out, "Assessment: {}", view.assessment)?;

    if !view.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "RECOMMENDATIONS FOR IMPROVEMENT:")?;
        for advice in &view.recommendations {
            writeln!(out, "- {advice}")?;
        }
    }
    Ok(())
}

fn mission_parameters<W: Write>(out: &mut W, conditions: &MissionConditions) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Mission Parameters:")?;
    writeln!(out, "Target: {}", display_name(&conditions.target))?;
    writeln!(out, "Weather: {}", display_name(&conditions.weather))?;
    writeln!(out, "Time: {}", display_name(&conditions.time))
}

pub(crate) fn comparison_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== AIRCRAFT COMPARISON ===")
}

/// Comparison body; callers print [`comparison_header`] first.
pub(crate) fn comparison<W: Write>(
    out: &mut W,
    conditions: &MissionConditions,
    target: &TargetSpec,
    rows: &[AircraftComparison],
) -> io::Result<()> {
    mission_parameters(out, conditions)?;
    writeln!(out)?;
    writeln!(out, "Target Difficulty: {}/10", target.difficulty)?;
    writeln!(
        out,
        "Civilian Risk Level: {}",
        display_name(target.civilian_risk.label())
    )?;

    writeln!(out)?;
    writeln!(out, "Aircraft Comparison:")?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE))?;
    writeln!(
        out,
        "{:<12} {:<8} {:<10} {:<12} {:<25}",
        "Aircraft", "Rating", "Target %", "Civ Risk %", "Best For"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE))?;
    for row in rows {
        writeln!(
            out,
            "{:<12} {:<8} {:<10.1} {:<12.1} {:<25}",
            row.aircraft,
            row.outcome.rating,
            row.outcome.destruction_probability,
            row.outcome.civilian_risk,
            row.context
        )?;
    }
    Ok(())
}

pub(crate) fn optimization<W: Write>(
    out: &mut W,
    planner: &MissionPlanner<'_>,
    conditions: &MissionConditions,
    result: &OptimizationResult,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== AIRCRAFT RECOMMENDATION ===")?;
    mission_parameters(out, conditions)?;
    writeln!(out)?;
    writeln!(
        out,
        "Recommended Aircraft: {} ({})",
        result.best_aircraft, result.best_rating
    )?;
    writeln!(out, "Assessment: {}", result.best_rating.explanation())?;

    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE))?;
    writeln!(
        out,
        "{:<12} {:<8} {:<10} {:<12} {:<25}",
        "Aircraft", "Rating", "Target %", "Civ Risk %", "Notes"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE))?;
    for entry in &result.results {
        let marker = if entry.aircraft == result.best_aircraft {
            " *"
        } else {
            ""
        };
        writeln!(
            out,
            "{:<12} {:<8} {:<10.1} {:<12.1} {}{}",
            entry.aircraft,
            entry.outcome.rating,
            entry.outcome.destruction_probability,
            entry.outcome.civilian_risk,
            planner.notes(&entry.aircraft, entry.outcome.rating),
            marker
        )?;
    }
    Ok(())
}

pub(crate) fn distribution<W: Write>(
    out: &mut W,
    distribution: &RatingDistribution,
) -> io::Result<()> {
    writeln!(out, "Mission rating distribution ({} rows):", distribution.total)?;
    for entry in &distribution.counts {
        writeln!(
            out,
            "{}: {:4} ({:5.1}%)",
            entry.rating, entry.count, entry.percentage
        )?;
    }

    let (Some(most), Some(least), Some(ratio)) = (
        distribution.most_common(),
        distribution.least_common(),
        distribution.imbalance_ratio(),
    ) else {
        return writeln!(out, "Dataset is empty.");
    };

    writeln!(out)?;
    writeln!(out, "Class imbalance analysis:")?;
    writeln!(out, "Most common class: {} ({} examples)", most.rating, most.count)?;
    writeln!(out, "Least common class: {} ({} examples)", least.rating, least.count)?;
    writeln!(out, "Imbalance ratio: {ratio:.1}:1")?;
    if distribution.is_severely_imbalanced() {
        writeln!(out, "WARNING: Severe class imbalance detected")?;
        writeln!(
            out,
            "   Rare ratings will be hard for learned models to reproduce"
        )?;
    }
    Ok(())
}

pub(crate) fn evaluation<W: Write>(
    out: &mut W,
    baseline: &LinearBaseline<'_>,
    report: &EvaluationReport,
    training_rows: usize,
) -> io::Result<()> {
    writeln!(out, "Linear baseline trained on {training_rows} scenarios")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<20} {:>14} {:>14}",
        "Feature", "Destruction", "Civilian Risk"
    )?;
    writeln!(
        out,
        "{:<20} {:>14.4} {:>14.4}",
        "intercept", baseline.destruction.intercept, baseline.civilian_risk.intercept
    )?;
    for (index, name) in FEATURE_NAMES.iter().enumerate() {
        writeln!(
            out,
            "{:<20} {:>14.4} {:>14.4}",
            name,
            baseline.destruction.coefficients[index],
            baseline.civilian_risk.coefficients[index]
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Evaluated on {} fresh scenarios:", report.samples)?;
    writeln!(
        out,
        "  Destruction probability MAE: {:.2}",
        report.destruction_mae
    )?;
    writeln!(out, "  Civilian risk MAE: {:.2}", report.civilian_risk_mae)?;
    writeln!(
        out,
        "  Rating accuracy: {:.1}%",
        report.rating_accuracy * 100.0
    )
}
