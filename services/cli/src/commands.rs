use crate::menu;
use crate::render::{self, AssessmentView};
use clap::Args;
use mission_planner::config::SamplingConfig;
use mission_planner::dataset::{
    evaluate_predictor, generate_complete, label, read_csv, sample_scenarios, seeded_rng,
    write_csv, LinearBaseline, RatingDistribution,
};
use mission_planner::error::AppError;
use mission_planner::matching::{resolve_conditions, resolve_mission};
use mission_planner::MissionPlanner;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Aircraft name (case-insensitive, prefixes accepted)
    pub(crate) aircraft: String,
    /// Target type
    pub(crate) target: String,
    /// Weather condition
    pub(crate) weather: String,
    /// Time of day
    pub(crate) time: String,
    /// Emit the assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ConditionArgs {
    /// Target type
    pub(crate) target: String,
    /// Weather condition
    pub(crate) weather: String,
    /// Time of day
    pub(crate) time: String,
    /// Emit the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Destination CSV file; stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Draw this many random scenarios instead of enumerating every combination
    #[arg(long)]
    pub(crate) sample: Option<usize>,
    /// Seed for random sampling (defaults to MISSION_SAMPLE_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Dataset CSV produced by `dataset export`
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Number of random scenarios to evaluate on (defaults to MISSION_SAMPLE_SIZE)
    #[arg(long)]
    pub(crate) samples: Option<usize>,
    /// Seed for scenario sampling (defaults to MISSION_SAMPLE_SEED)
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) fn run_options(planner: &MissionPlanner<'_>) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    render::options(&mut out, planner.catalog())?;
    Ok(())
}

pub(crate) fn run_assess(planner: &MissionPlanner<'_>, args: AssessArgs) -> Result<(), AppError> {
    let input = resolve_mission(
        planner.catalog(),
        &args.aircraft,
        &args.target,
        &args.weather,
        &args.time,
    )?;
    let outcome = planner.assess(&input)?;
    let recommendations = planner.recommendations(&input, &outcome)?;
    info!(
        aircraft = %input.aircraft,
        target = %input.target,
        rating = %outcome.rating,
        "assessed mission"
    );

    let view = AssessmentView::new(&input, &outcome, recommendations);
    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &view)?;
    } else {
        render::mission_report(&mut out, &view)?;
    }
    Ok(())
}

pub(crate) fn run_compare(
    planner: &MissionPlanner<'_>,
    args: ConditionArgs,
) -> Result<(), AppError> {
    let conditions = resolve_conditions(planner.catalog(), &args.target, &args.weather, &args.time)?;
    let rows = planner.compare(&conditions.target, &conditions.weather, &conditions.time)?;

    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &rows)?;
    } else {
        let target = planner.catalog().target(&conditions.target)?;
        render::comparison_header(&mut out)?;
        render::comparison(&mut out, &conditions, target, &rows)?;
    }
    Ok(())
}

pub(crate) fn run_optimize(
    planner: &MissionPlanner<'_>,
    args: ConditionArgs,
) -> Result<(), AppError> {
    let conditions = resolve_conditions(planner.catalog(), &args.target, &args.weather, &args.time)?;
    let result = planner.optimize(&conditions.target, &conditions.weather, &conditions.time)?;
    info!(
        best = %result.best_aircraft,
        rating = %result.best_rating,
        "selected aircraft"
    );

    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &result)?;
    } else {
        render::optimization(&mut out, planner, &conditions, &result)?;
    }
    Ok(())
}

pub(crate) fn run_export(
    planner: &MissionPlanner<'_>,
    sampling: &SamplingConfig,
    args: ExportArgs,
) -> Result<(), AppError> {
    let examples = match args.sample {
        Some(count) => {
            let seed = args.seed.unwrap_or(sampling.seed);
            let mut rng = seeded_rng(seed);
            let scenarios = sample_scenarios(planner, count, &mut rng);
            info!(count, seed, "sampled training scenarios");
            label(planner, &scenarios)?
        }
        None => generate_complete(planner)?,
    };

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            write_csv(BufWriter::new(file), &examples)?;
            eprintln!("Wrote {} rows to {}", examples.len(), path.display());
        }
        None => write_csv(io::stdout().lock(), &examples)?,
    }
    Ok(())
}

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let file = File::open(&args.input)?;
    let examples = read_csv(file)?;
    let distribution = RatingDistribution::from_examples(&examples);

    let mut out = io::stdout().lock();
    render::distribution(&mut out, &distribution)?;
    Ok(())
}

pub(crate) fn run_evaluate(
    planner: &MissionPlanner<'_>,
    sampling: &SamplingConfig,
    args: EvaluateArgs,
) -> Result<(), AppError> {
    let samples = args.samples.unwrap_or(sampling.sample_size);
    let seed = args.seed.unwrap_or(sampling.seed);

    let training = generate_complete(planner)?;
    let baseline = LinearBaseline::fit(planner.catalog(), &training)?;
    let scenarios = sample_scenarios(planner, samples, &mut seeded_rng(seed));
    let report = evaluate_predictor(planner, &baseline, &scenarios)?;
    info!(
        training_rows = training.len(),
        samples,
        accuracy = report.rating_accuracy,
        "evaluated linear baseline"
    );

    let mut out = io::stdout().lock();
    render::evaluation(&mut out, &baseline, &report, training.len())?;
    Ok(())
}

pub(crate) fn run_menu(planner: &MissionPlanner<'_>) -> Result<(), AppError> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    menu::run(planner, stdin, stdout)?;
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)
}
