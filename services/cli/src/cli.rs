use crate::commands::{self, AnalyzeArgs, AssessArgs, ConditionArgs, EvaluateArgs, ExportArgs};
use clap::{Parser, Subcommand};
use mission_planner::catalog::Catalog;
use mission_planner::config::AppConfig;
use mission_planner::error::AppError;
use mission_planner::{telemetry, MissionPlanner};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "mission-planner",
    about = "Score strike missions and recommend the best-suited aircraft",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every catalog option with usage examples (default command)
    Options,
    /// Assess one aircraft against a target, weather, and time of day
    Assess(AssessArgs),
    /// Compare every aircraft under fixed mission conditions
    Compare(ConditionArgs),
    /// Recommend the best aircraft for fixed mission conditions
    Optimize(ConditionArgs),
    /// Generate, inspect, and benchmark labeled training data
    Dataset {
        #[command(subcommand)]
        command: DatasetCommand,
    },
    /// Interactive mission planning menu
    Menu,
}

#[derive(Subcommand, Debug)]
enum DatasetCommand {
    /// Write labeled scenarios as CSV
    Export(ExportArgs),
    /// Summarize the rating distribution of a dataset CSV
    Analyze(AnalyzeArgs),
    /// Fit the linear baseline and score it against the rule engine
    Evaluate(EvaluateArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "configuration loaded");

    let loaded;
    let catalog = match &config.catalog.path {
        Some(path) => {
            loaded = Catalog::from_path(path)?;
            info!(path = %path.display(), "loaded catalog override");
            &loaded
        }
        None => Catalog::standard(),
    };
    let planner = MissionPlanner::new(catalog);

    match cli.command.unwrap_or(Command::Options) {
        Command::Options => commands::run_options(&planner),
        Command::Assess(args) => commands::run_assess(&planner, args),
        Command::Compare(args) => commands::run_compare(&planner, args),
        Command::Optimize(args) => commands::run_optimize(&planner, args),
        Command::Dataset { command } => match command {
            DatasetCommand::Export(args) => {
                commands::run_export(&planner, &config.sampling, args)
            }
            DatasetCommand::Analyze(args) => commands::run_analyze(args),
            DatasetCommand::Evaluate(args) => {
                commands::run_evaluate(&planner, &config.sampling, args)
            }
        },
        Command::Menu => commands::run_menu(&planner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_mission_arguments() {
        let cli = Cli::try_parse_from([
            "mission-planner",
            "assess",
            "f-35",
            "military",
            "light",
            "night",
            "--json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Assess(args)) => {
                assert_eq!(args.aircraft, "f-35");
                assert_eq!(args.time, "night");
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn assess_requires_all_four_selections() {
        assert!(Cli::try_parse_from(["mission-planner", "assess", "B-2", "bridge"]).is_err());
    }

    #[test]
    fn dataset_export_flags_are_optional() {
        let cli = Cli::try_parse_from(["mission-planner", "dataset", "export", "--sample", "10"])
            .expect("parses");
        match cli.command {
            Some(Command::Dataset {
                command: DatasetCommand::Export(args),
            }) => {
                assert_eq!(args.sample, Some(10));
                assert!(args.output.is_none());
                assert!(args.seed.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_defaults_to_options() {
        let cli = Cli::try_parse_from(["mission-planner"]).expect("parses");
        assert!(cli.command.is_none());
    }
}
