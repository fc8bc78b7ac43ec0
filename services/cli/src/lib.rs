mod cli;
mod commands;
mod menu;
mod render;

use mission_planner::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
