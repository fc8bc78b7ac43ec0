use crate::render::{self, AssessmentView};
use mission_planner::catalog::display_name;
use mission_planner::error::AppError;
use mission_planner::{MissionConditions, MissionInput, MissionPlanner};
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 60;

enum Choice {
    Assess,
    Compare,
    Exit,
}

/// Interactive loop over numbered selections. End of input exits quietly.
pub(crate) fn run<R: BufRead, W: Write>(
    planner: &MissionPlanner<'_>,
    mut input: R,
    mut out: W,
) -> Result<(), AppError> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "STRIKE MISSION ASSESSMENT SYSTEM")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out)?;

    loop {
        let Some(choice) = main_choice(&mut input, &mut out)? else {
            return Ok(());
        };
        let finished = match choice {
            Choice::Assess => assess(planner, &mut input, &mut out)?,
            Choice::Compare => compare(planner, &mut input, &mut out)?,
            Choice::Exit => {
                writeln!(out, "Mission planning complete. Stay safe out there.")?;
                return Ok(());
            }
        };
        if !finished {
            return Ok(());
        }
        writeln!(out, "\n{}\n", "-".repeat(RULE_WIDTH))?;
    }
}

fn main_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Choice>> {
    loop {
        writeln!(out, "Select an option:")?;
        writeln!(out, "1. Assess Mission with Specific Aircraft")?;
        writeln!(out, "2. Compare Aircraft Options")?;
        writeln!(out, "3. Exit")?;
        write!(out, "\nEnter choice (1-3): ")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.as_str() {
            "1" => return Ok(Some(Choice::Assess)),
            "2" => return Ok(Some(Choice::Compare)),
            "3" => return Ok(Some(Choice::Exit)),
            _ => writeln!(out, "Invalid choice. Please enter 1-3.\n")?,
        }
    }
}

/// Returns `false` when input ran out mid-selection.
fn assess<R: BufRead, W: Write>(
    planner: &MissionPlanner<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<bool, AppError> {
    writeln!(out, "\n=== MISSION ASSESSMENT ===")?;
    let Some(aircraft) = select_aircraft(planner, input, out)? else {
        return Ok(false);
    };
    let Some(conditions) = select_conditions(planner, input, out)? else {
        return Ok(false);
    };

    let mission = MissionInput::new(
        aircraft,
        conditions.target,
        conditions.weather,
        conditions.time,
    );
    let outcome = planner.assess(&mission)?;
    let recommendations = planner.recommendations(&mission, &outcome)?;
    render::mission_report(out, &AssessmentView::new(&mission, &outcome, recommendations))?;
    Ok(true)
}

fn compare<R: BufRead, W: Write>(
    planner: &MissionPlanner<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<bool, AppError> {
    render::comparison_header(out)?;
    let Some(conditions) = select_conditions(planner, input, out)? else {
        return Ok(false);
    };

    let rows = planner.compare(&conditions.target, &conditions.weather, &conditions.time)?;
    let target = planner.catalog().target(&conditions.target)?;
    render::comparison(out, &conditions, target, &rows)?;
    Ok(true)
}

fn select_aircraft<R: BufRead, W: Write>(
    planner: &MissionPlanner<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<String>> {
    let aircraft = planner.catalog().all_aircraft();
    writeln!(out, "\nAvailable Aircraft:")?;
    for (index, spec) in aircraft.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - Precision: {}%, Payload: {}, {}",
            index + 1,
            spec.id,
            spec.precision,
            spec.payload.label(),
            if spec.stealth { "Stealth" } else { "Non-stealth" }
        )?;
    }
    let picked = select_index(input, out, "Select aircraft", aircraft.len())?;
    Ok(picked.map(|index| aircraft[index].id.clone()))
}

fn select_conditions<R: BufRead, W: Write>(
    planner: &MissionPlanner<'_>,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<MissionConditions>> {
    let catalog = planner.catalog();

    let targets = catalog.all_targets();
    writeln!(out, "\nAvailable Targets:")?;
    for (index, spec) in targets.iter().enumerate() {
        writeln!(
            out,
            "{}. {} - Difficulty: {}/10, Civilian Risk: {}",
            index + 1,
            display_name(&spec.id),
            spec.difficulty,
            spec.civilian_risk
        )?;
    }
    let Some(target) = select_index(input, out, "Select target", targets.len())? else {
        return Ok(None);
    };

    let weather = catalog.all_weather();
    writeln!(out, "\nWeather Conditions:")?;
    for (index, spec) in weather.iter().enumerate() {
        let impact = match spec.precision_reduction_pct() {
            0 => "No impact".to_string(),
            pct => format!("{pct}% precision reduction"),
        };
        writeln!(out, "{}. {} - {}", index + 1, display_name(&spec.id), impact)?;
    }
    let Some(condition) = select_index(input, out, "Select weather", weather.len())? else {
        return Ok(None);
    };

    let times = catalog.all_times();
    writeln!(out, "\nTime of Day:")?;
    for (index, spec) in times.iter().enumerate() {
        let label = if spec.description.is_empty() {
            display_name(&spec.id)
        } else {
            spec.description.clone()
        };
        writeln!(out, "{}. {}", index + 1, label)?;
    }
    let Some(time) = select_index(input, out, "Select time", times.len())? else {
        return Ok(None);
    };

    Ok(Some(MissionConditions {
        target: targets[target].id.clone(),
        weather: weather[condition].id.clone(),
        time: times[time].id.clone(),
    }))
}

/// Zero-based index of a 1-based numbered choice, re-prompting until valid.
fn select_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    count: usize,
) -> io::Result<Option<usize>> {
    loop {
        write!(out, "\n{prompt} (number): ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(Some(choice - 1)),
            Ok(_) => writeln!(out, "Invalid choice. Please try again.")?,
            Err(_) => writeln!(out, "Please enter a valid number.")?,
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let planner = MissionPlanner::standard();
        let mut out = Vec::new();
        run(&planner, Cursor::new(script.as_bytes()), &mut out).expect("menu runs");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn assesses_a_selected_mission() {
        let text = session("1\n1\n1\n1\n1\n3\n");
        assert!(text.contains("1. B-2 - Precision: 98%, Payload: very_heavy, Stealth"));
        assert!(text.contains("1. Wooden House - Difficulty: 1/10, Civilian Risk: very_high"));
        assert!(text.contains("1. Clear - No impact"));
        assert!(text.contains("5. Storm - 50% precision reduction"));
        assert!(text.contains("OVERALL MISSION RATING: A-RANK"));
        assert!(text.ends_with("Mission planning complete. Stay safe out there.\n"));
    }

    #[test]
    fn reprompts_on_invalid_selections() {
        let text = session("7\n1\nzero\n42\n1\n1\n1\n1\n3\n");
        assert!(text.contains("Invalid choice. Please enter 1-3."));
        assert!(text.contains("Please enter a valid number."));
        assert!(text.contains("Invalid choice. Please try again."));
        assert!(text.contains("OVERALL MISSION RATING: A-RANK"));
    }

    #[test]
    fn compares_aircraft_for_selected_conditions() {
        let text = session("2\n7\n1\n5\n3\n");
        let header = text.find("=== AIRCRAFT COMPARISON ===").expect("header printed");
        let prompt = text.find("Available Targets:").expect("targets listed");
        assert!(header < prompt);
        assert_eq!(text.matches("=== AIRCRAFT COMPARISON ===").count(), 1);
        assert!(text.contains("Target: Warehouse"));
        assert!(text.lines().any(|line| line.starts_with("NGAD-X")));
    }

    #[test]
    fn end_of_input_exits_quietly() {
        let text = session("1\n2\n");
        assert!(text.contains("Available Targets:"));
        assert!(!text.contains("MISSION ASSESSMENT REPORT"));
    }
}
