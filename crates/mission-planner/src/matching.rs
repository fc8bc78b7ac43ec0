use crate::assessment::{MissionConditions, MissionInput};
use crate::catalog::{Catalog, EntryKind};

/// One or more raw selections that did not resolve against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .issues.join("; "))]
pub struct ValidationError {
    pub issues: Vec<String>,
}

/// Resolve free-form input to a catalog option: exact match ignoring case
/// first, then the first option (in the given order) starting with the input.
pub fn find_match<'a, I>(input: &str, options: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let options = options.into_iter();
    options
        .clone()
        .find(|option| option.to_lowercase() == needle)
        .or_else(|| {
            options
                .clone()
                .find(|option| option.to_lowercase().starts_with(&needle))
        })
}

/// Resolve the four raw mission selections, reporting every failure at once.
pub fn resolve_mission(
    catalog: &Catalog,
    aircraft: &str,
    target: &str,
    weather: &str,
    time: &str,
) -> Result<MissionInput, ValidationError> {
    let mut issues = Vec::new();
    let aircraft = resolve_field(catalog, EntryKind::Aircraft, aircraft, &mut issues);
    let target = resolve_field(catalog, EntryKind::Target, target, &mut issues);
    let weather = resolve_field(catalog, EntryKind::Weather, weather, &mut issues);
    let time = resolve_field(catalog, EntryKind::Time, time, &mut issues);

    match (aircraft, target, weather, time) {
        (Some(aircraft), Some(target), Some(weather), Some(time)) => {
            Ok(MissionInput::new(aircraft, target, weather, time))
        }
        _ => Err(ValidationError { issues }),
    }
}

/// Resolve target, weather, and time selections for comparisons.
pub fn resolve_conditions(
    catalog: &Catalog,
    target: &str,
    weather: &str,
    time: &str,
) -> Result<MissionConditions, ValidationError> {
    let mut issues = Vec::new();
    let target = resolve_field(catalog, EntryKind::Target, target, &mut issues);
    let weather = resolve_field(catalog, EntryKind::Weather, weather, &mut issues);
    let time = resolve_field(catalog, EntryKind::Time, time, &mut issues);

    match (target, weather, time) {
        (Some(target), Some(weather), Some(time)) => Ok(MissionConditions {
            target: target.to_string(),
            weather: weather.to_string(),
            time: time.to_string(),
        }),
        _ => Err(ValidationError { issues }),
    }
}

fn resolve_field<'c>(
    catalog: &'c Catalog,
    kind: EntryKind,
    raw: &str,
    issues: &mut Vec<String>,
) -> Option<&'c str> {
    let options = catalog.ids(kind);
    let resolved = find_match(raw, options.iter().copied());
    if resolved.is_none() {
        issues.push(format!(
            "{} '{}' not found. Available: [{}]",
            field_label(kind),
            raw,
            options.join(", ")
        ));
    }
    resolved
}

fn field_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Aircraft => "Aircraft",
        EntryKind::Target => "Target",
        EntryKind::Weather => "Weather",
        EntryKind::Time => "Time",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case() {
        let options = ["B-2", "A-10", "AC-130"];
        assert_eq!(find_match("b-2", options), Some("B-2"));
        assert_eq!(find_match("ac-130", options), Some("AC-130"));
    }

    #[test]
    fn exact_match_beats_prefix_match() {
        let options = ["AC-130", "A-10", "A"];
        assert_eq!(find_match("a", options), Some("A"));
    }

    #[test]
    fn prefix_match_takes_first_in_order() {
        let options = ["early_morning", "morning", "evening"];
        assert_eq!(find_match("e", options), Some("early_morning"));
        assert_eq!(find_match("mor", options), Some("morning"));
    }

    #[test]
    fn blank_and_unknown_inputs_do_not_match() {
        let options = ["clear", "fog"];
        assert_eq!(find_match("", options), None);
        assert_eq!(find_match("sunny", options), None);
    }

    #[test]
    fn resolves_mixed_case_and_prefix_input() {
        let input = resolve_mission(Catalog::standard(), "f-35a", "MILITARY", "Light", "NIGHT")
            .expect("resolves");
        assert_eq!(
            input,
            MissionInput::new("F-35A", "military_base", "light_rain", "night")
        );
    }

    #[test]
    fn reports_every_invalid_field() {
        let err = resolve_mission(Catalog::standard(), "X-99", "bridge", "hail", "noon")
            .expect_err("invalid selections");
        assert_eq!(err.issues.len(), 3);
        assert!(err.issues[0].starts_with("Aircraft 'X-99' not found. Available: [B-2, A-10"));
        assert!(err.issues[1].starts_with("Weather 'hail'"));
        assert!(err.issues[2].starts_with("Time 'noon'"));
    }

    #[test]
    fn resolves_conditions_without_aircraft() {
        let conditions =
            resolve_conditions(Catalog::standard(), "nuc", "storm", "after").expect("resolves");
        assert_eq!(conditions.target, "nuclear_facility");
        assert_eq!(conditions.time, "afternoon");
    }
}
