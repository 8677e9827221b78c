use crate::database::models::{Metric, SetEntry};

/// Outcome of parsing one message in the set-entry state.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedInput {
    /// A complete set, one value per expected metric.
    Set(SetEntry),
    /// Finish the current exercise.
    Done,
    /// Log the previous set again.
    Repeat,
}

/// Parses a set-entry message against the metrics the current exercise
/// tracks. Errors are user-facing and name the expected metrics.
pub fn parse_set_input(text: &str, expected: &[Metric]) -> Result<ParsedInput, String> {
    let clean = text.trim().to_lowercase();

    // Word aliases for the control commands, kept for one-handed phone use.
    match clean.as_str() {
        "done" | "d" | "/done" => return Ok(ParsedInput::Done),
        "repeat" | "r" | "s" | "same" | "/repeat" => return Ok(ParsedInput::Repeat),
        _ => {}
    }

    let parts: Vec<&str> = clean
        .split([' ', ',', '\t'])
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != expected.len() {
        return Err(format!(
            "Invalid input. Expected {} values for ({}), but got {}.",
            expected.len(),
            metric_list(expected),
            parts.len()
        ));
    }

    let mut set = SetEntry::default();
    for (metric, part) in expected.iter().zip(parts) {
        let value: f64 = part.parse().map_err(|_| {
            format!(
                "Invalid value '{part}'. Please enter numbers for ({}).",
                metric_list(expected)
            )
        })?;
        set.metrics.insert(*metric, value);
    }
    Ok(ParsedInput::Set(set))
}

fn metric_list(metrics: &[Metric]) -> String {
    metrics
        .iter()
        .map(|m| m.name())
        .collect::<Vec<_>>()
        .join(", ")
}
