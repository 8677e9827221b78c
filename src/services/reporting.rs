//! Pure formatting for the reporting commands: the month activity grid,
//! training summaries, and keyboard labels. Everything here returns plain
//! strings so it can be tested without a bot or a database.

use std::collections::HashSet;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use crate::database::models::{Metric, Training};
use crate::utils::datetime::{days_in_month, format_date};
use crate::utils::markdown::escape_markdown;

/// Marker used for a day with at least one logged training.
const TRAINING_DAY_MARK: &str = " ■";

/// Human display form for snake_case workout and exercise names.
pub fn display_name(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format hint shown when prompting for sets, e.g. `reps weight(kg)`.
pub fn metric_format_hint(metrics: &[Metric]) -> String {
    metrics
        .iter()
        .map(|m| {
            if m.unit().is_empty() {
                m.name().to_string()
            } else {
                format!("{}({})", m.name(), m.unit())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders a value without a trailing `.0` for whole numbers.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Button label for a stored training: `2024-03-15 - [upper, lower]`.
pub fn format_training_label(training: &Training) -> String {
    let workout_names = training
        .workouts
        .iter()
        .map(|w| w.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} - [{}]", format_date(&training.date), workout_names)
}

/// Monday-first month grid with training days replaced by a marker.
/// The caller wraps the grid in a code block to keep columns aligned.
pub fn render_activity_calendar(
    year: i32,
    month: u32,
    training_days: &HashSet<u32>,
) -> Result<String> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month: {year}-{month}"))?;
    let days = days_in_month(year, month)?;
    let offset = first.weekday().num_days_from_monday();

    let mut grid = String::from("Mo Tu We Th Fr Sa Su\n");
    let mut column = 0;
    for _ in 0..offset {
        grid.push_str("  ");
        grid.push(' ');
        column += 1;
    }

    for day in 1..=days {
        if training_days.contains(&day) {
            grid.push_str(TRAINING_DAY_MARK);
        } else {
            grid.push_str(&format!("{day:>2}"));
        }
        column += 1;
        if column == 7 {
            grid.push('\n');
            column = 0;
        } else {
            grid.push(' ');
        }
    }
    if column != 0 {
        // Drop the trailing cell separator on a partial last row.
        grid.pop();
        grid.push('\n');
    }
    Ok(grid)
}

/// Detailed MarkdownV2 summary of one training document.
pub fn format_training_summary(training: &Training) -> String {
    let mut summary = format!(
        "*Training on {}*\n",
        escape_markdown(&format_date(&training.date))
    );
    summary.push_str(&format!("Duration: {} minutes\n\n", training.duration_minutes));

    for workout in &training.workouts {
        let completed_mark = if workout.completed { "✅" } else { "❌" };
        summary.push_str(&format!(
            "*{}* {}\n",
            escape_markdown(&display_name(&workout.name)),
            completed_mark
        ));

        if workout.exercises.is_empty() {
            summary.push_str("  _\\(no exercises logged\\)_\n");
        }

        for exercise in &workout.exercises {
            summary.push_str(&format!(
                "  \\- *{}*",
                escape_markdown(&display_name(&exercise.name))
            ));
            if let Some(rest) = exercise.rest_time_seconds {
                summary.push_str(&format!(" \\(rest {rest}s\\)"));
            }
            summary.push('\n');

            for (i, set) in exercise.sets.iter().enumerate() {
                let values = set
                    .metrics
                    .iter()
                    .map(|(metric, value)| {
                        format!("{} {}{}", metric.name(), format_value(*value), metric.unit())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                summary.push_str(&format!(
                    "    set {}: {}\n",
                    i + 1,
                    escape_markdown(&values)
                ));
            }
        }
        summary.push('\n');
    }

    summary
}
