use std::collections::{BTreeMap, HashSet};

use gym_log_bot::database::models::{
    ExerciseEntry, Metric, SetEntry, Training, WorkoutEntry,
};
use gym_log_bot::services::reporting::*;

fn sample_training() -> Training {
    let mut set = SetEntry::default();
    set.metrics.insert(Metric::Reps, 5.0);
    set.metrics.insert(Metric::Weight, 22.5);

    let mut exercise = ExerciseEntry::new("pullup");
    exercise.rest_time_seconds = Some(90);
    exercise.sets.push(set);

    let mut workout = WorkoutEntry::new("pull");
    workout.exercises.push(exercise);

    Training {
        id: None,
        user_id: 42,
        date: gym_log_bot::utils::datetime::parse_training_date("2024-03-15").unwrap(),
        duration_minutes: 60,
        workouts: vec![workout],
    }
}

#[cfg(test)]
mod reporting_tests {
    use super::*;

    #[test]
    fn test_display_name_titlecases_snake_case() {
        assert_eq!(display_name("wide_split_squat"), "Wide Split Squat");
        assert_eq!(display_name("pullup"), "Pullup");
        assert_eq!(display_name("lower"), "Lower");
    }

    #[test]
    fn test_metric_format_hint() {
        assert_eq!(
            metric_format_hint(&[Metric::Reps, Metric::Weight]),
            "reps weight(kg)"
        );
        assert_eq!(metric_format_hint(&[Metric::Time]), "time(s)");
        assert_eq!(
            metric_format_hint(&[Metric::Reps, Metric::Thigh2Floor]),
            "reps thigh2floor(cm)"
        );
    }

    #[test]
    fn test_format_value_drops_trailing_zero() {
        assert_eq!(format_value(5.0), "5");
        assert_eq!(format_value(22.5), "22.5");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn test_training_label() {
        let training = sample_training();
        assert_eq!(format_training_label(&training), "2024-03-15 - [pull]");
    }

    #[test]
    fn test_calendar_header_and_offset() {
        // March 2024 starts on a Friday, so the first row has 4 blanks.
        let grid = render_activity_calendar(2024, 3, &HashSet::new()).unwrap();
        let mut lines = grid.lines();
        assert_eq!(lines.next(), Some("Mo Tu We Th Fr Sa Su"));
        let first_row = lines.next().unwrap();
        assert!(first_row.ends_with(" 1  2  3"));
    }

    #[test]
    fn test_calendar_marks_training_days() {
        let days: HashSet<u32> = [15, 16].into_iter().collect();
        let grid = render_activity_calendar(2024, 3, &days).unwrap();
        assert!(grid.contains('■'));
        assert!(!grid.contains("15"));
        assert!(!grid.contains("16"));
        // Unmarked days still render as numbers
        assert!(grid.contains("14"));
    }

    #[test]
    fn test_calendar_row_width() {
        let grid = render_activity_calendar(2024, 3, &HashSet::new()).unwrap();
        for line in grid.lines() {
            assert!(
                line.chars().count() <= 20,
                "Row too wide: {:?}",
                line
            );
        }
    }

    #[test]
    fn test_calendar_rejects_invalid_month() {
        assert!(render_activity_calendar(2024, 13, &HashSet::new()).is_err());
    }

    #[test]
    fn test_training_summary_contents() {
        let summary = format_training_summary(&sample_training());
        assert!(summary.contains("*Training on 2024\\-03\\-15*"));
        assert!(summary.contains("Duration: 60 minutes"));
        assert!(summary.contains("*Pull* ✅"));
        assert!(summary.contains("*Pullup*"));
        assert!(summary.contains("\\(rest 90s\\)"));
        assert!(summary.contains("set 1: reps 5, weight 22\\.5kg"));
    }

    #[test]
    fn test_training_summary_empty_workout() {
        let mut training = sample_training();
        training.workouts = vec![WorkoutEntry::new("home")];
        let summary = format_training_summary(&training);
        assert!(summary.contains("no exercises logged"));
    }

    #[test]
    fn test_training_summary_incomplete_workout_mark() {
        let mut training = sample_training();
        training.workouts[0].completed = false;
        let summary = format_training_summary(&training);
        assert!(summary.contains("*Pull* ❌"));
    }

    #[test]
    fn test_metric_set_ordering_is_stable() {
        // BTreeMap keys iterate in Metric declaration order
        let mut metrics = BTreeMap::new();
        metrics.insert(Metric::Weight, 20.0);
        metrics.insert(Metric::Reps, 5.0);
        let keys: Vec<Metric> = metrics.keys().copied().collect();
        assert_eq!(keys, vec![Metric::Reps, Metric::Weight]);
    }
}
