//! Inline keyboards for workout selection and training lookup.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::database::models::Training;
use crate::services::reporting::{display_name, format_training_label};

pub const WORKOUT_CALLBACK_PREFIX: &str = "workout:";
pub const FINISH_CALLBACK: &str = "finish";
pub const VIEW_CALLBACK_PREFIX: &str = "view:";

/// One button per configured workout, plus a finish row.
pub fn workout_selection_keyboard(workout_names: &[&str]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = workout_names
        .iter()
        .map(|name| {
            vec![InlineKeyboardButton::callback(
                display_name(name),
                format!("{WORKOUT_CALLBACK_PREFIX}{name}"),
            )]
        })
        .collect();
    rows.push(vec![InlineKeyboardButton::callback(
        "🏁 Finish training",
        FINISH_CALLBACK,
    )]);
    InlineKeyboardMarkup::new(rows)
}

/// One button per stored training, labelled with its date and workouts.
/// Trainings without an object id are skipped.
pub fn training_selection_keyboard(trainings: &[Training]) -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = trainings
        .iter()
        .filter_map(|training| {
            let id = training.id?;
            Some(vec![InlineKeyboardButton::callback(
                format_training_label(training),
                format!("{VIEW_CALLBACK_PREFIX}{}", id.to_hex()),
            )])
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_keyboard_has_finish_row() {
        let keyboard = workout_selection_keyboard(&["upper", "lower"]);
        assert_eq!(keyboard.inline_keyboard.len(), 3);

        let finish_row = &keyboard.inline_keyboard[2];
        assert_eq!(finish_row[0].text, "🏁 Finish training");
    }

    #[test]
    fn test_workout_keyboard_callback_data() {
        let keyboard = workout_selection_keyboard(&["front_split"]);
        let button = &keyboard.inline_keyboard[0][0];
        assert_eq!(button.text, "Front Split");

        if let teloxide::types::InlineKeyboardButtonKind::CallbackData(data) = &button.kind {
            assert_eq!(data, "workout:front_split");
        } else {
            panic!("Expected a callback button");
        }
    }

    #[test]
    fn test_training_keyboard_skips_unsaved_trainings() {
        let training = Training {
            id: None,
            user_id: 1,
            date: chrono::Utc::now(),
            duration_minutes: 60,
            workouts: vec![],
        };
        let keyboard = training_selection_keyboard(&[training]);
        assert!(keyboard.inline_keyboard.is_empty());
    }
}
