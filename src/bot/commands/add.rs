//! The /add conversation: date, duration, then a loop of workouts, each
//! a loop of exercises with optional rest time and free-form set entry.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::dialogue::{
    HandlerResult, State, TrainingDialogue, TrainingDraft, WorkoutProgress,
};
use crate::bot::keyboards::workout_selection_keyboard;
use crate::database::connection::DatabaseManager;
use crate::services::parser::{parse_set_input, ParsedInput};
use crate::services::program::ProgramService;
use crate::services::reporting::{display_name, metric_format_hint};
use crate::utils::datetime::parse_training_date;
use crate::utils::markdown::escape_markdown;
use crate::utils::validation::{validate_duration_minutes, validate_rest_seconds};

pub async fn start_add(bot: Bot, dialogue: TrainingDialogue, msg: Message) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;
    tracing::info!("User {} started logging a training", user_id);

    bot.send_message(
        msg.chat.id,
        "Let's log a new training session!\n\
         What was the date of the training? (YYYY-MM-DD or 'today')",
    )
    .await?;
    dialogue
        .update(State::AwaitingDate {
            draft: TrainingDraft::new(user_id),
        })
        .await?;
    Ok(())
}

pub async fn receive_date(
    bot: Bot,
    dialogue: TrainingDialogue,
    mut draft: TrainingDraft,
    msg: Message,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();
    match parse_training_date(text) {
        Ok(date) => {
            draft.date = date;
            bot.send_message(msg.chat.id, "How long was the training, in minutes?")
                .await?;
            dialogue.update(State::AwaitingDuration { draft }).await?;
        }
        Err(e) => {
            tracing::warn!("Rejected training date '{}': {}", text, e);
            bot.send_message(
                msg.chat.id,
                "That doesn't look like a valid date. Use YYYY-MM-DD or 'today'.",
            )
            .await?;
        }
    }
    Ok(())
}

pub async fn receive_duration(
    bot: Bot,
    dialogue: TrainingDialogue,
    mut draft: TrainingDraft,
    msg: Message,
    program: Arc<ProgramService>,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();
    match validate_duration_minutes(text) {
        Ok(minutes) => {
            draft.duration_minutes = minutes;
            prompt_workout_selection(&bot, msg.chat.id, &draft, &program).await?;
            dialogue.update(State::SelectingWorkout { draft }).await?;
        }
        Err(e) => {
            bot.send_message(msg.chat.id, e.to_string()).await?;
        }
    }
    Ok(())
}

async fn prompt_workout_selection(
    bot: &Bot,
    chat_id: ChatId,
    draft: &TrainingDraft,
    program: &ProgramService,
) -> HandlerResult {
    let text = if draft.workouts.is_empty() {
        "Which workout did you do?"
    } else {
        "Add another workout, or finish logging."
    };
    bot.send_message(chat_id, text)
        .reply_markup(workout_selection_keyboard(&program.workout_names()))
        .await?;
    Ok(())
}

/// Entered from the workout picker callback.
pub async fn begin_workout(
    bot: Bot,
    dialogue: TrainingDialogue,
    draft: TrainingDraft,
    q: CallbackQuery,
    name: &str,
    program: Arc<ProgramService>,
) -> HandlerResult {
    let Some(msg) = q.message else {
        return Ok(());
    };

    let Some(progress) = program
        .workout(name)
        .cloned()
        .and_then(WorkoutProgress::new)
    else {
        bot.edit_message_text(
            msg.chat.id,
            msg.id,
            format!("Workout '{}' has no exercises configured.", display_name(name)),
        )
        .await?;
        return Ok(());
    };

    bot.edit_message_text(
        msg.chat.id,
        msg.id,
        format!(
            "Let's log the exercises for {}.",
            display_name(&progress.workout.name)
        ),
    )
    .await?;

    ask_exercise(bot, dialogue, draft, msg.chat.id, progress).await
}

/// Prompts for the current exercise: rest time first when the exercise
/// tracks it, otherwise straight to set entry.
async fn ask_exercise(
    bot: Bot,
    dialogue: TrainingDialogue,
    draft: TrainingDraft,
    chat_id: ChatId,
    progress: WorkoutProgress,
) -> HandlerResult {
    let Some(exercise) = progress.current_config() else {
        return Ok(());
    };

    if exercise.track_rest {
        bot.send_message(
            chat_id,
            format!(
                "Rest time between sets of {} (in seconds)?",
                display_name(&exercise.name)
            ),
        )
        .await?;
        dialogue
            .update(State::AwaitingRestTime { draft, progress })
            .await?;
    } else {
        send_sets_prompt(&bot, chat_id, &progress).await?;
        dialogue
            .update(State::AwaitingSets { draft, progress })
            .await?;
    }
    Ok(())
}

async fn send_sets_prompt(bot: &Bot, chat_id: ChatId, progress: &WorkoutProgress) -> HandlerResult {
    let Some(exercise) = progress.current_config() else {
        return Ok(());
    };
    bot.send_message(
        chat_id,
        format!(
            "Enter sets for *{}*\\.\nFormat: `{}`\n\
             Use /repeat for the same set, and /done when finished\\.",
            escape_markdown(&display_name(&exercise.name)),
            metric_format_hint(&exercise.metrics)
        ),
    )
    .parse_mode(ParseMode::MarkdownV2)
    .await?;
    Ok(())
}

pub async fn receive_rest_time(
    bot: Bot,
    dialogue: TrainingDialogue,
    (draft, mut progress): (TrainingDraft, WorkoutProgress),
    msg: Message,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();
    match validate_rest_seconds(text) {
        Ok(seconds) => {
            progress.current.rest_time_seconds = Some(seconds);
            send_sets_prompt(&bot, msg.chat.id, &progress).await?;
            dialogue
                .update(State::AwaitingSets { draft, progress })
                .await?;
        }
        Err(e) => {
            bot.send_message(msg.chat.id, e.to_string()).await?;
        }
    }
    Ok(())
}

pub async fn receive_set(
    bot: Bot,
    dialogue: TrainingDialogue,
    (draft, mut progress): (TrainingDraft, WorkoutProgress),
    msg: Message,
    program: Arc<ProgramService>,
) -> HandlerResult {
    let text = msg.text().unwrap_or_default();
    let Some(exercise) = progress.current_config() else {
        return Ok(());
    };

    match parse_set_input(text, &exercise.metrics) {
        Ok(ParsedInput::Set(set)) => {
            let count = progress.log_set(set);
            bot.send_message(
                msg.chat.id,
                format!("Set {count} logged. Next set, /repeat or /done."),
            )
            .await?;
            dialogue
                .update(State::AwaitingSets { draft, progress })
                .await?;
        }
        Ok(ParsedInput::Repeat) => {
            repeat_set(bot, dialogue, draft, msg.chat.id, progress).await?;
        }
        Ok(ParsedInput::Done) => {
            advance_exercise(bot, dialogue, draft, msg.chat.id, progress, program).await?;
        }
        Err(e) => {
            bot.send_message(msg.chat.id, e).await?;
        }
    }
    Ok(())
}

async fn repeat_set(
    bot: Bot,
    dialogue: TrainingDialogue,
    draft: TrainingDraft,
    chat_id: ChatId,
    mut progress: WorkoutProgress,
) -> HandlerResult {
    match progress.repeat_last() {
        Some(count) => {
            bot.send_message(
                chat_id,
                format!("Set {count} (repeated) logged. Next set, /repeat or /done."),
            )
            .await?;
        }
        None => {
            bot.send_message(chat_id, "There's no previous set to repeat.")
                .await?;
        }
    }
    dialogue
        .update(State::AwaitingSets { draft, progress })
        .await?;
    Ok(())
}

/// Closes the current exercise and moves on, or returns to the workout
/// picker when the workout has no exercises left.
async fn advance_exercise(
    bot: Bot,
    dialogue: TrainingDialogue,
    mut draft: TrainingDraft,
    chat_id: ChatId,
    mut progress: WorkoutProgress,
    program: Arc<ProgramService>,
) -> HandlerResult {
    if progress.advance() {
        ask_exercise(bot, dialogue, draft, chat_id, progress).await
    } else {
        bot.send_message(
            chat_id,
            format!("{} logged!", display_name(&progress.workout.name)),
        )
        .await?;
        draft.workouts.push(progress.into_workout());
        prompt_workout_selection(&bot, chat_id, &draft, &program).await?;
        dialogue.update(State::SelectingWorkout { draft }).await?;
        Ok(())
    }
}

pub async fn finish_exercise_command(
    bot: Bot,
    dialogue: TrainingDialogue,
    (draft, progress): (TrainingDraft, WorkoutProgress),
    msg: Message,
    program: Arc<ProgramService>,
) -> HandlerResult {
    advance_exercise(bot, dialogue, draft, msg.chat.id, progress, program).await
}

pub async fn repeat_set_command(
    bot: Bot,
    dialogue: TrainingDialogue,
    (draft, progress): (TrainingDraft, WorkoutProgress),
    msg: Message,
) -> HandlerResult {
    repeat_set(bot, dialogue, draft, msg.chat.id, progress).await
}

/// Entered from the finish button on the workout picker.
pub async fn finish_training(
    bot: Bot,
    dialogue: TrainingDialogue,
    draft: TrainingDraft,
    q: CallbackQuery,
    db: Arc<DatabaseManager>,
) -> HandlerResult {
    let Some(msg) = q.message else {
        return Ok(());
    };

    if !draft.has_workouts() {
        bot.edit_message_text(
            msg.chat.id,
            msg.id,
            "You haven't added any workouts yet. Add at least one or /cancel.",
        )
        .await?;
        return Ok(());
    }

    bot.edit_message_text(msg.chat.id, msg.id, "Saving your training session...")
        .await?;

    let user_id = draft.user_id;
    let training = draft.into_training();
    match training.insert(&db.trainings).await {
        Ok(id) => {
            tracing::info!("Saved training {} for user {}", id, user_id);
            bot.send_message(msg.chat.id, "Great job! 💪 Training session saved.")
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to save training for user {}: {}", user_id, e);
            bot.send_message(
                msg.chat.id,
                "Something went wrong while saving. Please try again later.",
            )
            .await?;
        }
    }
    dialogue.exit().await?;
    Ok(())
}
