use std::sync::Arc;

use teloxide::prelude::*;

use crate::bot::commands::{add, view};
use crate::bot::dialogue::{HandlerResult, TrainingDialogue, TrainingDraft};
use crate::bot::keyboards::{FINISH_CALLBACK, VIEW_CALLBACK_PREFIX, WORKOUT_CALLBACK_PREFIX};
use crate::database::connection::DatabaseManager;
use crate::services::program::ProgramService;

/// Workout picker presses while an /add session is in progress.
pub async fn workout_selection(
    bot: Bot,
    dialogue: TrainingDialogue,
    draft: TrainingDraft,
    q: CallbackQuery,
    program: Arc<ProgramService>,
    db: Arc<DatabaseManager>,
) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.clone() else {
        return Ok(());
    };
    tracing::info!("Workout selection callback: '{}' from user {}", data, q.from.id);

    if data == FINISH_CALLBACK {
        return add::finish_training(bot, dialogue, draft, q, db).await;
    }
    if let Some(name) = data.strip_prefix(WORKOUT_CALLBACK_PREFIX) {
        return add::begin_workout(bot, dialogue, draft, q, name, program).await;
    }
    Ok(())
}

/// Training picker presses from /view_training, valid in any state.
pub async fn view_selection(bot: Bot, q: CallbackQuery, db: Arc<DatabaseManager>) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(data) = q.data.clone() else {
        return Ok(());
    };
    if let Some(id) = data.strip_prefix(VIEW_CALLBACK_PREFIX) {
        return view::show_training(bot, q, id, db).await;
    }
    Ok(())
}
