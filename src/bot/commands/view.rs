use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::dialogue::HandlerResult;
use crate::bot::keyboards::training_selection_keyboard;
use crate::database::connection::DatabaseManager;
use crate::database::models::Training;
use crate::services::reporting::format_training_summary;

/// How many recent sessions the picker offers.
const RECENT_TRAININGS: i64 = 4;

/// /view_training: list the most recent sessions as buttons.
pub async fn handle_view_training(
    bot: Bot,
    msg: Message,
    db: Arc<DatabaseManager>,
) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;

    match Training::find_last_n(&db.trainings, user_id, RECENT_TRAININGS).await {
        Ok(trainings) if trainings.is_empty() => {
            bot.send_message(msg.chat.id, "You haven't logged any trainings yet!")
                .await?;
        }
        Ok(trainings) => {
            bot.send_message(msg.chat.id, "Which training session would you like to view?")
                .reply_markup(training_selection_keyboard(&trainings))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to list trainings for user {}: {}", user_id, e);
            bot.send_message(
                msg.chat.id,
                "Sorry, I couldn't load your trainings right now.",
            )
            .await?;
        }
    }
    Ok(())
}

/// Picker callback: replace the prompt with the full summary.
pub async fn show_training(
    bot: Bot,
    q: CallbackQuery,
    id: &str,
    db: Arc<DatabaseManager>,
) -> HandlerResult {
    let Some(msg) = q.message else {
        return Ok(());
    };

    let training = match ObjectId::parse_str(id) {
        Ok(oid) => match Training::find_by_id(&db.trainings, oid).await {
            Ok(training) => training,
            Err(e) => {
                tracing::error!("Failed to load training {}: {}", id, e);
                None
            }
        },
        Err(_) => None,
    };

    match training {
        Some(training) => {
            bot.edit_message_text(msg.chat.id, msg.id, format_training_summary(&training))
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        None => {
            bot.edit_message_text(
                msg.chat.id,
                msg.id,
                "Sorry, I couldn't find that training session.",
            )
            .await?;
        }
    }
    Ok(())
}
