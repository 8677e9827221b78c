use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use teloxide::prelude::*;
use teloxide::types::ParseMode;

use crate::bot::dialogue::HandlerResult;
use crate::database::connection::DatabaseManager;
use crate::database::models::Training;
use crate::services::reporting::render_activity_calendar;
use crate::utils::markdown::escape_markdown;

/// /calendar: the current month as a grid with training days marked.
pub async fn handle_calendar(bot: Bot, msg: Message, db: Arc<DatabaseManager>) -> HandlerResult {
    let Some(user) = msg.from() else {
        return Ok(());
    };
    let user_id = user.id.0 as i64;
    let now = Utc::now();

    let calendar = match Training::dates_for_month(&db.trainings, user_id, now.year(), now.month())
        .await
    {
        Ok(dates) => {
            let training_days: HashSet<u32> = dates.iter().map(|d| d.day()).collect();
            render_activity_calendar(now.year(), now.month(), &training_days)
        }
        Err(e) => Err(e),
    };

    match calendar {
        Ok(grid) => {
            let header = escape_markdown(&format!("🗓️ Activity for {}", now.format("%B %Y")));
            bot.send_message(msg.chat.id, format!("{header}\n```\n{grid}```"))
                .parse_mode(ParseMode::MarkdownV2)
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to build calendar for user {}: {}", user_id, e);
            bot.send_message(
                msg.chat.id,
                "Sorry, I couldn't generate your activity calendar right now.",
            )
            .await?;
        }
    }
    Ok(())
}
