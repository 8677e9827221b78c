use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::Command;
use crate::bot::dialogue::{HandlerResult, TrainingDialogue};

pub async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

pub async fn start(bot: Bot, msg: Message) -> HandlerResult {
    let welcome = "🏋️ Welcome to Gym Log Bot!\n\n\
        Use /add to log a training session, /calendar to see your \
        activity this month, and /view_training to look at recent \
        sessions.\n\nUse /help to see all commands.";
    bot.send_message(msg.chat.id, welcome).await?;
    Ok(())
}

pub async fn cancel(bot: Bot, dialogue: TrainingDialogue, msg: Message) -> HandlerResult {
    tracing::info!("Logging session cancelled in chat {}", msg.chat.id);
    dialogue.exit().await?;
    bot.send_message(msg.chat.id, "Logging cancelled. See you next time!")
        .await?;
    Ok(())
}

/// /done and /repeat outside the set-entry state.
pub async fn not_logging(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "That command only works while logging sets. Use /add to start a session.",
    )
    .await?;
    Ok(())
}
