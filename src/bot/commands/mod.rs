use teloxide::utils::command::BotCommands;

pub mod add;
pub mod calendar;
pub mod view;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "snake_case", description = "Workout log commands:")]
pub enum Command {
    #[command(description = "show this help message")]
    Help,
    #[command(description = "start the bot")]
    Start,
    #[command(description = "log a new training session")]
    Add,
    #[command(description = "show this month's activity calendar")]
    Calendar,
    #[command(description = "view a recent training session")]
    ViewTraining,
    #[command(description = "finish the current exercise")]
    Done,
    #[command(description = "repeat the previous set")]
    Repeat,
    #[command(description = "cancel the current logging session")]
    Cancel,
}
