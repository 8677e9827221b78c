pub mod callback;
pub mod message;

use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateHandler},
    prelude::*,
};

use crate::bot::commands::{add, calendar, view, Command};
use crate::bot::dialogue::State;

/// Full update-handling tree. Commands are matched first, then free-form
/// messages are routed by dialogue state, then callback queries.
pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Help].endpoint(message::help))
        .branch(case![Command::Start].endpoint(message::start))
        .branch(case![Command::Add].endpoint(add::start_add))
        .branch(case![Command::Calendar].endpoint(calendar::handle_calendar))
        .branch(case![Command::ViewTraining].endpoint(view::handle_view_training))
        .branch(
            case![Command::Done]
                .branch(
                    case![State::AwaitingSets { draft, progress }]
                        .endpoint(add::finish_exercise_command),
                )
                .endpoint(message::not_logging),
        )
        .branch(
            case![Command::Repeat]
                .branch(
                    case![State::AwaitingSets { draft, progress }]
                        .endpoint(add::repeat_set_command),
                )
                .endpoint(message::not_logging),
        )
        .branch(case![Command::Cancel].endpoint(message::cancel));

    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(case![State::AwaitingDate { draft }].endpoint(add::receive_date))
        .branch(case![State::AwaitingDuration { draft }].endpoint(add::receive_duration))
        .branch(case![State::AwaitingRestTime { draft, progress }].endpoint(add::receive_rest_time))
        .branch(case![State::AwaitingSets { draft, progress }].endpoint(add::receive_set));

    let callback_handler = Update::filter_callback_query()
        .branch(case![State::SelectingWorkout { draft }].endpoint(callback::workout_selection))
        .branch(dptree::endpoint(callback::view_selection));

    dialogue::enter::<Update, InMemStorage<State>, State, _>()
        .branch(message_handler)
        .branch(callback_handler)
}
