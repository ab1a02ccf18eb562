pub mod home;
pub mod quizzer;
pub mod trainer;

use teloxide::{
    prelude::*,
    types::{KeyboardButton, KeyboardMarkup},
};

use crate::curriculum::sampler::SessionFilter;
use crate::guard::ViewGuards;
use crate::{AppDialogue, HandlerResult, State};

pub const HOME_BUTTON: &str = "🏠 Home";
pub const TRAINER_BUTTON: &str = "📘 Trainer";
pub const FLASHCARDS_BUTTON: &str = "🃏 Flashcards";
pub const QUIZ_BUTTON: &str = "📝 Quiz";
pub const LEVEL_BUTTON: &str = "🎚 Level";
pub const FOCUS_BUTTON: &str = "🗂 Focus";
pub const SIZE_BUTTON: &str = "🔢 Session size";
pub const EXPORT_BUTTON: &str = "📥 Export CSV";
pub const HELP_BUTTON: &str = "❓ Help";
pub const SHARE_BUTTON: &str = "✉️ Share via Gmail";

pub fn keyboard(rows: &[&[&str]]) -> KeyboardMarkup {
    KeyboardMarkup::new(
        rows.iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(*label)).collect::<Vec<_>>())
            .collect::<Vec<_>>(),
    )
}

pub fn home_keyboard() -> KeyboardMarkup {
    keyboard(&[
        &[TRAINER_BUTTON, FLASHCARDS_BUTTON, QUIZ_BUTTON],
        &[LEVEL_BUTTON, FOCUS_BUTTON, SIZE_BUTTON],
        &[EXPORT_BUTTON, HELP_BUTTON],
    ])
}

pub fn home_summary(filter: &SessionFilter) -> String {
    format!(
        "Level: {} ({})\nFocus: {}\nSession size: {} items\n\nWhat would you like to do?",
        filter.level,
        filter.level.description(),
        filter.category,
        filter.size.get()
    )
}

pub async fn show_home(bot: &Bot, chat_id: ChatId, filter: &SessionFilter) -> HandlerResult {
    bot.send_message(chat_id, home_summary(filter))
        .reply_markup(home_keyboard())
        .await?;
    Ok(())
}

pub fn is_home_request(msg: Message) -> bool {
    matches!(msg.text(), Some(HOME_BUTTON) | Some("/start") | Some("/home"))
}

/// Leaves whatever screen the chat is on, dropping in-flight AI replies.
pub async fn go_home(
    bot: Bot,
    dialogue: AppDialogue,
    guards: ViewGuards<ChatId>,
    msg: Message,
) -> HandlerResult {
    let filter = dialogue
        .get()
        .await?
        .map(|state| state.filter())
        .unwrap_or_default();

    let _section = guards.section(msg.chat.id).await;
    guards.leave(msg.chat.id);
    dialogue.update(State::Home { filter }).await?;
    show_home(&bot, msg.chat.id, &filter).await
}
