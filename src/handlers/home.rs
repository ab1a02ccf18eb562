use teloxide::{
    prelude::*,
    types::{InputFile, ParseMode},
};

use super::*;
use crate::curriculum::export::{curriculum_to_csv, export_file_name};
use crate::curriculum::sampler::{SessionSize, MAX_SESSION_SIZE, MIN_SESSION_SIZE};
use crate::curriculum::{CategoryFilter, CefrLevel, Curriculum};
use crate::generator::Generator;

const GREETING_TEXT: &str = "Hi! I'm AffixMaster. I'll help you unlock English vocabulary by mastering its building blocks: prefixes, roots and suffixes.";

const HELP_TEXT: &str = "<b>Quick Help</b>

<b>Configuration:</b> use Level, Focus and Session size on the home screen to pick a CEFR level, a word category (e.g. roots only) and how many items to study.
<b>No Repetition:</b> each session shuffles unique items from the curriculum so you don't repeat the same words constantly.
<b>Trainer:</b> browse each word part with origin notes, examples and an AI-written fun fact.
<b>Flashcards:</b> flip through the same set to practise active recall.
<b>Quiz:</b> an AI-generated quiz at your level.
<b>Gmail Share:</b> in the Trainer and after a Quiz you can share your vocabulary list or results via Gmail.";

pub async fn start(bot: Bot, dialogue: AppDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, GREETING_TEXT).await?;

    let filter = SessionFilter::default();
    dialogue.update(State::Home { filter }).await?;
    show_home(&bot, msg.chat.id, &filter).await
}

pub async fn home(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    generator: Generator,
    guards: ViewGuards<ChatId>,
    curriculum: Curriculum,
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(TRAINER_BUTTON) => {
            super::trainer::start_browsing(bot, dialogue, filter, generator, guards, curriculum, msg.chat.id)
                .await
        }
        Some(FLASHCARDS_BUTTON) => {
            super::trainer::start_flashcards(bot, dialogue, filter, curriculum, msg.chat.id).await
        }
        Some(QUIZ_BUTTON) => {
            super::quizzer::start_quiz(bot, dialogue, filter, generator, guards, msg.chat.id).await
        }
        Some(LEVEL_BUTTON) => {
            let descriptions = CefrLevel::ALL
                .iter()
                .map(|level| format!("<b>{}</b>: {}", level, level.description()))
                .collect::<Vec<_>>()
                .join("\n");
            bot.send_message(
                msg.chat.id,
                format!(
                    "CEFR is an international standard for describing language ability. A1 is beginner, C2 is master.\n\n{}\n\nPick your level:",
                    descriptions
                ),
            )
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard(&[&["A1", "A2", "B1"], &["B2", "C1", "C2"]]))
            .await?;
            dialogue.update(State::ReceiveLevel { filter }).await?;
            Ok(())
        }
        Some(FOCUS_BUTTON) => {
            bot.send_message(msg.chat.id, "Which word parts do you want to focus on?")
                .reply_markup(keyboard(&[&["all", "prefix"], &["root", "suffix"]]))
                .await?;
            dialogue.update(State::ReceiveCategory { filter }).await?;
            Ok(())
        }
        Some(SIZE_BUTTON) => {
            bot.send_message(
                msg.chat.id,
                format!(
                    "How many items per session? Send a number from {} to {}.",
                    MIN_SESSION_SIZE, MAX_SESSION_SIZE
                ),
            )
            .reply_markup(keyboard(&[&["5", "10"], &["15", "20"]]))
            .await?;
            dialogue.update(State::ReceiveSize { filter }).await?;
            Ok(())
        }
        Some(EXPORT_BUTTON) => send_export(&bot, msg.chat.id, &filter, &curriculum).await,
        Some(HELP_BUTTON) => {
            bot.send_message(msg.chat.id, HELP_TEXT)
                .parse_mode(ParseMode::Html)
                .reply_markup(home_keyboard())
                .await?;
            Ok(())
        }
        _ => {
            bot.send_message(msg.chat.id, "Please choose one of the options")
                .reply_markup(home_keyboard())
                .await?;
            Ok(())
        }
    }
}

async fn send_export(
    bot: &Bot,
    chat_id: ChatId,
    filter: &SessionFilter,
    curriculum: &Curriculum,
) -> HandlerResult {
    let bytes = curriculum_to_csv(curriculum.parts())?;
    let file_name = export_file_name(filter.level);
    log::info!("Exporting curriculum as {} for chat {}", file_name, chat_id);

    bot.send_document(chat_id, InputFile::memory(bytes).file_name(file_name))
        .caption("The full AffixMaster curriculum")
        .reply_markup(home_keyboard())
        .await?;
    Ok(())
}

pub async fn receive_level(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    msg: Message,
) -> HandlerResult {
    let Some(level) = msg.text().and_then(|text| text.parse::<CefrLevel>().ok()) else {
        bot.send_message(msg.chat.id, "Please pick one of A1, A2, B1, B2, C1 or C2")
            .await?;
        return Ok(());
    };

    let filter = filter.with_level(level);
    dialogue.update(State::Home { filter }).await?;
    show_home(&bot, msg.chat.id, &filter).await
}

pub async fn receive_category(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    msg: Message,
) -> HandlerResult {
    let Some(category) = msg.text().and_then(|text| text.parse::<CategoryFilter>().ok()) else {
        bot.send_message(msg.chat.id, "Please pick all, prefix, root or suffix")
            .await?;
        return Ok(());
    };

    let filter = filter.with_category(category);
    dialogue.update(State::Home { filter }).await?;
    show_home(&bot, msg.chat.id, &filter).await
}

pub async fn receive_size(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    msg: Message,
) -> HandlerResult {
    let parsed = msg
        .text()
        .and_then(|text| text.trim().parse::<usize>().ok())
        .map(SessionSize::new);

    match parsed {
        Some(Ok(size)) => {
            let filter = filter.with_size(size);
            dialogue.update(State::Home { filter }).await?;
            show_home(&bot, msg.chat.id, &filter).await
        }
        Some(Err(err)) => {
            bot.send_message(msg.chat.id, format!("{}. Try again.", err))
                .await?;
            Ok(())
        }
        None => {
            bot.send_message(msg.chat.id, "Please send a number").await?;
            Ok(())
        }
    }
}
