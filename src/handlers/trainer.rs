use teloxide::{prelude::*, types::ParseMode, utils::html::escape};

use super::*;
use crate::curriculum::sampler::sample;
use crate::curriculum::{Curriculum, WordPart};
use crate::generator::Generator;
use crate::share;
use crate::trainer::{self as deck_view, Deck};

const BROWSE_BUTTON: &str = "📖 Browse";
const EXAMPLES_BUTTON: &str = "👁 Toggle examples";
const PREV_BUTTON: &str = "⬅️ Prev";
const FLIP_BUTTON: &str = "🔄 Flip";
const NEXT_BUTTON: &str = "➡️ Next";

fn browse_keyboard(deck: &Deck, curriculum: &Curriculum) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = deck
        .parts(curriculum)
        .chunks(3)
        .map(|chunk| chunk.iter().map(|p| KeyboardButton::new(p.value)).collect())
        .collect();
    rows.push(vec![
        KeyboardButton::new(FLASHCARDS_BUTTON),
        KeyboardButton::new(EXAMPLES_BUTTON),
    ]);
    rows.push(vec![
        KeyboardButton::new(SHARE_BUTTON),
        KeyboardButton::new(HOME_BUTTON),
    ]);
    KeyboardMarkup::new(rows)
}

fn flashcard_keyboard() -> KeyboardMarkup {
    keyboard(&[
        &[PREV_BUTTON, FLIP_BUTTON, NEXT_BUTTON],
        &[BROWSE_BUTTON, SHARE_BUTTON, HOME_BUTTON],
    ])
}

/// Samples a fresh deck, or tells the learner nothing matches.
async fn sample_deck(
    bot: &Bot,
    chat_id: ChatId,
    filter: &SessionFilter,
    curriculum: &Curriculum,
) -> Result<Option<Deck>, crate::HandlerError> {
    let picked = sample(curriculum.parts(), filter);
    match Deck::new(&picked) {
        Some(deck) => {
            log::info!(
                "Chat {} studying {} items ({} / {})",
                chat_id,
                deck.len(),
                filter.level,
                filter.category
            );
            Ok(Some(deck))
        }
        None => {
            bot.send_message(
                chat_id,
                format!(
                    "No {} found for level {}. Try another focus or level.",
                    filter.category.plural(),
                    filter.level
                ),
            )
            .reply_markup(home_keyboard())
            .await?;
            Ok(None)
        }
    }
}

pub async fn start_browsing(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    generator: Generator,
    guards: ViewGuards<ChatId>,
    curriculum: Curriculum,
    chat_id: ChatId,
) -> HandlerResult {
    let Some(deck) = sample_deck(&bot, chat_id, &filter, &curriculum).await? else {
        return Ok(());
    };

    bot.send_message(
        chat_id,
        format!(
            "Level {} · {} word parts. Tap one to study it.",
            filter.level,
            deck.len()
        ),
    )
    .reply_markup(browse_keyboard(&deck, &curriculum))
    .await?;

    show_part(&bot, chat_id, &deck, &generator, &guards, &curriculum).await?;
    dialogue.update(State::Browsing { filter, deck }).await?;
    Ok(())
}

pub async fn start_flashcards(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    curriculum: Curriculum,
    chat_id: ChatId,
) -> HandlerResult {
    let Some(deck) = sample_deck(&bot, chat_id, &filter, &curriculum).await? else {
        return Ok(());
    };

    show_card(&bot, chat_id, &deck, &curriculum).await?;
    dialogue.update(State::Flashcards { filter, deck }).await?;
    Ok(())
}

/// Detail card for the selected item, followed later by AI trivia.
async fn show_part(
    bot: &Bot,
    chat_id: ChatId,
    deck: &Deck,
    generator: &Generator,
    guards: &ViewGuards<ChatId>,
    curriculum: &Curriculum,
) -> HandlerResult {
    let Some(part) = deck.current(curriculum) else {
        return Ok(());
    };

    bot.send_message(chat_id, deck_view::describe(part, deck.shows_examples()))
        .parse_mode(ParseMode::Html)
        .await?;

    spawn_trivia_lookup(bot.clone(), chat_id, part, generator.clone(), guards.clone());
    Ok(())
}

/// Fetches AI trivia in the background. The reply is dropped if the learner
/// picked another item or left the trainer in the meantime.
fn spawn_trivia_lookup(
    bot: Bot,
    chat_id: ChatId,
    part: &'static WordPart,
    generator: Generator,
    guards: ViewGuards<ChatId>,
) {
    let ticket = guards.trivia.begin(chat_id);

    tokio::spawn(async move {
        let trivia = generator.generate_word_trivia(part.value).await;

        let _section = guards.section(ticket.key()).await;
        if !guards.trivia.is_current(&ticket) {
            log::warn!(
                "Discarding stale trivia for {} in chat {}",
                part.value,
                ticket.key()
            );
            return;
        }

        let text = format!(
            "✨ <b>AI notes on {}</b>\n\n📜 {}\n💡 {}",
            escape(part.value),
            escape(&trivia.origin),
            escape(&trivia.trivia)
        );
        if let Err(err) = bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::Html)
            .await
        {
            log::error!("Failed to send trivia to chat {}: {}", chat_id, err);
        }
    });
}

async fn show_card(bot: &Bot, chat_id: ChatId, deck: &Deck, curriculum: &Curriculum) -> HandlerResult {
    let Some(part) = deck.current(curriculum) else {
        return Ok(());
    };

    let face = if deck.is_flipped() {
        deck_view::flashcard_back(part)
    } else {
        deck_view::flashcard_front(part)
    };
    bot.send_message(
        chat_id,
        format!("{}\n\nCard {} / {}", face, deck.index() + 1, deck.len()),
    )
    .parse_mode(ParseMode::Html)
    .reply_markup(flashcard_keyboard())
    .await?;
    Ok(())
}

async fn send_summary(
    bot: &Bot,
    chat_id: ChatId,
    filter: &SessionFilter,
    deck: &Deck,
    curriculum: &Curriculum,
) -> HandlerResult {
    let draft = share::session_summary(filter.level, &deck.parts(curriculum));
    bot.send_message(
        chat_id,
        format!("Open this link to email your session summary:\n{}", draft.compose_link()),
    )
    .await?;
    Ok(())
}

pub async fn browsing(
    bot: Bot,
    dialogue: AppDialogue,
    (filter, deck): (SessionFilter, Deck),
    generator: Generator,
    guards: ViewGuards<ChatId>,
    curriculum: Curriculum,
    msg: Message,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    match msg.text() {
        Some(FLASHCARDS_BUTTON) => {
            {
                let _section = guards.section(chat_id).await;
                guards.trivia.invalidate(chat_id);
            }
            let deck = deck.flip_down();
            show_card(&bot, chat_id, &deck, &curriculum).await?;
            dialogue.update(State::Flashcards { filter, deck }).await?;
        }
        Some(EXAMPLES_BUTTON) => {
            let deck = deck.toggle_examples();
            let Some(part) = deck.current(&curriculum) else {
                return Ok(());
            };
            bot.send_message(chat_id, deck_view::describe(part, deck.shows_examples()))
                .parse_mode(ParseMode::Html)
                .await?;
            dialogue.update(State::Browsing { filter, deck }).await?;
        }
        Some(SHARE_BUTTON) => send_summary(&bot, chat_id, &filter, &deck, &curriculum).await?,
        Some(text) => match curriculum
            .find_by_value(text)
            .filter(|part| deck.ids().contains(&part.id))
        {
            Some(part) => {
                let deck = deck.select(part.id);
                show_part(&bot, chat_id, &deck, &generator, &guards, &curriculum).await?;
                dialogue.update(State::Browsing { filter, deck }).await?;
            }
            None => {
                bot.send_message(chat_id, "Tap one of the word parts below")
                    .reply_markup(browse_keyboard(&deck, &curriculum))
                    .await?;
            }
        },
        None => {
            bot.send_message(chat_id, "Tap one of the word parts below")
                .reply_markup(browse_keyboard(&deck, &curriculum))
                .await?;
        }
    }
    Ok(())
}

pub async fn flashcards(
    bot: Bot,
    dialogue: AppDialogue,
    (filter, deck): (SessionFilter, Deck),
    curriculum: Curriculum,
    msg: Message,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let deck = match msg.text() {
        Some(NEXT_BUTTON) => deck.next_card(),
        Some(PREV_BUTTON) => deck.prev_card(),
        Some(FLIP_BUTTON) => deck.flip(),
        Some(BROWSE_BUTTON) => {
            let deck = deck.flip_down();
            bot.send_message(chat_id, "Back to browsing. Tap a word part to study it.")
                .reply_markup(browse_keyboard(&deck, &curriculum))
                .await?;
            dialogue.update(State::Browsing { filter, deck }).await?;
            return Ok(());
        }
        Some(SHARE_BUTTON) => {
            return send_summary(&bot, chat_id, &filter, &deck, &curriculum).await;
        }
        _ => {
            bot.send_message(chat_id, "Use Prev, Flip or Next to work through the cards")
                .reply_markup(flashcard_keyboard())
                .await?;
            return Ok(());
        }
    };

    show_card(&bot, chat_id, &deck, &curriculum).await?;
    dialogue.update(State::Flashcards { filter, deck }).await?;
    Ok(())
}
