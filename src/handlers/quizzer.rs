use teloxide::{prelude::*, types::ChatAction};

use super::*;
use crate::generator::Generator;
use crate::guard::Ticket;
use crate::quiz::session::{Advance, QuizOutcome, QuizRun, Selection};
use crate::share;

const TRY_AGAIN_BUTTON: &str = "🔁 Try again";
const RETAKE_BUTTON: &str = "🔁 Retake";
const NEXT_QUESTION_BUTTON: &str = "Next question ➡️";
const FINISH_BUTTON: &str = "Finish quiz 🏁";

/// Kicks off question generation and moves the chat into the loading state.
///
/// The request runs in its own task. If the learner leaves or restarts the
/// quiz before it resolves, the ticket goes stale and the result is dropped.
pub async fn start_quiz(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    generator: Generator,
    guards: ViewGuards<ChatId>,
    chat_id: ChatId,
) -> HandlerResult {
    let ticket = {
        let _section = guards.section(chat_id).await;
        let ticket = guards.quiz.begin(chat_id);
        dialogue
            .update(State::QuizLoading {
                filter,
                generation: ticket.generation(),
            })
            .await?;
        ticket
    };

    if let Err(err) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
        log::debug!("Typing indicator failed for chat {}: {}", chat_id, err);
    }
    bot.send_message(
        chat_id,
        format!(
            "Generating your custom quiz...\nHand-crafting {} questions for {} at Level {}",
            filter.size.get(),
            filter.category.plural(),
            filter.level
        ),
    )
    .reply_markup(keyboard(&[&[HOME_BUTTON]]))
    .await?;

    tokio::spawn(async move {
        if let Err(err) = deliver_quiz(bot, dialogue, filter, generator, guards, ticket).await {
            log::error!("Failed to deliver quiz to chat {}: {}", chat_id, err);
        }
    });
    Ok(())
}

async fn deliver_quiz(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    generator: Generator,
    guards: ViewGuards<ChatId>,
    ticket: Ticket<ChatId>,
) -> HandlerResult {
    let chat_id = ticket.key();
    let questions = generator
        .generate_quiz_questions(filter.level, filter.category, filter.size.get())
        .await;

    let _section = guards.section(chat_id).await;
    let still_waiting = matches!(
        dialogue.get().await?,
        Some(State::QuizLoading { generation, .. }) if generation == ticket.generation()
    );
    if !guards.quiz.is_current(&ticket) || !still_waiting {
        log::warn!("Discarding stale quiz for chat {}", chat_id);
        return Ok(());
    }

    match QuizRun::new(questions) {
        Ok(run) => {
            log::info!("Quiz with {} questions ready for chat {}", run.total(), chat_id);
            dialogue
                .update(State::Quizzing {
                    filter,
                    run: run.clone(),
                })
                .await?;
            send_question(&bot, chat_id, &run).await
        }
        Err(err) => {
            log::warn!("No quiz for chat {}: {}", chat_id, err);
            dialogue.update(State::QuizFailed { filter }).await?;
            bot.send_message(
                chat_id,
                "Oops! Something went wrong\nFailed to generate questions. Please try again.",
            )
            .reply_markup(keyboard(&[&[TRY_AGAIN_BUTTON], &[HOME_BUTTON]]))
            .await?;
            Ok(())
        }
    }
}

async fn send_question(bot: &Bot, chat_id: ChatId, run: &QuizRun) -> HandlerResult {
    let question = run.current_question();
    let text = format!(
        "Question {} of {} · {}\n\n{}",
        run.position() + 1,
        run.total(),
        question.kind.label().to_uppercase(),
        question.prompt
    );
    let options = question
        .options
        .iter()
        .map(|option| vec![KeyboardButton::new(option.clone())])
        .collect::<Vec<_>>();

    bot.send_message(chat_id, text)
        .reply_markup(KeyboardMarkup::new(options))
        .await?;
    Ok(())
}

pub async fn loading(
    bot: Bot,
    (_filter, _generation): (SessionFilter, u64),
    msg: Message,
) -> HandlerResult {
    bot.send_message(msg.chat.id, "Still generating your quiz, hang on...")
        .reply_markup(keyboard(&[&[HOME_BUTTON]]))
        .await?;
    Ok(())
}

pub async fn failed(
    bot: Bot,
    dialogue: AppDialogue,
    filter: SessionFilter,
    generator: Generator,
    guards: ViewGuards<ChatId>,
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(TRY_AGAIN_BUTTON) => start_quiz(bot, dialogue, filter, generator, guards, msg.chat.id).await,
        _ => {
            bot.send_message(msg.chat.id, "Tap Try again to generate a new quiz")
                .reply_markup(keyboard(&[&[TRY_AGAIN_BUTTON], &[HOME_BUTTON]]))
                .await?;
            Ok(())
        }
    }
}

pub async fn quizzing(
    bot: Bot,
    dialogue: AppDialogue,
    (filter, mut run): (SessionFilter, QuizRun),
    msg: Message,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let Some(text) = msg.text() else {
        bot.send_message(chat_id, "Please answer with one of the options").await?;
        return Ok(());
    };

    if run.selected().is_some() {
        if text != NEXT_QUESTION_BUTTON && text != FINISH_BUTTON {
            bot.send_message(chat_id, "You've already answered this one.")
                .reply_markup(next_keyboard(&run))
                .await?;
            return Ok(());
        }
        return match run.advance() {
            Advance::Next(run) => {
                dialogue
                    .update(State::Quizzing {
                        filter,
                        run: run.clone(),
                    })
                    .await?;
                send_question(&bot, chat_id, &run).await
            }
            Advance::Completed(outcome) => {
                log::info!("Chat {} finished a quiz: {}/{}", chat_id, outcome.score, outcome.total);
                dialogue.update(State::QuizCompleted { filter, outcome }).await?;
                send_results(&bot, chat_id, &filter, &outcome).await
            }
        };
    }

    let question = run.current_question().clone();
    let verdict = match run.select(text) {
        Selection::Correct => "Correct!",
        Selection::Incorrect => "Incorrect",
        Selection::AlreadyAnswered | Selection::UnknownOption => {
            bot.send_message(chat_id, "Please answer with one of the options")
                .await?;
            return Ok(());
        }
    };

    let reveal = if question.is_correct(text) {
        format!("✅ {}\n\n{}", verdict, question.explanation)
    } else {
        format!(
            "❌ {} The answer is \"{}\".\n\n{}",
            verdict, question.correct_answer, question.explanation
        )
    };
    let reveal = format!("{}\n\nScore so far: {} / {}", reveal, run.score(), run.total());
    bot.send_message(chat_id, reveal)
        .reply_markup(next_keyboard(&run))
        .await?;
    dialogue.update(State::Quizzing { filter, run }).await?;
    Ok(())
}

fn next_keyboard(run: &QuizRun) -> KeyboardMarkup {
    if run.is_last() {
        keyboard(&[&[FINISH_BUTTON]])
    } else {
        keyboard(&[&[NEXT_QUESTION_BUTTON]])
    }
}

async fn send_results(
    bot: &Bot,
    chat_id: ChatId,
    filter: &SessionFilter,
    outcome: &QuizOutcome,
) -> HandlerResult {
    bot.send_message(
        chat_id,
        format!(
            "🏆 Quiz Complete!\nLevel {} · {} focus\n\n{} / {}\n\n{}",
            filter.level,
            filter.category,
            outcome.score,
            outcome.total,
            outcome.verdict()
        ),
    )
    .reply_markup(keyboard(&[&[RETAKE_BUTTON, HOME_BUTTON], &[SHARE_BUTTON]]))
    .await?;
    Ok(())
}

pub async fn completed(
    bot: Bot,
    dialogue: AppDialogue,
    (filter, outcome): (SessionFilter, QuizOutcome),
    generator: Generator,
    guards: ViewGuards<ChatId>,
    msg: Message,
) -> HandlerResult {
    match msg.text() {
        Some(RETAKE_BUTTON) => start_quiz(bot, dialogue, filter, generator, guards, msg.chat.id).await,
        Some(SHARE_BUTTON) => {
            let draft = share::quiz_results(filter.level, filter.category, &outcome);
            bot.send_message(
                msg.chat.id,
                format!("Open this link to email your results:\n{}", draft.compose_link()),
            )
            .await?;
            Ok(())
        }
        _ => send_results(&bot, msg.chat.id, &filter, &outcome).await,
    }
}
