mod config;
mod curriculum;
mod generator;
mod guard;
mod handlers;
mod quiz;
mod share;
mod trainer;

use std::sync::Arc;

use chatgpt::{client::ChatGPT, config::ChatGPTEngine};
use dotenv::dotenv;
use teloxide::{
    dispatching::{
        dialogue::{ErasedStorage, InMemStorage, Storage},
        UpdateHandler,
    },
    prelude::*,
};

use config::{Config, Provider};
use curriculum::{sampler::SessionFilter, Curriculum};
use generator::{gemini::GeminiBackend, openai::OpenAiBackend, CompletionBackend, Generator};
use guard::ViewGuards;
use quiz::session::{QuizOutcome, QuizRun};
use trainer::Deck;

type AppDialogue = Dialogue<State, ErasedStorage<State>>;
type HandlerError = Box<dyn std::error::Error + Send + Sync>;
type HandlerResult = Result<(), HandlerError>;
type DialogueStorage = Arc<ErasedStorage<State>>;

#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
pub enum State {
    #[default]
    Start,
    Home {
        filter: SessionFilter,
    },
    ReceiveLevel {
        filter: SessionFilter,
    },
    ReceiveCategory {
        filter: SessionFilter,
    },
    ReceiveSize {
        filter: SessionFilter,
    },
    Browsing {
        filter: SessionFilter,
        deck: Deck,
    },
    Flashcards {
        filter: SessionFilter,
        deck: Deck,
    },
    QuizLoading {
        filter: SessionFilter,
        generation: u64,
    },
    QuizFailed {
        filter: SessionFilter,
    },
    Quizzing {
        filter: SessionFilter,
        run: QuizRun,
    },
    QuizCompleted {
        filter: SessionFilter,
        outcome: QuizOutcome,
    },
}

impl State {
    /// The settings carried by whatever screen the chat is on.
    pub fn filter(&self) -> SessionFilter {
        match self {
            State::Start => SessionFilter::default(),
            State::Home { filter }
            | State::ReceiveLevel { filter }
            | State::ReceiveCategory { filter }
            | State::ReceiveSize { filter }
            | State::Browsing { filter, .. }
            | State::Flashcards { filter, .. }
            | State::QuizLoading { filter, .. }
            | State::QuizFailed { filter }
            | State::Quizzing { filter, .. }
            | State::QuizCompleted { filter, .. } => *filter,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    pretty_env_logger::init();
    log::info!("Starting AffixMaster bot...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let generator = match build_generator(&config) {
        Ok(generator) => generator,
        Err(err) => {
            log::error!("Unable to set up the {:?} client: {}", config.provider, err);
            std::process::exit(1);
        }
    };
    log::info!(
        "Using {} with model {}",
        generator.backend_name(),
        config.model
    );

    let bot = Bot::from_env();
    let storage: DialogueStorage = InMemStorage::<State>::new().erase();
    let guards: ViewGuards<ChatId> = ViewGuards::default();
    let curriculum = Curriculum::builtin();
    log::info!("Curriculum loaded: {} word parts", curriculum.parts().len());

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![storage, generator, guards, curriculum])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
}

fn build_generator(config: &Config) -> Result<Generator, HandlerError> {
    let backend: Arc<dyn CompletionBackend> = match config.provider {
        Provider::Gemini => Arc::new(GeminiBackend::new(config.api_key.clone(), config.timeout)?),
        Provider::ChatGpt => {
            let mut gpt = ChatGPT::new(config.api_key.clone())?;

            gpt.config.engine = if config.model.starts_with("gpt-4") {
                ChatGPTEngine::Gpt4
            } else {
                ChatGPTEngine::Gpt35Turbo
            };
            gpt.config.timeout = config.timeout;

            Arc::new(OpenAiBackend::new(gpt))
        }
    };
    Ok(Generator::new(backend, config.model.clone()))
}

fn schema() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .enter_dialogue::<Message, ErasedStorage<State>, State>()
        .branch(dptree::filter(handlers::is_home_request).endpoint(handlers::go_home))
        .branch(dptree::case![State::Start].endpoint(handlers::home::start))
        .branch(dptree::case![State::Home { filter }].endpoint(handlers::home::home))
        .branch(dptree::case![State::ReceiveLevel { filter }].endpoint(handlers::home::receive_level))
        .branch(dptree::case![State::ReceiveCategory { filter }].endpoint(handlers::home::receive_category))
        .branch(dptree::case![State::ReceiveSize { filter }].endpoint(handlers::home::receive_size))
        .branch(dptree::case![State::Browsing { filter, deck }].endpoint(handlers::trainer::browsing))
        .branch(dptree::case![State::Flashcards { filter, deck }].endpoint(handlers::trainer::flashcards))
        .branch(dptree::case![State::QuizLoading { filter, generation }].endpoint(handlers::quizzer::loading))
        .branch(dptree::case![State::QuizFailed { filter }].endpoint(handlers::quizzer::failed))
        .branch(dptree::case![State::Quizzing { filter, run }].endpoint(handlers::quizzer::quizzing))
        .branch(dptree::case![State::QuizCompleted { filter, outcome }].endpoint(handlers::quizzer::completed))
}
