pub mod gemini;
pub mod openai;
pub mod prompts;

use std::sync::Arc;

use async_trait::async_trait;

use crate::curriculum::{CategoryFilter, CefrLevel};
use crate::quiz::{QuestionError, QuizQuestion};

pub const FALLBACK_ORIGIN: &str = "Information unavailable.";
pub const FALLBACK_TRIVIA: &str = "Check back later!";

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("ChatGPT request failed: {0}")]
    ChatGpt(#[from] chatgpt::err::Error),
    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("no response from AI")]
    EmptyResponse,
    #[error("response is not valid JSON for the schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response contained no questions")]
    NoQuestions,
    #[error("malformed question: {0}")]
    Malformed(#[from] QuestionError),
}

/// One schema-constrained completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    /// JSON schema the reply must follow.
    pub schema: serde_json::Value,
}

/// A remote service that turns a prompt into JSON text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WordTrivia {
    pub origin: String,
    pub trivia: String,
}

impl WordTrivia {
    pub fn fallback() -> Self {
        Self {
            origin: FALLBACK_ORIGIN.to_string(),
            trivia: FALLBACK_TRIVIA.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct Generator {
    backend: Arc<dyn CompletionBackend>,
    model: String,
}

impl Generator {
    pub fn new(backend: Arc<dyn CompletionBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Asks for `count` questions at `level`. Any failure yields an empty list.
    pub async fn generate_quiz_questions(
        &self,
        level: CefrLevel,
        focus: CategoryFilter,
        count: usize,
    ) -> Vec<QuizQuestion> {
        match self.try_generate_quiz_questions(level, focus, count).await {
            Ok(questions) => questions,
            Err(err) => {
                log::error!("Error generating quiz questions: {}", err);
                Vec::new()
            }
        }
    }

    pub async fn try_generate_quiz_questions(
        &self,
        level: CefrLevel,
        focus: CategoryFilter,
        count: usize,
    ) -> Result<Vec<QuizQuestion>, GeneratorError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: prompts::quiz_prompt(level, focus, count),
            schema: prompts::quiz_schema(),
        };
        log::debug!("Requesting {} {} questions from {}", count, level, self.backend.name());

        let text = self.backend.complete(&request).await?;
        let mut questions = parse_quiz_questions(&text)?;
        questions.truncate(count);
        Ok(questions)
    }

    /// Best effort: never fails, falls back to a placeholder pair.
    pub async fn generate_word_trivia(&self, word_part: &str) -> WordTrivia {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: prompts::trivia_prompt(word_part),
            schema: prompts::trivia_schema(),
        };

        let result = self
            .backend
            .complete(&request)
            .await
            .and_then(|text| parse_word_trivia(&text));
        result.unwrap_or_else(|err| {
            log::warn!("Trivia for {:?} unavailable: {}", word_part, err);
            WordTrivia::fallback()
        })
    }
}

/// Chat models like to wrap JSON in a Markdown fence.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

pub fn parse_quiz_questions(text: &str) -> Result<Vec<QuizQuestion>, GeneratorError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }
    let questions: Vec<QuizQuestion> = serde_json::from_str(body)?;
    if questions.is_empty() {
        return Err(GeneratorError::NoQuestions);
    }
    for question in &questions {
        question.validate()?;
    }
    Ok(questions)
}

pub fn parse_word_trivia(text: &str) -> Result<WordTrivia, GeneratorError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(GeneratorError::EmptyResponse);
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Replays a canned reply and records the prompts it was sent.
    struct ScriptedBackend {
        reply: Option<String>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedBackend {
        fn replying(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        fn name(&self) -> &'static str {
            "scripted"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
            self.seen.lock().push(request.clone());
            match &self.reply {
                Some(reply) => Ok(reply.clone()),
                None => Err(GeneratorError::Status {
                    status: 503,
                    body: "unavailable".into(),
                }),
            }
        }
    }

    const TWO_QUESTIONS: &str = r#"[
        {"id":"1","type":"meaning-match","prompt":"What does un- mean?","options":["not","again"],"correctAnswer":"not","explanation":"un- negates."},
        {"id":"2","type":"word-building","prompt":"re + write = ?","options":["rewrite","unwrite"],"correctAnswer":"rewrite","explanation":"re- means again."}
    ]"#;

    #[tokio::test]
    async fn trivia_falls_back_when_backend_fails() {
        let generator = Generator::new(ScriptedBackend::failing(), "test-model");
        let trivia = generator.generate_word_trivia("un-").await;
        assert_eq!(trivia.origin, "Information unavailable.");
        assert_eq!(trivia.trivia, "Check back later!");
    }

    #[tokio::test]
    async fn trivia_falls_back_on_garbage() {
        let generator = Generator::new(ScriptedBackend::replying("not json"), "test-model");
        assert_eq!(generator.generate_word_trivia("un-").await, WordTrivia::fallback());
    }

    #[tokio::test]
    async fn trivia_parses_structured_reply() {
        let backend = ScriptedBackend::replying(r#"{"origin":"Old English.","trivia":"Very common."}"#);
        let generator = Generator::new(backend.clone(), "test-model");
        let trivia = generator.generate_word_trivia("un-").await;
        assert_eq!(trivia.origin, "Old English.");

        let seen = backend.seen.lock();
        assert_eq!(seen[0].model, "test-model");
        assert!(seen[0].prompt.contains("\"un-\""));
        assert_eq!(seen[0].schema["required"], serde_json::json!(["origin", "trivia"]));
    }

    #[tokio::test]
    async fn quiz_is_empty_when_backend_fails() {
        let generator = Generator::new(ScriptedBackend::failing(), "m");
        let questions = generator
            .generate_quiz_questions(CefrLevel::A1, CategoryFilter::All, 5)
            .await;
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn quiz_is_empty_when_reply_has_no_items() {
        let generator = Generator::new(ScriptedBackend::replying("[]"), "m");
        let questions = generator
            .generate_quiz_questions(CefrLevel::A1, CategoryFilter::All, 5)
            .await;
        assert!(questions.is_empty());
    }

    #[tokio::test]
    async fn quiz_rejects_answer_outside_options() {
        let reply = r#"[{"id":"1","type":"fill-blank","prompt":"p","options":["a","b"],"correctAnswer":"c","explanation":"e"}]"#;
        let generator = Generator::new(ScriptedBackend::replying(reply), "m");
        let err = generator
            .try_generate_quiz_questions(CefrLevel::B1, CategoryFilter::All, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Malformed(_)));
    }

    #[tokio::test]
    async fn quiz_parses_and_truncates() {
        let backend = ScriptedBackend::replying(TWO_QUESTIONS);
        let generator = Generator::new(backend.clone(), "m");
        let questions = generator
            .generate_quiz_questions(CefrLevel::A2, CategoryFilter::All, 1)
            .await;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "not");

        let seen = backend.seen.lock();
        assert!(seen[0].prompt.contains("Generate 1 high-quality"));
        assert!(seen[0].prompt.contains("CEFR level A2"));
    }

    #[test]
    fn fenced_json_is_accepted() {
        let fenced = format!("```json\n{}\n```", TWO_QUESTIONS);
        assert_eq!(parse_quiz_questions(&fenced).unwrap().len(), 2);
    }

    #[test]
    fn uppercase_fence_tag_is_accepted() {
        let fenced = format!("```JSON\n{}\n```", TWO_QUESTIONS);
        assert_eq!(parse_quiz_questions(&fenced).unwrap().len(), 2);
    }

    #[test]
    fn loose_question_shapes_still_parse() {
        let reply = r#"[
            {"id":1,"type":"fill-in-the-blank","prompt":"She was ___happy.","options":["un","re"],"correctAnswer":"un","explanation":"un- means not."},
            {"id":"2","type":"meaning-match","prompt":"What does re- mean?","options":["again","not"],"correctAnswer":"again","explanation":"re- repeats."}
        ]"#;
        let questions = parse_quiz_questions(reply).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "1");
        assert_eq!(questions[0].kind, crate::quiz::QuestionKind::Other);
    }

    #[test]
    fn blank_reply_is_empty_response() {
        assert!(matches!(
            parse_quiz_questions("  \n"),
            Err(GeneratorError::EmptyResponse)
        ));
    }
}
