pub mod session;

use std::fmt;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MeaningMatch,
    WordBuilding,
    DefinitionDeduction,
    FillBlank,
    /// Any format label the generator invents beyond the four above.
    #[serde(other)]
    Other,
}

impl QuestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::MeaningMatch => "meaning match",
            QuestionKind::WordBuilding => "word building",
            QuestionKind::DefinitionDeduction => "definition deduction",
            QuestionKind::FillBlank => "fill blank",
            QuestionKind::Other => "question",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A multiple-choice question as returned by the generator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

/// Models sometimes number their questions instead of naming them.
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionError {
    #[error("question {id} has no options")]
    NoOptions { id: String },
    #[error("question {id}: correct answer {answer:?} is not one of the options")]
    AnswerNotAnOption { id: String, answer: String },
}

impl QuizQuestion {
    /// The generator does not guarantee the answer is among the options.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions {
                id: self.id.clone(),
            });
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::AnswerNotAnOption {
                id: self.id.clone(),
                answer: self.correct_answer.clone(),
            });
        }
        Ok(())
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[cfg(test)]
pub(crate) fn question(id: &str, options: &[&str], correct: &str) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        kind: QuestionKind::MeaningMatch,
        prompt: format!("prompt {}", id),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
        explanation: format!("because {}", correct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generator_shape() {
        let json = r#"{
            "id": "q1",
            "type": "fill-blank",
            "prompt": "She was ___happy.",
            "options": ["un", "re", "pre"],
            "correctAnswer": "un",
            "explanation": "un- means not."
        }"#;
        let parsed: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, QuestionKind::FillBlank);
        assert_eq!(parsed.correct_answer, "un");
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn unknown_kind_is_kept_as_other() {
        let json = r#"{"id":"q","type":"fill-in-the-blank","prompt":"p","options":["a"],"correctAnswer":"a","explanation":"e"}"#;
        let parsed: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, QuestionKind::Other);
        assert_eq!(parsed.kind.label(), "question");
    }

    #[test]
    fn numeric_id_becomes_text() {
        let json = r#"{"id":1,"type":"word-building","prompt":"p","options":["a"],"correctAnswer":"a","explanation":"e"}"#;
        let parsed: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "1");
        assert_eq!(parsed.kind, QuestionKind::WordBuilding);
    }

    #[test]
    fn non_scalar_id_is_rejected() {
        let json = r#"{"id":[1],"type":"word-building","prompt":"p","options":["a"],"correctAnswer":"a","explanation":"e"}"#;
        assert!(serde_json::from_str::<QuizQuestion>(json).is_err());
    }

    #[test]
    fn answer_outside_options_fails_validation() {
        let q = question("q1", &["a", "b"], "c");
        assert_eq!(
            q.validate(),
            Err(QuestionError::AnswerNotAnOption {
                id: "q1".into(),
                answer: "c".into()
            })
        );
    }

    #[test]
    fn empty_options_fail_validation() {
        let q = question("q1", &[], "c");
        assert!(matches!(q.validate(), Err(QuestionError::NoOptions { .. })));
    }
}
