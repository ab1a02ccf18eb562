//! Scoring state machine for one quiz run.
//!
//! `QuizRun` is a plain value: the bot keeps it inside the dialogue state and
//! every transition consumes or borrows it explicitly.

use super::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,
}

/// What happened when the learner picked an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Correct,
    Incorrect,
    /// The question was already answered, nothing changed.
    AlreadyAnswered,
    /// Not one of the offered options, nothing changed.
    UnknownOption,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizRun {
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<String>,
    score: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
}

pub enum Advance {
    Next(QuizRun),
    Completed(QuizOutcome),
}

impl QuizRun {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self {
            questions,
            current: 0,
            selected: None,
            score: 0,
        })
    }

    pub fn current_question(&self) -> &QuizQuestion {
        &self.questions[self.current]
    }

    /// Zero-based index of the question on screen.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    /// Locks in the first selection for the current question.
    pub fn select(&mut self, option: &str) -> Selection {
        if self.selected.is_some() {
            return Selection::AlreadyAnswered;
        }
        let question = &self.questions[self.current];
        if !question.options.iter().any(|o| o == option) {
            return Selection::UnknownOption;
        }

        self.selected = Some(option.to_string());
        if question.is_correct(option) {
            self.score += 1;
            Selection::Correct
        } else {
            Selection::Incorrect
        }
    }

    /// Moves past a revealed question. Unanswered questions stay put.
    pub fn advance(mut self) -> Advance {
        if self.selected.is_none() {
            return Advance::Next(self);
        }
        if self.is_last() {
            return Advance::Completed(QuizOutcome {
                score: self.score,
                total: self.questions.len(),
            });
        }
        self.current += 1;
        self.selected = None;
        Advance::Next(self)
    }
}

impl QuizOutcome {
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.score as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn verdict(&self) -> &'static str {
        if self.total > 0 && self.score == self.total {
            "Masterful! You've conquered this level."
        } else if self.total > 0 && self.score * 100 >= self.total * 60 {
            "Great job! You have a solid grasp."
        } else {
            "Keep practicing! Mastery comes with time."
        }
    }
}
