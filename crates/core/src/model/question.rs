use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every question carries exactly this many answer options.
pub const ANSWER_OPTIONS: usize = 4;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// A single trivia question: prompt, ordered answer options, the index of the
/// correct option, and the points awarded for answering it correctly.
///
/// Immutable once constructed; `Question::new` enforces the invariants, so a
/// `Question` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    answers: Vec<String>,
    correct_answer: usize,
    points: u32,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if `text` is blank,
    /// `QuestionError::WrongOptionCount` unless exactly [`ANSWER_OPTIONS`]
    /// options are given, `QuestionError::BlankOption` if any option is blank,
    /// and `QuestionError::CorrectOutOfRange` if `correct_answer` does not
    /// address an option.
    pub fn new(
        text: String,
        answers: Vec<String>,
        correct_answer: usize,
        points: u32,
    ) -> Result<Self, QuestionError> {
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if answers.len() != ANSWER_OPTIONS {
            return Err(QuestionError::WrongOptionCount { len: answers.len() });
        }
        if let Some(index) = answers.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::BlankOption { index });
        }
        if correct_answer >= answers.len() {
            return Err(QuestionError::CorrectOutOfRange {
                index: correct_answer,
                len: answers.len(),
            });
        }

        Ok(Self {
            text,
            answers,
            correct_answer,
            points,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Answer options in display order; option order is significant because
    /// submissions address options by index.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is blank")]
    EmptyPrompt,

    #[error("expected {expected} answer options, got {len}", expected = ANSWER_OPTIONS)]
    WrongOptionCount { len: usize },

    #[error("answer option {index} is blank")]
    BlankOption { index: usize },

    #[error("correct answer index {index} out of range for {len} options")]
    CorrectOutOfRange { index: usize, len: usize },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
