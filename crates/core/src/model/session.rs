use serde::{Deserialize, Serialize};

use crate::model::Question;

/// Result of submitting an answer for the current question.
///
/// `correct_answer_index` is reported even for wrong answers so the
/// presentation layer can highlight the right option either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer_index: usize,
}

/// Read-only snapshot of session progress for the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub correct_count: u32,
    pub total_points: u32,
    pub total_questions: usize,
}

/// One run of the quiz: the fixed question list plus mutable progress.
///
/// The session is a small state machine. It starts in progress at the first
/// question with answering unlocked; `submit_answer` locks the current
/// question, `advance` moves the cursor and unlocks, and the session is
/// complete once the cursor reaches the end of the question list. `restart`
/// returns to the initial state from anywhere without touching the questions.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    correct_count: u32,
    total_points: u32,
    answer_locked: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            correct_count: 0,
            total_points: 0,
            answer_locked: false,
        }
    }

    /// The question under the cursor, or `None` once the session is complete.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// True once the current question has received an answer; answering is
    /// blocked until `advance` unlocks the next question.
    #[must_use]
    pub fn answer_locked(&self) -> bool {
        self.answer_locked
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    /// Score the given option against the current question.
    ///
    /// Returns `None` with no state change when the current question is
    /// already locked or the session is complete, which makes rapid repeated
    /// clicks harmless. An out-of-range `answer_index` is treated as an
    /// ordinary wrong answer, never a failure.
    pub fn submit_answer(&mut self, answer_index: usize) -> Option<AnswerOutcome> {
        if self.answer_locked {
            return None;
        }
        let question = self.questions.get(self.current_index)?;

        let correct_answer_index = question.correct_answer();
        let is_correct = answer_index == correct_answer_index;

        self.answer_locked = true;
        if is_correct {
            self.correct_count += 1;
            self.total_points += question.points();
        }

        Some(AnswerOutcome {
            is_correct,
            correct_answer_index,
        })
    }

    /// Move to the next question and unlock answering.
    ///
    /// Advancing before an answer is permitted and simply skips the question
    /// without scoring it. Advancing a complete session is a no-op.
    pub fn advance(&mut self) {
        if self.current_index < self.questions.len() {
            self.current_index += 1;
        }
        self.answer_locked = false;
    }

    /// Return to the first question with zeroed tallies, from any state.
    /// The question list is untouched.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.correct_count = 0;
        self.total_points = 0;
        self.answer_locked = false;
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            correct_count: self.correct_count,
            total_points: self.total_points,
            total_questions: self.questions.len(),
        }
    }
}
