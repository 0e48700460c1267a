use quiz_core::model::{AnswerOutcome, QuizSession};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Answer(usize),
    Next,
    Restart,
}

/// What the user did with the current question, kept only for highlight and
/// feedback rendering. Cleared on every advance/restart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub selected: usize,
    pub outcome: AnswerOutcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub prompt: String,
    pub answers: Vec<String>,
    /// 1-based position for the progress label.
    pub number: usize,
    pub total: usize,
}

/// Snapshot the current question for rendering; `None` once the run is
/// complete.
#[must_use]
pub fn map_question(session: &QuizSession) -> Option<QuestionVm> {
    let question = session.current_question()?;

    Some(QuestionVm {
        prompt: question.text().to_string(),
        answers: question.answers().to_vec(),
        number: session.current_index() + 1,
        total: session.total_questions(),
    })
}
