mod course;
mod ids;
mod question;
mod session;

pub use ids::CourseId;

pub use course::{Course, CourseError};
pub use question::{ANSWER_OPTIONS, Question, QuestionError};
pub use session::{AnswerOutcome, QuizSession, SessionSummary};
