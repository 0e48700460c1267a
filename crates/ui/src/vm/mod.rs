mod course_vm;
mod quiz_vm;
mod results_vm;

pub use course_vm::{CourseCardVm, map_course_card, map_course_cards};
pub use quiz_vm::{AnswerFeedback, QuestionVm, QuizIntent, map_question};
pub use results_vm::{ResultsVm, map_results};
