use thiserror::Error;

use crate::model::CourseError;
use crate::model::QuestionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Course(#[from] CourseError),
}
