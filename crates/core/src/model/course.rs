use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::CourseId;

/// A course entry on the course-list screen. Selecting any course starts a
/// quiz run over the shared question set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    title: String,
}

impl Course {
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` if `title` is blank.
    pub fn new(id: CourseId, title: String) -> Result<Self, CourseError> {
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        Ok(Self { id, title })
    }

    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title is blank")]
    EmptyTitle,
}
