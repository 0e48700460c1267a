use crate::error::Error;
use crate::model::{Course, CourseId, Question};

/// The fixed course list and question set every run starts from.
///
/// The data is seeded in code and deterministic across runs: same courses,
/// same questions, same order. Nothing here is loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseCatalog {
    courses: Vec<Course>,
    questions: Vec<Question>,
}

impl CourseCatalog {
    /// Build the seeded catalog.
    ///
    /// # Errors
    ///
    /// Returns `Error` if a seed entry fails validation.
    pub fn load() -> Result<Self, Error> {
        Ok(Self {
            courses: seed_courses()?,
            questions: seed_questions()?,
        })
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

fn course(id: u64, title: &str) -> Result<Course, Error> {
    Ok(Course::new(CourseId::new(id), title.to_string())?)
}

fn question(text: &str, answers: [&str; 4], correct_answer: usize) -> Result<Question, Error> {
    Ok(Question::new(
        text.to_string(),
        answers.into_iter().map(str::to_string).collect(),
        correct_answer,
        10,
    )?)
}

fn seed_courses() -> Result<Vec<Course>, Error> {
    Ok(vec![
        course(1, "Math Basics")?,
        course(2, "Logic Puzzles")?,
        course(3, "Memory Exercises")?,
        course(4, "Reading Comprehension")?,
        course(5, "Spatial Reasoning")?,
    ])
}

fn seed_questions() -> Result<Vec<Question>, Error> {
    Ok(vec![
        question(
            "In which year did World War II end?",
            ["1943", "1944", "1945", "1946"],
            2,
        )?,
        question(
            "What is the value of Pi rounded to two decimal places?",
            ["3.12", "3.14", "3.16", "3.18"],
            1,
        )?,
        question(
            "Which is the largest planet in the Solar System?",
            ["Earth", "Mars", "Jupiter", "Saturn"],
            2,
        )?,
        question(
            "Who painted the Mona Lisa?",
            ["Michelangelo", "Leonardo da Vinci", "Raphael", "Donatello"],
            1,
        )?,
        question(
            "How many continents are there on Earth?",
            ["5", "6", "7", "8"],
            2,
        )?,
    ])
}
