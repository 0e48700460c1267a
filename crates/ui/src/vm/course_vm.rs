use quiz_core::model::{Course, CourseId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub avatar: String,
}

#[must_use]
pub fn map_course_card(course: &Course) -> CourseCardVm {
    let avatar = course
        .title()
        .chars()
        .next()
        .map_or_else(|| "?".to_string(), |ch| ch.to_string());

    CourseCardVm {
        id: course.id(),
        title: course.title().to_string(),
        avatar,
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses.iter().map(map_course_card).collect()
}
