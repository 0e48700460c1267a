mod courses;
mod menu;
mod quiz;
mod results;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use courses::CoursesView;
pub use menu::MenuView;
pub use quiz::QuizView;
pub use results::ResultsView;
