use crate::vm::QuizIntent;

use super::test_harness::{ViewKind, drive_dom, setup_view_harness};

#[test]
fn menu_view_smoke_renders_completed_counter() {
    let mut harness = setup_view_harness(ViewKind::Menu);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Completed courses"), "missing counter in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");
}

#[test]
fn courses_view_smoke_renders_five_course_cards() {
    let mut harness = setup_view_harness(ViewKind::Courses);
    harness.rebuild();

    let html = harness.render();
    assert_eq!(
        html.matches("View course").count(),
        5,
        "expected five cards in {html}"
    );
    assert!(html.contains("Math Basics"), "missing first course in {html}");
    assert!(html.contains("Spatial Reasoning"), "missing last course in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("World War II"), "missing prompt in {html}");
    assert!(html.contains("1945"), "missing option in {html}");
    assert!(html.contains("Question 1 / 5"), "missing progress in {html}");
    assert!(html.contains("Points: 0"), "missing points in {html}");
}

#[test]
fn quiz_view_correct_answer_shows_feedback_and_score() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let dispatch = harness.quiz_handles.clone().expect("quiz handles").dispatch();

    dispatch.call(QuizIntent::Answer(2));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Correct answer"), "missing feedback in {html}");
    assert!(html.contains("quiz-answer--correct"), "missing highlight in {html}");
    assert!(html.contains("Points: 10"), "missing points in {html}");
}

#[test]
fn quiz_view_wrong_answer_highlights_correct_option() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let dispatch = harness.quiz_handles.clone().expect("quiz handles").dispatch();

    dispatch.call(QuizIntent::Answer(0));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Wrong answer"), "missing feedback in {html}");
    assert!(html.contains("quiz-answer--wrong"), "missing chosen highlight in {html}");
    assert!(html.contains("quiz-answer--correct"), "missing correct highlight in {html}");
    assert!(html.contains("Points: 0"), "missing points in {html}");
}

#[test]
fn quiz_view_ignores_second_answer_while_locked() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let dispatch = harness.quiz_handles.clone().expect("quiz handles").dispatch();

    dispatch.call(QuizIntent::Answer(2));
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Answer(0));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Correct answer"), "first outcome lost in {html}");
    assert!(!html.contains("Wrong answer"), "second submit leaked into {html}");
    assert!(html.contains("Points: 10"), "points changed in {html}");
}

#[test]
fn quiz_view_next_moves_to_second_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let dispatch = harness.quiz_handles.clone().expect("quiz handles").dispatch();

    dispatch.call(QuizIntent::Answer(0));
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Next);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Question 2 / 5"), "missing progress in {html}");
    assert!(html.contains("3.14"), "missing second question option in {html}");
    assert!(!html.contains("Wrong answer"), "stale feedback in {html}");
}

#[test]
fn quiz_view_restart_returns_to_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz);
    harness.rebuild();
    let dispatch = harness.quiz_handles.clone().expect("quiz handles").dispatch();

    dispatch.call(QuizIntent::Answer(2));
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Next);
    drive_dom(&mut harness.dom);
    dispatch.call(QuizIntent::Restart);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("Question 1 / 5"), "missing progress in {html}");
    assert!(html.contains("World War II"), "missing first prompt in {html}");
    assert!(html.contains("Points: 0"), "points survived restart in {html}");
}

#[test]
fn results_view_smoke_renders_score_lines() {
    let mut harness = setup_view_harness(ViewKind::Results);
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("0 / 5"), "missing score line in {html}");
    assert!(html.contains("Points: 0"), "missing points line in {html}");
    assert!(html.contains("Play again"), "missing play again in {html}");
    assert!(html.contains("Back to menu"), "missing back to menu in {html}");
}
