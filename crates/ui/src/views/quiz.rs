use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use keyboard_types::Key;

use quiz_core::model::QuizSession;

use crate::routes::Route;
use crate::vm::{AnswerFeedback, QuizIntent, map_question};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn answer_class(index: usize, feedback: Option<AnswerFeedback>) -> &'static str {
    let Some(feedback) = feedback else {
        return "quiz-answer";
    };
    // The correct option is highlighted even when the user chose wrong.
    if index == feedback.outcome.correct_answer_index {
        "quiz-answer quiz-answer--correct"
    } else if index == feedback.selected {
        "quiz-answer quiz-answer--wrong"
    } else {
        "quiz-answer"
    }
}

#[component]
pub fn QuizView() -> Element {
    let navigator = use_navigator();
    let mut session = use_context::<Signal<QuizSession>>();
    let mut feedback = use_signal(|| None::<AnswerFeedback>);

    let dispatch_intent = use_callback(move |intent: QuizIntent| match intent {
        QuizIntent::Answer(index) => {
            let outcome = session.write().submit_answer(index);
            if let Some(outcome) = outcome {
                feedback.set(Some(AnswerFeedback {
                    selected: index,
                    outcome,
                }));
            }
        }
        QuizIntent::Next => {
            session.write().advance();
            feedback.set(None);
            if session.read().is_complete() {
                let _ = navigator.push(Route::Results {});
            }
        }
        QuizIntent::Restart => {
            session.write().restart();
            feedback.set(None);
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let locked = session.read().answer_locked();
        match evt.data.key() {
            Key::Enter => {
                if locked {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Next);
                }
            }
            Key::Character(value) => {
                if locked {
                    return;
                }
                let chosen = match value.as_str() {
                    "1" => Some(0),
                    "2" => Some(1),
                    "3" => Some(2),
                    "4" => Some(3),
                    _ => None,
                };
                if let Some(index) = chosen {
                    evt.prevent_default();
                    dispatch_intent.call(QuizIntent::Answer(index));
                }
            }
            _ => {}
        }
    });

    let question = map_question(&session.read());
    let locked = session.read().answer_locked();
    let feedback_state = feedback();
    let points_label = format!("Points: {}", session.read().total_points());

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            header { class: "view-header",
                h2 { class: "view-title", "Quiz" }
            }
            div { class: "view-divider" }
            match question {
                Some(question) => rsx! {
                    div { class: "quiz-question",
                        h3 { class: "quiz-prompt", "{question.prompt}" }
                    }
                    // Answer controls are rebuilt for each question; keying on the
                    // cursor discards the previous question's buttons outright.
                    div { key: "{question.number}", class: "quiz-answers",
                        for (index, option) in question.answers.iter().enumerate() {
                            AnswerButton {
                                index,
                                label: option.clone(),
                                locked,
                                feedback: feedback_state,
                                on_intent: dispatch_intent,
                            }
                        }
                    }
                    match feedback_state {
                        Some(feedback) if feedback.outcome.is_correct => rsx! {
                            p { class: "quiz-feedback quiz-feedback--correct", "✓ Correct answer!" }
                        },
                        Some(_) => rsx! {
                            p { class: "quiz-feedback quiz-feedback--wrong", "✗ Wrong answer!" }
                        },
                        None => rsx! {},
                    }
                    footer { class: "quiz-footer",
                        span { class: "quiz-footer__item", "Question {question.number} / {question.total}" }
                        span { class: "quiz-footer__item", "{points_label}" }
                        div { class: "quiz-footer__actions",
                            button {
                                class: "btn btn-primary",
                                id: "quiz-next",
                                r#type: "button",
                                disabled: !locked,
                                onclick: move |_| dispatch_intent.call(QuizIntent::Next),
                                "Next question"
                            }
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-restart",
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(QuizIntent::Restart),
                                "Restart"
                            }
                            button {
                                class: "btn btn-secondary",
                                id: "quiz-back-to-menu",
                                r#type: "button",
                                onclick: move |_| {
                                    let _ = navigator.push(Route::Menu {});
                                },
                                "Back to menu"
                            }
                        }
                    }
                },
                None => rsx! {
                    div { class: "quiz-complete",
                        h3 { class: "quiz-complete__title", "Quiz complete" }
                        p { class: "quiz-complete__subtitle", "You have answered every question in this run." }
                        Link { class: "btn btn-primary", to: Route::Results {}, "See results" }
                    }
                },
            }
        }
    }
}

#[component]
fn AnswerButton(
    index: usize,
    label: String,
    locked: bool,
    feedback: Option<AnswerFeedback>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let class = answer_class(index, feedback);
    rsx! {
        button {
            class: "{class}",
            id: "quiz-answer-{index}",
            r#type: "button",
            disabled: locked,
            onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
            "{label}"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
