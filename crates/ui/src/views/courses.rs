use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::QuizSession;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CoursesView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut session = use_context::<Signal<QuizSession>>();
    let cards = map_course_cards(ctx.catalog().courses());

    rsx! {
        div { class: "page courses-page",
            header { class: "view-header",
                h2 { class: "view-title", "Courses" }
                p { class: "view-subtitle", "Every course opens a fresh quiz run." }
            }
            div { class: "view-divider" }
            div { class: "course-grid",
                for card in cards {
                    CourseCard {
                        card,
                        on_view: move |()| {
                            session.write().restart();
                            let _ = navigator.push(Route::Quiz {});
                        },
                    }
                }
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm, on_view: EventHandler<()>) -> Element {
    rsx! {
        div { class: "course-card",
            div { class: "course-card__meta",
                span { class: "course-card__avatar", "{card.avatar}" }
                h4 { class: "course-card__title", "{card.title}" }
            }
            button {
                class: "btn btn-primary course-card__action",
                r#type: "button",
                onclick: move |_| on_view.call(()),
                "View course"
            }
        }
    }
}
