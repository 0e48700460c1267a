use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::QuizSession;

use crate::routes::Route;

#[component]
pub fn MenuView() -> Element {
    let navigator = use_navigator();
    let mut session = use_context::<Signal<QuizSession>>();
    let completed = session.read().summary().correct_count;

    rsx! {
        div { class: "page menu-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome back" }
                p { class: "view-subtitle", "Pick up where you left off, or browse the courses." }
            }
            div { class: "view-divider" }
            div { class: "menu-stats",
                div { class: "menu-stat",
                    span { class: "menu-stat__value", "{completed}" }
                    span { class: "menu-stat__label", "Completed courses" }
                }
            }
            button {
                class: "btn btn-primary menu-continue",
                id: "menu-continue",
                r#type: "button",
                onclick: move |_| {
                    session.write().restart();
                    let _ = navigator.push(Route::Quiz {});
                },
                "Continue"
            }
        }
    }
}
