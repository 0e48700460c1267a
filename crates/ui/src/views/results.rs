use dioxus::prelude::*;
use dioxus_router::use_navigator;

use quiz_core::model::QuizSession;

use crate::routes::Route;
use crate::vm::map_results;

#[component]
pub fn ResultsView() -> Element {
    let navigator = use_navigator();
    let mut session = use_context::<Signal<QuizSession>>();
    let vm = map_results(&session.read().summary());

    rsx! {
        div { class: "page results-page",
            header { class: "view-header",
                h2 { class: "view-title", "Results" }
            }
            div { class: "view-divider" }
            div { class: "results-score",
                p { class: "results-score__line", "{vm.score_line}" }
                p { class: "results-score__points", "{vm.points_line}" }
            }
            div { class: "results-actions",
                button {
                    class: "btn btn-primary",
                    id: "results-play-again",
                    r#type: "button",
                    onclick: move |_| {
                        session.write().restart();
                        let _ = navigator.push(Route::Quiz {});
                    },
                    "Play again"
                }
                button {
                    class: "btn btn-secondary",
                    id: "results-back-to-menu",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Menu {});
                    },
                    "Back to menu"
                }
            }
        }
    }
}
