use dioxus::prelude::*;
use dioxus_router::Router;

use quiz_core::model::QuizSession;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();

    // One session per app run. Providing the signal at the root keeps quiz
    // progress alive across navigation between views.
    use_context_provider(|| Signal::new(QuizSession::new(ctx.catalog().questions().to_vec())));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered inside the right pane.
        document::Title { "Quiz Academy" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
