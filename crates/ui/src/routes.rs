use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CoursesView, MenuView, QuizView, ResultsView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", MenuView)] Menu {},
        #[route("/courses", CoursesView)] Courses {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let mut profile_open = use_signal(|| false);
    let mut logout_open = use_signal(|| false);

    rsx! {
        nav { class: "sidebar",
            h1 { "Quiz Academy" }
            ul {
                li { Link { to: Route::Menu {}, "Home" } }
                li { Link { to: Route::Courses {}, "Courses" } }
                li {
                    button {
                        class: "sidebar-action",
                        r#type: "button",
                        onclick: move |_| profile_open.set(true),
                        "Profile"
                    }
                }
                li {
                    button {
                        class: "sidebar-action",
                        r#type: "button",
                        onclick: move |_| logout_open.set(true),
                        "Log out"
                    }
                }
            }
        }
        if profile_open() {
            div {
                class: "modal-overlay",
                onclick: move |_| profile_open.set(false),
                div {
                    class: "modal",
                    onclick: move |evt| evt.stop_propagation(),
                    h3 { class: "modal-title", "Profile" }
                    p { class: "modal-body", "Profile page coming soon." }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| profile_open.set(false),
                            "OK"
                        }
                    }
                }
            }
        }
        if logout_open() {
            div {
                class: "modal-overlay",
                onclick: move |_| logout_open.set(false),
                div {
                    class: "modal",
                    onclick: move |evt| evt.stop_propagation(),
                    h3 { class: "modal-title", "Log out" }
                    p { class: "modal-body", "Are you sure you want to log out?" }
                    div { class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| logout_open.set(false),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| dioxus::desktop::window().close(),
                            "Log out"
                        }
                    }
                }
            }
        }
    }
}
