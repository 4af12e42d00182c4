use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{AssessmentView, DocumentsView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/documents", DocumentsView)] Documents {},
        #[route("/assessments", AssessmentView)] Assessments {},
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
    let ctx = use_context::<AppContext>();
    let learner = ctx.learner().clone();
    let initials = learner.initials();

    rsx! {
        nav { class: "sidebar",
            h1 { "Study Hub" }
            ul {
                li { Link { to: Route::Home {}, "Dashboard" } }
                li { Link { to: Route::Documents {}, "Documents" } }
                li { Link { to: Route::Assessments {}, "Assessments" } }
            }
            div { class: "sidebar-learner",
                span { class: "avatar", "{initials}" }
                div {
                    p { class: "sidebar-learner-name", "{learner.name}" }
                    p { class: "sidebar-learner-level", "{learner.level}" }
                }
            }
        }
    }
}
