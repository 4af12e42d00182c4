use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, UiState};
use crate::routes::Route;
use crate::vm::map_dashboard;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_context::<UiState>();
    let dashboard = map_dashboard(
        ctx.learner(),
        &ctx.question_bank(),
        &state.documents.read(),
    );

    let stats = dashboard.stats.iter().map(|stat| {
        rsx! {
            div { class: "stat-card",
                p { class: "stat-label", "{stat.label}" }
                p { class: "stat-value", "{stat.value}" }
            }
        }
    });

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "{dashboard.greeting}" }
                p { class: "view-subtitle", "{dashboard.level_label}" }
            }
            div { class: "stat-grid", {stats} }
            div { class: "home-links",
                Link { class: "home-link", to: Route::Documents {},
                    span { "Documents" }
                    span { class: "home-link-meta", "{dashboard.library_label}" }
                }
                Link { class: "home-link", to: Route::Assessments {},
                    span { "Assessments" }
                    span { class: "home-link-meta", "{dashboard.catalogue_label}" }
                }
            }
        }
    }
}
