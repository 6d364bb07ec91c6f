use crate::backend::utils::route::Route;
use crate::frontend::components::common::Card;
use crate::frontend::services::messages::PAGE_NOT_FOUND;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    log::debug!("No route for /{}", segments.join("/"));

    rsx! {
        div { class: "container",
            Card { class: "auth-card centered",
                h1 { "404" }
                p { class: "muted", "{PAGE_NOT_FOUND}" }
                Link { to: Route::Index {}, "AI Studio" }
            }
        }
    }
}
