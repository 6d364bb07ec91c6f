//! Root component: styles, shared contexts, toaster and router.

use crate::backend::utils::css::CssLoader;
use crate::backend::utils::route::Route;
use crate::frontend::components::Toaster;
use crate::frontend::services::toasts::ToastQueue;
use crate::frontend::services::{Toasts, use_app};
use dioxus::prelude::*;
use dioxus_router::Router;

#[component]
pub fn App() -> Element {
    let app = use_app();
    let queue = use_signal(ToastQueue::default);
    let duration_ms = app.config.ui.toast_duration_ms;
    use_context_provider(|| Toasts::new(queue, duration_ms));

    let language = app.config.ui.language.clone();
    let direction = if language == "ar" { "rtl" } else { "ltr" };

    rsx! {
        style { dangerous_inner_html: CssLoader::all() }
        div { class: "app-root", lang: "{language}", dir: "{direction}",
            Router::<Route> {}
            Toaster {}
        }
    }
}
