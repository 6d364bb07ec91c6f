//! Renders the app-wide toast queue.

use crate::frontend::services::use_toasts;
use dioxus::prelude::*;

#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let queue = toasts.queue();

    rsx! {
        div { class: "toaster",
            for toast in queue.read().items().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    onclick: move |_| toasts.dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}
