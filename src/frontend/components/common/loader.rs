//! Full-screen spinner shown while a gate resolves.

use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader-wrap",
            div { class: "spinner" }
        }
    }
}
