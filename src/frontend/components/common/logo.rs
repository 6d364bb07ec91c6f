//! Logo component.

use crate::frontend::services::messages::BRAND;
use dioxus::prelude::*;

#[component]
pub fn Logo(
    #[props(default = "✦".to_string())] icon: String,
    #[props(default = BRAND.to_string())] title: String,
) -> Element {
    rsx! {
        div { class: "brand",
            div { class: "brand-icon", "{icon}" }
            span { class: "gradient-text", "{title}" }
        }
    }
}
