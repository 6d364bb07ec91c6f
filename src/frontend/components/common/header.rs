//! Sticky page header with the brand on one side and actions on the other.

use crate::frontend::components::common::Logo;
use crate::frontend::services::messages::BRAND;
use dioxus::prelude::*;

#[component]
pub fn Header(
    #[props(default = "✦".to_string())] icon: String,
    #[props(default = BRAND.to_string())] title: String,
    children: Element,
) -> Element {
    rsx! {
        header { class: "header glass",
            div { class: "container header-inner",
                Logo { icon, title }
                div { class: "header-actions", {children} }
            }
        }
    }
}
