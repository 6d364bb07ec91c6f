use dioxus::prelude::*;

/// Glass panel used for every content block.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "glass card {class}", {children} }
    }
}
