//! Elevated view for users holding the admin role.

use crate::backend::services::{
    ADMIN_ROLE, Destination, GateState, resolve_elevated_access, sign_out,
};
use crate::backend::utils::route::Route;
use crate::frontend::components::common::{Card, Header, Loader};
use crate::frontend::services::messages::{ACCESS_DENIED, ADMIN_PANEL, BACK_TO_DASHBOARD};
use crate::frontend::services::{use_app, use_toasts};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

const STATS: [&str; 3] = ["إجمالي المستخدمين", "الطلبات النشطة", "الطلبات المكتملة"];

#[component]
pub fn Admin() -> Element {
    let app = use_app();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut gate = use_signal(GateState::default);

    let gate_client = app.client.clone();
    use_future(move || {
        let client = gate_client.clone();
        async move {
            let state = resolve_elevated_access(&client, ADMIN_ROLE).await;
            if state.is_denied() {
                toasts.error(ACCESS_DENIED);
            }
            if let Some(destination) = state.redirect() {
                nav.replace(Route::from(destination));
            }
            gate.set(state);
        }
    });

    let on_sign_out = move |_| {
        let client = app.client.clone();
        spawn(async move {
            let destination = sign_out(&client).await;
            nav.replace(Route::from(destination));
        });
    };

    if gate.read().is_resolving() {
        return rsx! { Loader {} };
    }
    if !matches!(*gate.read(), GateState::Authorized(_)) {
        return rsx! {};
    }

    rsx! {
        div { class: "admin",
            Header { icon: "⛨", title: "{ADMIN_PANEL}",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        nav.push(Route::from(Destination::Dashboard));
                    },
                    "{BACK_TO_DASHBOARD}"
                }
                button { class: "btn btn-ghost", title: "تسجيل الخروج", onclick: on_sign_out, "⎋" }
            }

            div { class: "container",
                div { class: "narrow",
                    Card {
                        h1 { class: "gradient-text", "لوحة التحكم" }
                        p { class: "muted", "إدارة المستخدمين، الطلبات، والإعدادات" }
                    }

                    div { class: "stats",
                        for label in STATS {
                            Card { key: "{label}", class: "compact",
                                h3 { "{label}" }
                                p { class: "stat-value gradient-text", "0" }
                            }
                        }
                    }

                    Card { class: "centered",
                        h2 { "قريباً" }
                        p { class: "muted", "سيتم إضافة وظائف الإدارة الكاملة قريباً" }
                    }
                }
            }
        }
    }
}
