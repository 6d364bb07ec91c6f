//! Baseline protected view: credit balance and the generation form.

use crate::backend::services::{
    ContentKind, DashboardUpdate, Destination, Submission, can_submit, run_dashboard, sign_out,
    submit,
};
use crate::backend::supabase::User;
use crate::backend::utils::route::Route;
use crate::frontend::components::common::{Card, Header, Loader};
use crate::frontend::services::messages::{
    ADMIN_PANEL, COMING_SOON, CREDITS, EMPTY_PROMPT, RETENTION_NOTE, cost_label, generate_label,
    insufficient_credits, kind_label,
};
use crate::frontend::services::{use_app, use_toasts};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[component]
pub fn Dashboard() -> Element {
    let app = use_app();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut user = use_signal(|| None::<User>);
    let mut credits = use_signal(|| 0_i64);
    let mut kind = use_signal(ContentKind::default);
    let mut prompt = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut signing_out = use_signal(|| false);

    // One task per mount. Dropping the task drops the subscription with it.
    let mount_client = app.client.clone();
    use_future(move || {
        let client = mount_client.clone();
        async move {
            run_dashboard(&client, move || *signing_out.peek(), move |update| match update {
                DashboardUpdate::Admitted(admitted) | DashboardUpdate::SessionChanged(admitted) => {
                    user.set(Some(admitted));
                }
                DashboardUpdate::Credits(balance) => credits.set(balance),
                DashboardUpdate::Redirect(destination) => {
                    nav.replace(Route::from(destination));
                }
            })
            .await;
        }
    });

    let signout_client = app.client.clone();
    let on_sign_out = move |_| {
        signing_out.set(true);
        let client = signout_client.clone();
        spawn(async move {
            let destination = sign_out(&client).await;
            nav.replace(Route::from(destination));
        });
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        match submit(&prompt.read(), kind(), credits()) {
            Submission::EmptyPrompt => toasts.error(EMPTY_PROMPT),
            Submission::InsufficientCredits { required } => {
                toasts.error(insufficient_credits(required));
            }
            Submission::Pending => {
                submitting.set(true);
                toasts.info(COMING_SOON);
                submitting.set(false);
            }
        }
    };

    if user.read().is_none() {
        return rsx! { Loader {} };
    }

    let selected = kind();
    let enabled = can_submit(credits(), selected, submitting());
    let generate = generate_label(selected);
    let shortfall = (credits() < selected.cost()).then(|| insufficient_credits(selected.cost()));
    let options: Vec<_> = ContentKind::ALL
        .into_iter()
        .map(|option| (option, kind_label(option), cost_label(option)))
        .collect();
    let email = user
        .read()
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div { class: "dashboard",
            Header {
                div { class: "credits",
                    span { "🪙" }
                    strong { "{credits}" }
                    span { class: "muted", "{CREDITS}" }
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        nav.push(Route::from(Destination::Admin));
                    },
                    "{ADMIN_PANEL}"
                }
                button { class: "btn btn-ghost", title: "تسجيل الخروج", onclick: on_sign_out, "⎋" }
            }

            div { class: "container",
                div { class: "narrow",
                    Card {
                        h1 {
                            "مرحباً، "
                            span { class: "gradient-text", "{email}" }
                        }
                        p { class: "muted", "ابدأ بإنشاء محتوى مذهل باستخدام الذكاء الاصطناعي" }
                    }

                    Card {
                        h2 { "توليد محتوى جديد" }
                        form { onsubmit: on_submit,
                            div { class: "field",
                                label { "نوع المحتوى" }
                                div { class: "kind-grid",
                                    for (option, label, cost) in options {
                                        button {
                                            key: "{label}",
                                            r#type: "button",
                                            class: if option == selected { "kind-option selected" } else { "kind-option" },
                                            onclick: move |_| kind.set(option),
                                            p { strong { "{label}" } }
                                            p { class: "muted", "{cost}" }
                                        }
                                    }
                                }
                            }

                            div { class: "field",
                                label { r#for: "prompt", "وصف المحتوى" }
                                textarea {
                                    id: "prompt",
                                    value: "{prompt}",
                                    placeholder: "صف المحتوى الذي تريد توليده...",
                                    oninput: move |e| prompt.set(e.value()),
                                }
                            }

                            button {
                                class: "btn btn-primary btn-block",
                                r#type: "submit",
                                disabled: !enabled,
                                if submitting() { "جاري التوليد..." } else { "{generate}" }
                            }

                            if let Some(message) = shortfall {
                                p { class: "danger", "{message}" }
                            }
                        }
                    }

                    Card { class: "compact centered",
                        p {
                            strong { "ملاحظة: " }
                            "{RETENTION_NOTE}"
                        }
                    }
                }
            }
        }
    }
}
