//! Sign-in and sign-up page.

use crate::backend::services::credentials::validate;
use crate::backend::services::{Destination, PublicState, resolve_public_access};
use crate::backend::utils::route::Route;
use crate::frontend::components::common::{Card, Loader, Logo};
use crate::frontend::services::messages::{
    CHECK_EMAIL, SIGN_IN, SIGN_UP, SIGNED_IN, credential_error,
};
use crate::frontend::services::{use_app, use_toasts};
use dioxus::prelude::*;
use dioxus_router::use_navigator;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

#[component]
pub fn Auth() -> Element {
    let app = use_app();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut state = use_signal(PublicState::default);
    let mut mode = use_signal(|| Mode::SignIn);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Already signed in: straight to the dashboard.
    let gate_client = app.client.clone();
    use_future(move || {
        let client = gate_client.clone();
        async move {
            let resolved = resolve_public_access(&client).await;
            if let PublicState::Forward(destination) = resolved {
                nav.replace(Route::from(destination));
            }
            state.set(resolved);
        }
    });

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }

        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        if let Err(invalid) = validate(&email_value, &password_value) {
            error.set(Some(credential_error(invalid)));
            return;
        }

        error.set(None);
        busy.set(true);
        let client = app.client.clone();
        let current_mode = mode();
        spawn(async move {
            let result = match current_mode {
                Mode::SignIn => client
                    .sign_in_with_password(&email_value, &password_value)
                    .await
                    .map(Some),
                Mode::SignUp => client.sign_up(&email_value, &password_value).await,
            };
            busy.set(false);

            match result {
                Ok(Some(_)) => {
                    toasts.success(SIGNED_IN);
                    nav.replace(Route::from(Destination::Dashboard));
                }
                Ok(None) => {
                    toasts.info(CHECK_EMAIL);
                    mode.set(Mode::SignIn);
                }
                Err(e) => {
                    log::warn!("Authentication failed for {email_value}: {e}");
                    error.set(Some(e.message().to_string()));
                }
            }
        });
    };

    if state() != PublicState::Show {
        return rsx! { Loader {} };
    }

    let (title, switch_label) = match mode() {
        Mode::SignIn => (SIGN_IN, SIGN_UP),
        Mode::SignUp => (SIGN_UP, SIGN_IN),
    };

    rsx! {
        div { class: "container",
            Card { class: "auth-card",
                Logo {}
                h1 { "{title}" }
                form { onsubmit: on_submit,
                    div { class: "field",
                        label { r#for: "email", "البريد الإلكتروني" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            autofocus: true,
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "password", "كلمة المرور" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "danger", "{message}" }
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "..." } else { "{title}" }
                    }
                }
                button {
                    class: "auth-switch",
                    onclick: move |_| {
                        error.set(None);
                        mode.set(if mode() == Mode::SignIn { Mode::SignUp } else { Mode::SignIn });
                    },
                    "{switch_label}"
                }
            }
        }
    }
}
