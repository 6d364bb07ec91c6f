//! Public landing page.

use crate::backend::services::{PublicState, resolve_public_access};
use crate::backend::utils::route::Route;
use crate::frontend::components::common::{Loader, Logo};
use crate::frontend::services::messages::{RETENTION_NOTE, SIGN_IN, START_FREE};
use crate::frontend::services::use_app;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "✧",
        "توليد ذكي",
        "استخدم أحدث تقنيات الذكاء الاصطناعي لتوليد صور وفيديوهات عالية الجودة",
    ),
    (
        "⚡",
        "سرعة فائقة",
        "احصل على نتائج مذهلة في ثوانٍ معدودة بفضل البنية التحتية القوية",
    ),
    (
        "⛨",
        "أمان وخصوصية",
        "محتواك محفوظ بأعلى معايير الأمان مع حذف تلقائي بعد 7 أيام",
    ),
];

#[component]
pub fn Index() -> Element {
    let app = use_app();
    let nav = use_navigator();
    let mut state = use_signal(PublicState::default);

    // Signed-in visitors never see the marketing page.
    use_future(move || {
        let client = app.client.clone();
        async move {
            let resolved = resolve_public_access(&client).await;
            if let PublicState::Forward(destination) = resolved {
                nav.replace(Route::from(destination));
            }
            state.set(resolved);
        }
    });

    if state() != PublicState::Show {
        return rsx! { Loader {} };
    }

    let to_auth = move |_| {
        nav.push(Route::Auth {});
    };

    rsx! {
        div { class: "landing",
            header { class: "container header-inner",
                Logo {}
                div { class: "header-actions",
                    button { class: "btn btn-ghost", onclick: to_auth, "{SIGN_IN}" }
                    button { class: "btn btn-primary", onclick: to_auth, "{START_FREE}" }
                }
            }

            section { class: "container hero",
                h1 {
                    "حوّل أفكارك إلى "
                    span { class: "gradient-text", "واقع مرئي" }
                }
                p { class: "muted",
                    "منصة احترافية لتوليد الصور والفيديوهات باستخدام الذكاء الاصطناعي. "
                    "صمم، أنشئ، وشارك محتوى مذهل في ثوانٍ معدودة."
                }
                div { class: "hero-actions",
                    button { class: "btn btn-primary btn-large", onclick: to_auth, "ابدأ الإنشاء الآن" }
                    button { class: "btn btn-outline btn-large", "اكتشف الإمكانيات" }
                }

                div { class: "features",
                    for (icon, title, body) in FEATURES {
                        div { key: "{title}", class: "glass card",
                            div { class: "brand-icon", "{icon}" }
                            h3 { "{title}" }
                            p { class: "muted", "{body}" }
                        }
                    }
                }

                div { class: "glass cta",
                    h2 {
                        "جاهز لإنشاء "
                        span { class: "gradient-text", "محتوى رائع" }
                        "؟"
                    }
                    p { class: "muted", "انضم الآن وابدأ رحلتك في عالم الإبداع بالذكاء الاصطناعي" }
                    button { class: "btn btn-primary btn-large", onclick: to_auth, "{START_FREE}" }
                    p { class: "muted", "ملاحظة: {RETENTION_NOTE}" }
                }
            }

            footer { class: "container footer muted",
                p { "© 2024 AI Studio. جميع الحقوق محفوظة." }
            }
        }
    }
}
