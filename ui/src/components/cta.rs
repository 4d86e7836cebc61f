use dioxus::prelude::*;

use crate::core::config::use_site_config;
use crate::core::format::tel_href;
use crate::i18n::use_locale;
use crate::t;

/// "Additional possibilities" band: call or message the manager directly.
#[component]
pub fn CallToAction() -> Element {
    let locale = use_locale();
    let contact = use_site_config().contact;
    let phone_href = tel_href(&contact.manager_phone);

    rsx! {
        section { class: "cta",
            div { class: "cta__inner",
                p { class: "section__tagline", {t!(locale, "cta-eyebrow")} }
                div { class: "section__rule" }
                h2 { class: "section__heading", {t!(locale, "cta-heading")} }
                p { class: "section__description", {t!(locale, "cta-description")} }
                div { class: "cta__actions",
                    a { class: "button button--primary", href: "{phone_href}", "{contact.manager_phone}" }
                    a {
                        class: "button button--whatsapp",
                        href: "{contact.whatsapp_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {t!(locale, "cta-whatsapp")}
                    }
                }
            }
        }
    }
}
