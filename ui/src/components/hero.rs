use dioxus::prelude::*;

use crate::i18n::use_locale;
use crate::t;

const HERO_IMAGE: &str = "/restaurant/_NAG4307-Pano.jpg";

#[component]
pub fn Hero() -> Element {
    let locale = use_locale();

    rsx! {
        section { id: "hero", class: "hero",
            img {
                class: "hero__image",
                src: HERO_IMAGE,
                alt: t!(locale, "hero-image-alt"),
            }
            div { class: "hero__content",
                p { class: "section__tagline", {t!(locale, "hero-tagline")} }
                h1 { class: "hero__heading", {t!(locale, "hero-heading")} }
                p { class: "hero__description", {t!(locale, "hero-description")} }
                div { class: "hero__actions",
                    a { class: "button button--primary", href: "#contact", {t!(locale, "hero-cta-inquire")} }
                    a { class: "button button--ghost", href: "#venues", {t!(locale, "hero-cta-venues")} }
                }
            }
        }
    }
}
