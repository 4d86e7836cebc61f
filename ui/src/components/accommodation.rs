use dioxus::prelude::*;

use crate::i18n::use_locale;
use crate::t;

const ROOM_IMAGE: &str = "/room.jpeg";

#[component]
pub fn Accommodation() -> Element {
    let locale = use_locale();

    rsx! {
        section { id: "accommodation", class: "accommodation",
            div { class: "accommodation__grid",
                div { class: "accommodation__copy",
                    h2 { class: "section__heading", {t!(locale, "accommodation-heading")} }
                    p { class: "section__description", {t!(locale, "accommodation-description")} }
                    div { class: "accommodation__actions",
                        a { class: "button button--primary", href: "#rooms", {t!(locale, "accommodation-view-rooms")} }
                        a { class: "button button--link", href: "#contact", {t!(locale, "accommodation-learn-more")} }
                    }
                }
                img {
                    class: "accommodation__image",
                    src: ROOM_IMAGE,
                    alt: t!(locale, "accommodation-image-alt"),
                }
            }
        }
    }
}
