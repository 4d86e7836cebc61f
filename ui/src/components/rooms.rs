use dioxus::prelude::*;

use crate::components::carousel::ImageCarousel;
use crate::content::{rooms, Room};
use crate::i18n::use_locale;
use crate::t;

/// Room cards, each with its own carousel.
#[component]
pub fn RoomShowcase() -> Element {
    let locale = use_locale();
    let entries = use_hook(move || rooms(locale));

    rsx! {
        section { id: "rooms", class: "rooms",
            header { class: "section__header",
                p { class: "section__tagline", {t!(locale, "rooms-tagline")} }
                h2 { class: "section__heading", {t!(locale, "rooms-heading")} }
                p { class: "section__description", {t!(locale, "rooms-description")} }
            }
            div { class: "rooms__grid",
                for room in entries {
                    RoomCard { key: "{room.id}", room: room.clone() }
                }
            }
            div { class: "rooms__footer",
                a { class: "button button--ghost", href: "#contact", {t!(locale, "rooms-view-all")} }
            }
        }
    }
}

#[component]
fn RoomCard(room: Room) -> Element {
    let locale = use_locale();

    rsx! {
        article { class: "room-card",
            ImageCarousel { images: room.images.clone() }
            div { class: "room-card__meta",
                span { class: "room-card__type", "{room.room_type}" }
                span { class: "room-card__capacity", "{room.capacity}" }
            }
            a { class: "room-card__title", href: room.link,
                h3 { "{room.title}" }
            }
            p { class: "room-card__description", "{room.description}" }
            a { class: "button button--link", href: room.link, {t!(locale, "rooms-book-now")} }
        }
    }
}
