use dioxus::prelude::*;

use crate::components::carousel::ImageCarousel;
use crate::content::{venues, Venue};
use crate::core::config::use_site_config;
use crate::core::platform;
use crate::core::reveal::RevealToggle;
use crate::core::timing::sleep_ms;
use crate::i18n::use_locale;
use crate::t;

/// Venue list showing the first few entries until "see all" is pressed.
#[component]
pub fn VenuePortfolio() -> Element {
    let locale = use_locale();
    let cfg = use_site_config();
    let entries = use_hook(move || venues(locale));
    let mut reveal = use_signal(|| RevealToggle::new(cfg.collapsed_entries));

    let total = entries.len();
    let per_entry_px = cfg.scroll_estimate_per_entry_px;
    let restore_delay = cfg.scroll_restore_delay_ms;

    let on_toggle = move |_: MouseEvent| {
        let restore = reveal.write().toggle(total, platform::scroll_y(), per_entry_px);
        if let Some(y) = restore {
            spawn(async move {
                sleep_ms(restore_delay).await;
                platform::scroll_to_y(y);
            });
        }
    };

    let shown: Vec<Venue> = reveal.read().visible(&entries).to_vec();
    let toggle_label = if reveal.read().is_expanded() {
        t!(locale, "portfolio-show-fewer")
    } else {
        t!(locale, "portfolio-show-all")
    };

    rsx! {
        section { id: "venues", class: "portfolio",
            header { class: "section__header",
                p { class: "section__tagline", {t!(locale, "portfolio-tagline")} }
                h2 { class: "section__heading", {t!(locale, "portfolio-heading")} }
                p { class: "section__description", {t!(locale, "portfolio-description")} }
            }

            div { class: "portfolio__list",
                for venue in shown {
                    VenueCard { key: "{venue.id}", venue: venue.clone() }
                }
            }

            if reveal.read().has_hidden(total) {
                div { class: "portfolio__toggle",
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: on_toggle,
                        "{toggle_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn VenueCard(venue: Venue) -> Element {
    let locale = use_locale();

    rsx! {
        article { class: "venue-card",
            ImageCarousel { images: venue.images.clone() }
            div { class: "venue-card__body",
                h3 { class: "venue-card__title", "{venue.title}" }
                p { class: "venue-card__description", "{venue.description}" }
                dl { class: "venue-card__facts",
                    dt { {t!(locale, "venue-capacity-label")} }
                    dd { "{venue.capacity}" }
                    dt { {t!(locale, "venue-area-label")} }
                    dd { "{venue.area}" }
                }
                h4 { class: "venue-card__features-heading", {t!(locale, "venue-features-heading")} }
                ul { class: "venue-card__features",
                    for feature in venue.features.iter() {
                        li { key: "{feature}", "{feature}" }
                    }
                }
            }
        }
    }
}
