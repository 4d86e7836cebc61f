use dioxus::prelude::*;

use crate::content::Picture;
use crate::core::carousel::{CarouselState, TransitionTicket};
use crate::core::config::use_site_config;
use crate::core::platform;
use crate::core::timing::after_ms;
use crate::i18n::use_locale;
use crate::t;

/// Image rotation shared by venue cards and room cards.
///
/// Every image stays mounted; the current one carries `carousel__image--active`,
/// whose CSS animation end releases the transition guard. A fallback timer
/// releases it too, so a lost event never wedges the buttons.
#[component]
pub fn ImageCarousel(images: Vec<Picture>) -> Element {
    let locale = use_locale();
    let fallback_ms = use_site_config().carousel_fallback_ms;
    let mut state = use_signal(|| CarouselState::new(images.len()));

    use_effect({
        let images = images.clone();
        use_reactive!(|(images,)| {
            platform::preload_images(images.iter().map(|p| p.src.as_str()));
            if state.peek().len() != images.len() {
                state.write().resize(images.len());
            }
        })
    });

    let current = state.read().clone();

    if current.is_empty() {
        return rsx! {
            div { class: "carousel carousel--empty",
                span { class: "carousel__placeholder", {t!(locale, "carousel-empty")} }
            }
        };
    }

    let on_animation_end = move |_: AnimationEvent| {
        let pending = state.peek().pending();
        if let Some(ticket) = pending {
            state.write().finish(ticket);
        }
    };

    rsx! {
        div { class: "carousel",
            div { class: "carousel__frame",
                for (i , picture) in images.iter().enumerate() {
                    img {
                        key: "{i}",
                        class: if i == current.index() { "carousel__image carousel__image--active" } else { "carousel__image" },
                        src: "{picture.src}",
                        alt: "{picture.alt}",
                        aria_hidden: if i != current.index() { "true" } else { "false" },
                        onanimationend: on_animation_end,
                    }
                }
            }

            if current.shows_controls() {
                button {
                    class: "carousel__control carousel__control--prev",
                    r#type: "button",
                    aria_label: t!(locale, "carousel-previous"),
                    onclick: move |_| advance(state, fallback_ms, CarouselState::previous),
                    "‹"
                }
                button {
                    class: "carousel__control carousel__control--next",
                    r#type: "button",
                    aria_label: t!(locale, "carousel-next"),
                    onclick: move |_| advance(state, fallback_ms, CarouselState::next),
                    "›"
                }
                div { class: "carousel__indicators",
                    for (i , is_current) in current.indicators() {
                        button {
                            key: "{i}",
                            class: if is_current { "carousel__dot carousel__dot--active" } else { "carousel__dot" },
                            r#type: "button",
                            aria_label: t!(locale, "carousel-goto", index = (i + 1).to_string()),
                            onclick: move |_| {
                                state.write().jump_to(i);
                            },
                        }
                    }
                }
            }
        }
    }
}

/// Run a guarded step and arm the fallback release for its ticket.
fn advance(
    mut state: Signal<CarouselState>,
    fallback_ms: u64,
    step: fn(&mut CarouselState) -> Option<TransitionTicket>,
) {
    let Some(ticket) = step(&mut state.write()) else {
        return;
    };
    spawn(async move {
        if after_ms(fallback_ms, move || state.write().finish(ticket)).await {
            tracing::debug!("carousel transition released by fallback timer");
        }
    });
}
