use crate::i18n::{use_locale, Locale};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Router links supplied by the platform crate.
///
/// `ui` does not know the platform's `Route` enum, so the app shell registers one
/// builder per page before rendering the router. Each builder receives the
/// localized label and returns a `Link` that already contains it:
/// ```ignore
/// use ui::components::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     english: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     german: |label| rsx!( Link { class: "navbar__link", to: Route::HomeDe {}, "{label}" } ),
///     terms: |label| rsx!( Link { class: "navbar__link", to: Route::TermsAndConditions {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder, plain anchors to the same paths are rendered.
pub struct NavBuilder {
    pub english: fn(label: &str) -> Element,
    pub german: fn(label: &str) -> Element,
    pub terms: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("nav builder already registered");
    }
}

/// Pages reachable through the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home(Locale),
    Terms,
}

impl NavTarget {
    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home(Locale::En) => "/",
            NavTarget::Home(Locale::De) => "/de",
            NavTarget::Terms => "/terms-and-conditions",
        }
    }
}

/// Link to `target` labelled `label`, via the registered builder when present.
pub fn nav_link(target: NavTarget, label: &str) -> Element {
    match NAV_BUILDER.get() {
        Some(b) => match target {
            NavTarget::Home(Locale::En) => (b.english)(label),
            NavTarget::Home(Locale::De) => (b.german)(label),
            NavTarget::Terms => (b.terms)(label),
        },
        None => rsx!(a {
            class: "navbar__link",
            href: target.path(),
            "{label}"
        }),
    }
}

/// Site header: brand, in-page section anchors and the switch to the other locale.
#[component]
pub fn AppNavbar() -> Element {
    let locale = use_locale();
    let other = locale.other();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    {nav_link(NavTarget::Home(locale), &t!(locale, "brand-name"))}
                }

                nav { class: "navbar__links",
                    a { class: "navbar__link", href: "#venues", {t!(locale, "nav-venues")} }
                    a { class: "navbar__link", href: "#accommodation", {t!(locale, "nav-accommodation")} }
                    a { class: "navbar__link", href: "#rooms", {t!(locale, "nav-rooms")} }
                    a { class: "navbar__link", href: "#contact", {t!(locale, "nav-contact")} }
                }

                div { class: "navbar__locale",
                    span { class: "visually-hidden", {t!(locale, "nav-language-label")} }
                    span { lang: other.html_lang(),
                        {nav_link(NavTarget::Home(other), &t!(locale, "nav-switch-language"))}
                    }
                }
            }
        }
    }
}
