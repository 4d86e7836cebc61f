use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{register_nav, NavBuilder};
use ui::core::config::SiteConfig;
use ui::i18n::Locale;
use ui::views::{Landing, Terms};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/de")]
    HomeDe {},
    #[route("/terms-and-conditions")]
    TermsAndConditions {},
}

fn nav_english(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_german(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::HomeDe {},
        "{label}"
    })
}
fn nav_terms(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::TermsAndConditions {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SiteConfig::from_build_env);
    register_nav(NavBuilder {
        english: nav_english,
        german: nav_german,
        terms: nav_terms,
    });

    rsx! {
        document::Link { rel: "icon", href: "/favicon.ico" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! { Landing { locale: Locale::En } }
}

#[component]
fn HomeDe() -> Element {
    rsx! { Landing { locale: Locale::De } }
}

#[component]
fn TermsAndConditions() -> Element {
    rsx! { Terms { locale: Locale::En } }
}
