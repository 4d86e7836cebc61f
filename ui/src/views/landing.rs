use dioxus::prelude::*;

use crate::components::{
    Accommodation, AppNavbar, CallToAction, ContactSection, Hero, RoomShowcase, SiteFooter,
    VenuePortfolio,
};
use crate::i18n::Locale;
use crate::t;

/// The landing page in one language. Sections read the locale from context.
#[component]
pub fn Landing(locale: Locale) -> Element {
    use_context_provider(|| locale);
    tracing::debug!(locale = locale.tag(), "landing render");

    rsx! {
        document::Title { {t!(locale, "page-title-home")} }
        div { class: "page page--landing", lang: locale.html_lang(),
            AppNavbar {}
            main {
                Hero {}
                VenuePortfolio {}
                CallToAction {}
                Accommodation {}
                RoomShowcase {}
                ContactSection {}
            }
            SiteFooter {}
        }
    }
}
