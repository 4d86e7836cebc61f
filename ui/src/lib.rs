//! Shared UI crate for the Schloss Thalheim site: sections, pure state, i18n and
//! the content catalogue. Platform crates only add routing and the app shell.

use dioxus::prelude::*;

/// Shared site theme; the app shell links it once.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Site header with locale switch (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::{register_nav, AppNavbar, NavBuilder, NavTarget};

    pub mod carousel;
    pub use carousel::ImageCarousel;

    mod accommodation;
    mod contact;
    mod cta;
    mod footer;
    mod hero;
    mod portfolio;
    mod rooms;
    pub use accommodation::Accommodation;
    pub use contact::ContactSection;
    pub use cta::CallToAction;
    pub use footer::SiteFooter;
    pub use hero::Hero;
    pub use portfolio::VenuePortfolio;
    pub use rooms::RoomShowcase;
}
