//! Site-wide settings shared by the sections.
//!
//! The web build has no process environment at runtime, so overrides are read at
//! compile time (`THALHEIM_FORM_ENDPOINT`, `THALHEIM_REQUIRE_TERMS`).

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Form collector receiving contact inquiries.
    pub form_endpoint: String,
    /// Upper bound for a carousel transition; releases the guard if the animation
    /// end event never arrives.
    pub carousel_fallback_ms: u64,
    /// How long the "thank you" banner stays up after a successful inquiry.
    pub success_banner_ms: u64,
    /// Entries shown while the portfolio is collapsed.
    pub collapsed_entries: usize,
    /// Rough rendered height of one hidden entry, used to restore the scroll offset.
    pub scroll_estimate_per_entry_px: f64,
    /// Delay before restoring the scroll offset (lets the collapse re-render first).
    pub scroll_restore_delay_ms: u64,
    /// Refuse to send an inquiry until the terms checkbox is ticked.
    pub require_terms_acceptance: bool,
    pub contact: ContactDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDetails {
    pub reservation_email: String,
    pub reservation_phone: String,
    pub office_phone: String,
    pub manager_phone: String,
    pub whatsapp_link: String,
    pub general_email: String,
    pub website: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            reservation_email: "reservierung@schlossthalheim.at".into(),
            reservation_phone: "+43 2274 7844".into(),
            office_phone: "+43 2275 5575".into(),
            manager_phone: "+43 1234 567890".into(),
            whatsapp_link: "https://wa.me/431234567890".into(),
            general_email: "info@schloss-thalheim.at".into(),
            website: "www.schloss-thalheim.at".into(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: api::DEFAULT_ENDPOINT.to_string(),
            carousel_fallback_ms: 400,
            success_banner_ms: 5_000,
            collapsed_entries: 3,
            scroll_estimate_per_entry_px: 100.0,
            scroll_restore_delay_ms: 10,
            require_terms_acceptance: true,
            contact: ContactDetails::default(),
        }
    }
}

impl SiteConfig {
    /// Defaults with build-time overrides applied.
    pub fn from_build_env() -> Self {
        Self::default().with_overrides(
            option_env!("THALHEIM_FORM_ENDPOINT"),
            option_env!("THALHEIM_REQUIRE_TERMS"),
        )
    }

    fn with_overrides(mut self, endpoint: Option<&str>, require_terms: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            self.form_endpoint = endpoint.to_string();
        }
        if let Some(flag) = require_terms.and_then(parse_flag) {
            self.require_terms_acceptance = flag;
        }
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Config provided by the app shell, or the defaults.
pub fn use_site_config() -> SiteConfig {
    try_use_context::<SiteConfig>().unwrap_or_default()
}
