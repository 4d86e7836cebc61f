//! Internationalization (i18n) support for `thalheim-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading + language negotiation)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/thalheim-ui.ftl   (fallback/reference)
//!   de-DE/thalheim-ui.ftl
//! ```
//!
//! The site is served under one root per locale (`/` and `/de`), so the locale is a
//! property of the page, not of the process. Each [`Locale`] therefore owns its own
//! lazily built loader and both can be used side by side:
//! ```ignore
//! use ui::i18n::Locale;
//! let heading = ui::t!(Locale::De, "portfolio-heading");
//! let dots = ui::t!(locale, "carousel-goto", index = 2);
//! ```
//!
//! Keys that come from the content catalogue (venue and room text) are not known to
//! the macro at compile time and go through [`lookup`]; the completeness tests cover
//! them separately.
//!
//! To add a new locale:
//! 1. Copy `en-US/thalheim-ui.ftl` to `i18n/<lang-id>/thalheim-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Add a [`Locale`] variant and register the file in `tests/i18n_missing_keys.rs`.
use dioxus::prelude::*;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Locale-aware translation macro.
/// Examples:
///     t!(locale, "nav-venues")
///     t!(locale, "footer-copyright", year = 2025)
///
/// Expands to `fl!(loader(locale), ...)`, so keys and arguments are checked against
/// the fallback catalogue at compile time.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "thalheim-ui";

const FALLBACK: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Languages the site is published in. English is the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::De];

    /// Fluent language tag (directory name under `i18n/`).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::De => "de-DE",
        }
    }

    /// Value for the document `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// The locale offered by the language switch.
    pub fn other(self) -> Self {
        match self {
            Locale::En => Locale::De,
            Locale::De => Locale::En,
        }
    }

    fn language_id(self) -> LanguageIdentifier {
        self.tag().parse().expect("valid built-in language identifier")
    }
}

static EN_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::En));
static DE_LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Locale::De));

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK.parse().expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[locale.language_id()]) {
        tracing::warn!(locale = locale.tag(), error = %err, "failed selecting language; continuing with fallback");
    }
    loader.set_use_isolating(false);
    loader
}

/// Loader bound to `locale`; consumed by [`t!`](crate::t) and [`lookup`].
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    match locale {
        Locale::En => &EN_LOADER,
        Locale::De => &DE_LOADER,
    }
}

/// Runtime lookup for keys assembled from the content catalogue.
pub fn lookup(locale: Locale, key: &str) -> String {
    loader(locale).get(key)
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Locale provided by the enclosing page (English when rendered outside a page).
pub fn use_locale() -> Locale {
    try_use_context::<Locale>().unwrap_or_default()
}
