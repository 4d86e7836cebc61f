use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::core::config::use_site_config;
use crate::core::format::{tel_href, today};
use crate::i18n::{use_locale, Locale};
use crate::t;

const LOGO: &str = "/logo.png";

#[component]
pub fn SiteFooter() -> Element {
    let locale = use_locale();
    let contact = use_site_config().contact;
    let mut email = use_signal(String::new);
    let mut noted = use_signal(|| false);

    // The German page lists the general inbox, the English page the reservations desk.
    let footer_email = match locale {
        Locale::En => contact.reservation_email.clone(),
        Locale::De => contact.general_email.clone(),
    };
    let year = today().year().to_string();

    let on_subscribe = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::info!(has_address = !email.peek().is_empty(), "newsletter signup requested");
        noted.set(true);
    };

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__brand",
                    a { href: "#hero",
                        img { class: "footer__logo", src: LOGO, alt: t!(locale, "footer-logo-alt") }
                    }
                    p { {t!(locale, "footer-tagline")} }
                }

                div { class: "footer__column",
                    h2 { class: "footer__heading", {t!(locale, "footer-contact-heading")} }
                    ul {
                        li { {t!(locale, "footer-street")} }
                        li { {t!(locale, "footer-city")} }
                        li { a { href: tel_href(&contact.office_phone), "{contact.office_phone}" } }
                        li { "{footer_email}" }
                    }
                }

                div { class: "footer__column",
                    h2 { class: "footer__heading", {t!(locale, "footer-navigation-heading")} }
                    ul {
                        li { a { href: "#hero", {t!(locale, "footer-nav-home")} } }
                        li { a { href: "#venues", {t!(locale, "footer-nav-venues")} } }
                        li { a { href: "#accommodation", {t!(locale, "footer-nav-events")} } }
                        li { a { href: "#rooms", {t!(locale, "footer-nav-gallery")} } }
                        li { a { href: "#contact", {t!(locale, "footer-nav-contact")} } }
                    }
                }

                div { class: "footer__column",
                    h2 { class: "footer__heading", {t!(locale, "footer-newsletter-heading")} }
                    form { class: "footer__newsletter", onsubmit: on_subscribe,
                        input {
                            r#type: "email",
                            placeholder: t!(locale, "footer-newsletter-placeholder"),
                            value: "{email}",
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        button { class: "button button--primary", r#type: "submit",
                            {t!(locale, "footer-newsletter-subscribe")}
                        }
                    }
                    if noted() {
                        p { class: "footer__noted", {t!(locale, "footer-newsletter-noted")} }
                    }
                    div { class: "footer__socials",
                        a { href: "#", aria_label: t!(locale, "footer-follow-facebook"), "Facebook" }
                        a { href: "#", aria_label: t!(locale, "footer-follow-instagram"), "Instagram" }
                        a { href: "#", aria_label: t!(locale, "footer-follow-linkedin"), "LinkedIn" }
                    }
                }
            }

            div { class: "footer__legal",
                p { {t!(locale, "footer-copyright", year = year)} }
                div { class: "footer__legal-links",
                    a { href: "#", {t!(locale, "footer-privacy")} }
                    {nav_link(NavTarget::Terms, &t!(locale, "footer-terms"))}
                    a { href: "#", {t!(locale, "footer-imprint")} }
                }
            }
        }
    }
}
