use dioxus::prelude::*;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::core::config::use_site_config;
use crate::core::format::{format_date, mailto_href, tel_href, today};
use crate::i18n::Locale;
use crate::t;

/// Terms and conditions, with a "last updated" line showing today's date.
#[component]
pub fn Terms(#[props(default)] locale: Locale) -> Element {
    use_context_provider(|| locale);
    let contact = use_site_config().contact;
    let updated = format_date(locale, today());

    rsx! {
        document::Title { {t!(locale, "page-title-terms")} }
        div { class: "page page--terms", lang: locale.html_lang(),
            article { class: "terms",
                h1 { class: "terms__title", {t!(locale, "terms-title")} }

                section { class: "terms__section",
                    h2 { {t!(locale, "terms-intro-heading")} }
                    p { {t!(locale, "terms-intro-body")} }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-definitions-heading")} }
                    ul {
                        li { {t!(locale, "terms-definitions-website", website = contact.website.clone())} }
                        li { {t!(locale, "terms-definitions-service")} }
                        li { {t!(locale, "terms-definitions-user")} }
                    }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-ip-heading")} }
                    p { {t!(locale, "terms-ip-body")} }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-obligations-heading")} }
                    p { {t!(locale, "terms-obligations-intro")} }
                    ul {
                        li { {t!(locale, "terms-obligations-accurate")} }
                        li { {t!(locale, "terms-obligations-lawful")} }
                        li { {t!(locale, "terms-obligations-disrupt")} }
                    }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-data-heading")} }
                    p { {t!(locale, "terms-data-body")} }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-booking-heading")} }
                    p { {t!(locale, "terms-booking-body")} }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-liability-heading")} }
                    p { {t!(locale, "terms-liability-body")} }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-law-heading")} }
                    p { {t!(locale, "terms-law-body")} }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-changes-heading")} }
                    p { {t!(locale, "terms-changes-body")} }
                }
                section { class: "terms__section",
                    h2 { {t!(locale, "terms-contact-heading")} }
                    p { {t!(locale, "terms-contact-body")} }
                    address { class: "terms__contact",
                        p { {t!(locale, "brand-name")} }
                        p { {t!(locale, "footer-street")} }
                        p { {t!(locale, "footer-city")} }
                        p {
                            {t!(locale, "terms-contact-email-label")}
                            " "
                            a { href: mailto_href(&contact.general_email), "{contact.general_email}" }
                        }
                        p {
                            {t!(locale, "terms-contact-phone-label")}
                            " "
                            a { href: tel_href(&contact.office_phone), "{contact.office_phone}" }
                        }
                    }
                }

                footer { class: "terms__footer",
                    p { {t!(locale, "terms-last-updated", date = updated)} }
                    {nav_link(NavTarget::Home(locale), &t!(locale, "terms-back-home"))}
                }
            }
        }
    }
}
