use dioxus::prelude::*;

use api::InquiryClient;

use crate::components::app_navbar::{nav_link, NavTarget};
use crate::core::config::use_site_config;
use crate::core::format::{mailto_href, tel_href};
use crate::core::inquiry::{
    DraftEdit, EventType, GuestCount, InquiryForm, SubmitBlocked, SubmitOutcome, TermsAcceptance,
    TextField,
};
use crate::core::platform;
use crate::core::timing::after_ms;
use crate::i18n::use_locale;
use crate::t;

fn text_edit(mut form: Signal<InquiryForm>, field: TextField) -> impl FnMut(FormEvent) + 'static {
    move |evt: FormEvent| form.write().apply(DraftEdit::Text(field, evt.value()))
}

/// Contact details plus the inquiry form.
#[component]
pub fn ContactSection() -> Element {
    let locale = use_locale();
    let cfg = use_site_config();
    let client = use_hook({
        let endpoint = cfg.form_endpoint.clone();
        move || InquiryClient::new(endpoint)
    });
    let mut form = use_signal(InquiryForm::default);

    let require_terms = cfg.require_terms_acceptance;
    let banner_ms = cfg.success_banner_ms;

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = match form.write().begin_submit(require_terms) {
            Ok(payload) => payload,
            Err(reason) => {
                tracing::info!(?reason, "inquiry not sent");
                return;
            }
        };
        let client = client.clone();
        spawn(async move {
            let result = client.submit(&payload).await;
            let outcome = form.write().finish_submit(result);
            match outcome {
                SubmitOutcome::Accepted(ticket) => {
                    after_ms(banner_ms, move || form.write().hide_banner(ticket)).await;
                }
                SubmitOutcome::Failed => platform::alert(&t!(locale, "contact-error")),
            }
        });
    };

    let state = form.read().clone();
    let draft = &state.draft;
    let event_value = draft.event_type.map(EventType::value).unwrap_or_default();
    let guest_value = draft.guest_count.map(GuestCount::value).unwrap_or_default();
    let contact = &cfg.contact;

    rsx! {
        section { id: "contact", class: "contact",
            if state.banner_visible() {
                div { class: "contact__success", role: "status",
                    h3 { {t!(locale, "contact-success-title")} }
                    p { {t!(locale, "contact-success-body")} }
                }
            }

            div { class: "contact__grid",
                div { class: "contact__details",
                    p { class: "section__tagline", {t!(locale, "contact-tagline")} }
                    h2 { class: "section__heading", {t!(locale, "contact-heading")} }
                    p { class: "section__description", {t!(locale, "contact-description")} }
                    ul { class: "contact__channels",
                        li { a { href: mailto_href(&contact.reservation_email), "{contact.reservation_email}" } }
                        li { a { href: tel_href(&contact.reservation_phone), "{contact.reservation_phone}" } }
                        li { {t!(locale, "contact-address")} }
                    }
                }

                form { class: "contact__form", onsubmit: on_submit,
                    div { class: "contact__row",
                        label { class: "field",
                            span { class: "field__label", {t!(locale, "contact-first-name")} }
                            input {
                                r#type: "text",
                                name: "firstName",
                                value: "{draft.first_name}",
                                oninput: text_edit(form, TextField::FirstName),
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", {t!(locale, "contact-last-name")} }
                            input {
                                r#type: "text",
                                name: "lastName",
                                value: "{draft.last_name}",
                                oninput: text_edit(form, TextField::LastName),
                            }
                        }
                    }
                    div { class: "contact__row",
                        label { class: "field",
                            span { class: "field__label", {t!(locale, "contact-email")} }
                            input {
                                r#type: "email",
                                name: "email",
                                value: "{draft.email}",
                                oninput: text_edit(form, TextField::Email),
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", {t!(locale, "contact-phone")} }
                            input {
                                r#type: "tel",
                                name: "phone",
                                value: "{draft.phone}",
                                oninput: text_edit(form, TextField::Phone),
                            }
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {t!(locale, "contact-event-type")} }
                        select {
                            name: "eventType",
                            value: "{event_value}",
                            onchange: move |evt: FormEvent| {
                                form.write().apply(DraftEdit::EventType(EventType::from_value(&evt.value())));
                            },
                            option { value: "", {t!(locale, "contact-event-type-placeholder")} }
                            for event_type in EventType::ALL {
                                option {
                                    key: "{event_type.value()}",
                                    value: event_type.value(),
                                    selected: draft.event_type == Some(event_type),
                                    {event_type.label(locale)}
                                }
                            }
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {t!(locale, "contact-guest-count")} }
                        select {
                            name: "guestCount",
                            value: "{guest_value}",
                            onchange: move |evt: FormEvent| {
                                form.write().apply(DraftEdit::GuestCount(GuestCount::from_value(&evt.value())));
                            },
                            option { value: "", {t!(locale, "contact-guest-count-placeholder")} }
                            for guests in GuestCount::ALL {
                                option {
                                    key: "{guests.value()}",
                                    value: guests.value(),
                                    selected: draft.guest_count == Some(guests),
                                    {guests.label(locale)}
                                }
                            }
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {t!(locale, "contact-message")} }
                        textarea {
                            name: "message",
                            rows: "5",
                            placeholder: t!(locale, "contact-message-placeholder"),
                            value: "{draft.message}",
                            oninput: text_edit(form, TextField::Message),
                        }
                    }
                    label { class: "field field--checkbox",
                        input {
                            r#type: "checkbox",
                            name: "terms",
                            checked: draft.terms.is_checked(),
                            onchange: move |evt: FormEvent| {
                                form.write().apply(DraftEdit::Terms(TermsAcceptance::from_checked(evt.checked())));
                            },
                        }
                        span {
                            {t!(locale, "contact-terms-prefix")}
                            " "
                            {nav_link(NavTarget::Terms, &t!(locale, "contact-terms-link"))}
                        }
                    }
                    if state.blocked() == Some(SubmitBlocked::TermsNotAccepted) {
                        p { class: "contact__notice", role: "alert", {t!(locale, "contact-terms-required")} }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: state.is_sending(),
                        if state.is_sending() {
                            {t!(locale, "contact-sending")}
                        } else {
                            {t!(locale, "contact-submit")}
                        }
                    }
                }
            }
        }
    }
}
