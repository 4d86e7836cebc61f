//! Contact-form draft and submission bookkeeping.
//!
//! Everything here is plain data plus pure updates; the contact section owns one
//! [`InquiryForm`] in a signal and drives the network call around
//! [`InquiryForm::begin_submit`] / [`InquiryForm::finish_submit`].

use api::{InquiryPayload, SubmitError, TermsValue};
use serde::Serialize;

use crate::i18n::Locale;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Retreat,
    Workshop,
    Celebration,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Wedding,
        EventType::Corporate,
        EventType::Retreat,
        EventType::Workshop,
        EventType::Celebration,
        EventType::Other,
    ];

    /// Option value sent to the collector.
    pub fn value(self) -> &'static str {
        match self {
            EventType::Wedding => "wedding",
            EventType::Corporate => "corporate",
            EventType::Retreat => "retreat",
            EventType::Workshop => "workshop",
            EventType::Celebration => "celebration",
            EventType::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.value() == value)
    }

    pub fn label(self, locale: Locale) -> String {
        match self {
            EventType::Wedding => t!(locale, "event-type-wedding"),
            EventType::Corporate => t!(locale, "event-type-corporate"),
            EventType::Retreat => t!(locale, "event-type-retreat"),
            EventType::Workshop => t!(locale, "event-type-workshop"),
            EventType::Celebration => t!(locale, "event-type-celebration"),
            EventType::Other => t!(locale, "event-type-other"),
        }
    }
}

/// Guest-count brackets, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum GuestCount {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-25")]
    UpTo25,
    #[serde(rename = "26-50")]
    UpTo50,
    #[serde(rename = "51-75")]
    UpTo75,
    #[serde(rename = "76-100")]
    UpTo100,
    #[serde(rename = "101-150")]
    UpTo150,
    #[serde(rename = "150+")]
    Over150,
}

impl GuestCount {
    pub const ALL: [GuestCount; 7] = [
        GuestCount::UpTo10,
        GuestCount::UpTo25,
        GuestCount::UpTo50,
        GuestCount::UpTo75,
        GuestCount::UpTo100,
        GuestCount::UpTo150,
        GuestCount::Over150,
    ];

    pub fn value(self) -> &'static str {
        match self {
            GuestCount::UpTo10 => "1-10",
            GuestCount::UpTo25 => "11-25",
            GuestCount::UpTo50 => "26-50",
            GuestCount::UpTo75 => "51-75",
            GuestCount::UpTo100 => "76-100",
            GuestCount::UpTo150 => "101-150",
            GuestCount::Over150 => "150+",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == value)
    }

    pub fn label(self, locale: Locale) -> String {
        match self {
            GuestCount::UpTo10 => t!(locale, "guests-1-10"),
            GuestCount::UpTo25 => t!(locale, "guests-11-25"),
            GuestCount::UpTo50 => t!(locale, "guests-26-50"),
            GuestCount::UpTo75 => t!(locale, "guests-51-75"),
            GuestCount::UpTo100 => t!(locale, "guests-76-100"),
            GuestCount::UpTo150 => t!(locale, "guests-101-150"),
            GuestCount::Over150 => t!(locale, "guests-over-150"),
        }
    }
}

/// Checkbox state. `Indeterminate` exists for parity with the wire format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TermsAcceptance {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl TermsAcceptance {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            TermsAcceptance::Checked
        } else {
            TermsAcceptance::Unchecked
        }
    }

    pub fn is_checked(self) -> bool {
        self == TermsAcceptance::Checked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

/// One user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Text(TextField, String),
    EventType(Option<EventType>),
    GuestCount(Option<GuestCount>),
    Terms(TermsAcceptance),
}

/// Not-yet-submitted contact form values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_type: Option<EventType>,
    pub guest_count: Option<GuestCount>,
    pub message: String,
    pub terms: TermsAcceptance,
}

impl InquiryDraft {
    pub fn apply(&mut self, edit: DraftEdit) {
        match edit {
            DraftEdit::Text(field, value) => *self.text_mut(field) = value,
            DraftEdit::EventType(event_type) => self.event_type = event_type,
            DraftEdit::GuestCount(guest_count) => self.guest_count = guest_count,
            DraftEdit::Terms(terms) => self.terms = terms,
        }
    }

    /// Builder-style [`apply`](Self::apply).
    pub fn with(mut self, edit: DraftEdit) -> Self {
        self.apply(edit);
        self
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::FirstName => &self.first_name,
            TextField::LastName => &self.last_name,
            TextField::Email => &self.email,
            TextField::Phone => &self.phone,
            TextField::Message => &self.message,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::Email => &mut self.email,
            TextField::Phone => &mut self.phone,
            TextField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_payload(&self) -> InquiryPayload {
        InquiryPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            event_type: self.event_type.map(EventType::value).unwrap_or_default().to_string(),
            guest_count: self.guest_count.map(GuestCount::value).unwrap_or_default().to_string(),
            message: self.message.clone(),
            terms: match self.terms {
                TermsAcceptance::Checked => TermsValue::Accepted,
                TermsAcceptance::Unchecked => TermsValue::NotAccepted,
                TermsAcceptance::Indeterminate => TermsValue::Indeterminate,
            },
        }
    }
}

/// Why a submit click did not produce a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    InFlight,
    TermsNotAccepted,
}

/// Identifies one showing of the success banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerTicket(u64);

/// What the view has to do once the request settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft cleared and banner shown; hide it with the ticket after the delay.
    Accepted(BannerTicket),
    /// Draft kept; raise the failure alert once.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InquiryForm {
    pub draft: InquiryDraft,
    sending: bool,
    blocked: Option<SubmitBlocked>,
    banner: Option<BannerTicket>,
    banner_generation: u64,
}

impl InquiryForm {
    pub fn apply(&mut self, edit: DraftEdit) {
        if matches!(edit, DraftEdit::Terms(TermsAcceptance::Checked)) {
            self.blocked = None;
        }
        self.draft.apply(edit);
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn banner_visible(&self) -> bool {
        self.banner.is_some()
    }

    /// Last refusal, kept until the next successful start or terms tick.
    pub fn blocked(&self) -> Option<SubmitBlocked> {
        self.blocked
    }

    /// Start a submission and hand back the payload to post.
    pub fn begin_submit(&mut self, require_terms: bool) -> Result<InquiryPayload, SubmitBlocked> {
        if self.sending {
            return Err(SubmitBlocked::InFlight);
        }
        if require_terms && !self.draft.terms.is_checked() {
            self.blocked = Some(SubmitBlocked::TermsNotAccepted);
            return Err(SubmitBlocked::TermsNotAccepted);
        }
        self.blocked = None;
        self.sending = true;
        Ok(self.draft.to_payload())
    }

    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> SubmitOutcome {
        self.sending = false;
        match result {
            Ok(()) => {
                self.draft.clear();
                self.banner_generation = self.banner_generation.wrapping_add(1);
                let ticket = BannerTicket(self.banner_generation);
                self.banner = Some(ticket);
                SubmitOutcome::Accepted(ticket)
            }
            Err(err) => {
                tracing::warn!(error = %err, "inquiry submission failed; keeping draft");
                SubmitOutcome::Failed
            }
        }
    }

    /// Hide the banner, unless a newer submission has replaced it.
    pub fn hide_banner(&mut self, ticket: BannerTicket) {
        if self.banner == Some(ticket) {
            self.banner = None;
        }
    }
}
