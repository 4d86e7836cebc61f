//! JSON body accepted by the form collector.
//!
//! Field order is part of the contract: serde keeps declaration order, so the
//! encoded object always reads `firstName, lastName, email, phone, eventType,
//! guestCount, message, terms`.

use serde::{Serialize, Serializer};

/// One inquiry as it travels over the wire.
///
/// Select fields carry the option *value* (`"wedding"`, `"101-150"`) or an empty
/// string when nothing was picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub guest_count: String,
    pub message: String,
    pub terms: TermsValue,
}

impl InquiryPayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Checkbox state as the collector receives it: `true`, `false` or `"indeterminate"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TermsValue {
    Accepted,
    #[default]
    NotAccepted,
    Indeterminate,
}

impl Serialize for TermsValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TermsValue::Accepted => serializer.serialize_bool(true),
            TermsValue::NotAccepted => serializer.serialize_bool(false),
            TermsValue::Indeterminate => serializer.serialize_str("indeterminate"),
        }
    }
}
