//! Client for the hosted form collector that receives contact inquiries.

mod client;
mod error;
mod wire;

pub use client::{HttpTransport, InquiryClient, Transport, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use wire::{InquiryPayload, TermsValue};
