//! Static content catalogue: ids, ordering and image sources.
//!
//! Entries carry no copy of their own. Every visible string resolves through the
//! Fluent catalogue with keys derived from the entry id, so one dataset serves all
//! locales.

pub mod rooms;
pub mod venues;

pub use rooms::{rooms, Room, RoomEntry, ROOMS};
pub use venues::{venues, Venue, VenueEntry, VENUES};

/// An image ready to render: source path plus localized alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub src: String,
    pub alt: String,
}

/// Every message key the catalogue resolves at runtime.
pub fn message_keys() -> Vec<String> {
    VENUES
        .iter()
        .flat_map(VenueEntry::message_keys)
        .chain(ROOMS.iter().flat_map(RoomEntry::message_keys))
        .collect()
}
