use super::Picture;
use crate::i18n::{lookup, Locale};

const PLACEHOLDER: &str = "https://d22po4pjz3o32e.cloudfront.net/placeholder-image-landscape.svg";

/// Where a room's image alt texts come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltSource {
    /// `room-<id>-image-<n>-alt`
    Own,
    /// Shared placeholder captions `room-placeholder-image-<n>-alt`.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomEntry {
    pub id: &'static str,
    pub images: &'static [&'static str],
    pub alts: AltSource,
    /// Target of the title and "book now" links.
    pub link: &'static str,
}

pub const ROOMS: [RoomEntry; 3] = [
    RoomEntry {
        id: "standard",
        images: &[
            "/standart/DSC_2802_final.jpg",
            "/standart/DSC_2898.jpg",
            "/standart/DSC_2833_final2.jpg",
        ],
        alts: AltSource::Own,
        link: "#contact",
    },
    RoomEntry {
        id: "queens-quarters",
        images: &[PLACEHOLDER, PLACEHOLDER, PLACEHOLDER],
        alts: AltSource::Placeholder,
        link: "#contact",
    },
    RoomEntry {
        id: "knights-tower",
        images: &[PLACEHOLDER, PLACEHOLDER, PLACEHOLDER],
        alts: AltSource::Placeholder,
        link: "#contact",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: &'static str,
    pub room_type: String,
    pub capacity: String,
    pub title: String,
    pub description: String,
    pub link: &'static str,
    pub images: Vec<Picture>,
}

impl RoomEntry {
    fn key(&self, suffix: &str) -> String {
        format!("room-{}-{suffix}", self.id)
    }

    fn image_alt_key(&self, position: usize) -> String {
        match self.alts {
            AltSource::Own => self.key(&format!("image-{}-alt", position + 1)),
            AltSource::Placeholder => format!("room-placeholder-image-{}-alt", position + 1),
        }
    }

    pub fn localize(&self, locale: Locale) -> Room {
        Room {
            id: self.id,
            room_type: lookup(locale, &self.key("type")),
            capacity: lookup(locale, &self.key("capacity")),
            title: lookup(locale, &self.key("title")),
            description: lookup(locale, &self.key("description")),
            link: self.link,
            images: self
                .images
                .iter()
                .enumerate()
                .map(|(n, src)| Picture {
                    src: (*src).to_string(),
                    alt: lookup(locale, &self.image_alt_key(n)),
                })
                .collect(),
        }
    }

    /// Keys owned by this entry. Shared placeholder captions are listed once, by
    /// the first entry using them.
    pub fn message_keys(&self) -> Vec<String> {
        let mut keys = vec![
            self.key("type"),
            self.key("capacity"),
            self.key("title"),
            self.key("description"),
        ];
        let first_placeholder = ROOMS
            .iter()
            .find(|r| r.alts == AltSource::Placeholder)
            .map(|r| r.id);
        if self.alts == AltSource::Own || first_placeholder == Some(self.id) {
            keys.extend((0..self.images.len()).map(|n| self.image_alt_key(n)));
        }
        keys
    }
}

pub fn rooms(locale: Locale) -> Vec<Room> {
    ROOMS.iter().map(|entry| entry.localize(locale)).collect()
}
