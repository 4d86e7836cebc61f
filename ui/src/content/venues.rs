use super::Picture;
use crate::i18n::{lookup, Locale};

/// Key-feature bullets per venue.
pub const FEATURES_PER_VENUE: usize = 6;

/// One venue of the portfolio, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueEntry {
    pub id: &'static str,
    pub images: &'static [&'static str],
}

pub const VENUES: [VenueEntry; 7] = [
    VenueEntry {
        id: "grotto",
        images: &[
            "/grotte/_NAG5371-HDR-Pano.jpeg",
            "/grotte/_NAG4485-Pano.jpeg",
            "/grotte/_NAG5411-HDR-Pano.jpeg",
        ],
    },
    VenueEntry {
        id: "restaurant",
        images: &[
            "/restaurant/_NAG4307-Pano.jpg",
            "/restaurant/_NAG4310 (1).jpg",
            "/restaurant/20180115-Capture0003-HDR-Pano.jpg",
        ],
    },
    VenueEntry {
        id: "meditation",
        images: &[
            "/meditation/_NAG4374-HDR-Pano.jpg",
            "/meditation/_NAG4451.jpeg",
            "/meditation/_NAG4463.jpeg",
        ],
    },
    VenueEntry {
        id: "lakshmi-2",
        images: &[
            "/lakshmi2/_NAG4361-HDR.jpg",
            "/lakshmi2/_NAG4358-HDR-Pano.jpg",
            "/lakshmi2/_NAG4364-HDR-Pano.JPEG",
        ],
    },
    VenueEntry {
        id: "yoga-barn",
        images: &[
            "/yoga/_NAG4676.jpeg",
            "/yoga/_NAG4648.jpeg",
            "/yoga/_NAG4696.jpeg",
        ],
    },
    VenueEntry {
        id: "lakshmi-1",
        images: &[
            "/lakshmi1/20180115-Capture0046-HDR.jpg",
            "/lakshmi1/20180115-Capture0002-HDR-Pano.jpg",
            "/lakshmi1/20180115-Capture0021-HDR.jpg",
        ],
    },
    VenueEntry {
        id: "tea-house",
        images: &[
            "/tea/_NAG4264-HDR-Pano.jpg",
            "/tea/_NAG4306.jpg",
            "/tea/20180115-Capture0028-HDR (1).jpg",
        ],
    },
];

/// A venue with its copy resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    pub id: &'static str,
    pub title: String,
    pub description: String,
    pub capacity: String,
    pub area: String,
    pub features: Vec<String>,
    pub images: Vec<Picture>,
}

impl VenueEntry {
    fn key(&self, suffix: &str) -> String {
        format!("venue-{}-{suffix}", self.id)
    }

    fn image_alt_key(&self, position: usize) -> String {
        self.key(&format!("image-{}-alt", position + 1))
    }

    fn feature_key(&self, position: usize) -> String {
        self.key(&format!("feature-{}", position + 1))
    }

    pub fn localize(&self, locale: Locale) -> Venue {
        Venue {
            id: self.id,
            title: lookup(locale, &self.key("title")),
            description: lookup(locale, &self.key("description")),
            capacity: lookup(locale, &self.key("capacity")),
            area: lookup(locale, &self.key("area")),
            features: (0..FEATURES_PER_VENUE)
                .map(|n| lookup(locale, &self.feature_key(n)))
                .collect(),
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

    pub fn message_keys(&self) -> Vec<String> {
        let mut keys = vec![
            self.key("title"),
            self.key("description"),
            self.key("capacity"),
            self.key("area"),
        ];
        keys.extend((0..FEATURES_PER_VENUE).map(|n| self.feature_key(n)));
        keys.extend((0..self.images.len()).map(|n| self.image_alt_key(n)));
        keys
    }
}

/// The portfolio in display order.
pub fn venues(locale: Locale) -> Vec<Venue> {
    VENUES.iter().map(|entry| entry.localize(locale)).collect()
}
