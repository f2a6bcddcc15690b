//! Page metadata for search engines and link previews.

use serde::Serialize;

use crate::card::CardDescriptor;
use crate::deck::Deck;
use crate::routes;

/// Site name used in titles and previews.
pub const SITE_NAME: &str = "Zenon Network";

/// Description used when no card matches.
pub const DEFAULT_DESCRIPTION: &str = "Understanding Zenon Network of Momentum";

/// Preview image dimensions.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

/// Link preview image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Metadata rendered into a page head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: Option<String>,
    pub og_title: String,
    pub image: Option<PreviewImage>,
}

impl PageMetadata {
    /// Metadata for a single card page.
    pub fn for_card(base_url: &str, card: &CardDescriptor) -> Self {
        let url = routes::card_url(base_url, card);
        Self {
            title: format!("{} | Zenon", card.title),
            description: card.summary().to_string(),
            canonical_url: Some(url),
            og_title: card.title.clone(),
            image: Some(PreviewImage {
                url: og_image_url(base_url, &card.id),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: card.title.clone(),
            }),
        }
    }

    /// Metadata for a `/<card-id>` request, with a generic fallback for
    /// unknown ids.
    pub fn for_card_id(base_url: &str, deck: &Deck, card_id: &str) -> Self {
        match deck.position(card_id).and_then(|i| deck.get(i)) {
            Some(card) => Self::for_card(base_url, card),
            None => Self {
                title: SITE_NAME.to_string(),
                description: DEFAULT_DESCRIPTION.to_string(),
                canonical_url: None,
                og_title: SITE_NAME.to_string(),
                image: None,
            },
        }
    }
}

/// URL of the pre-rendered preview image for a card.
pub fn og_image_url(base_url: &str, card_id: &str) -> String {
    format!("{}/og/{}.png", routes::root_url(base_url), card_id)
}
