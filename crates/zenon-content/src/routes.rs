//! Mapping between card indices and URL paths.
//!
//! The root path and the first card are the same page. Every other card
//! lives at `/<card-id>`. Resolving a path never fails: anything unknown
//! lands on the first card.

use crate::card::CardDescriptor;
use crate::deck::Deck;

/// Path of the first card.
pub const ROOT_PATH: &str = "/";

/// Alias route that opens the deck after the intro.
pub const INTRO_PATH: &str = "/intro";

/// Address-bar path for the card at `index` (clamped into the deck).
pub fn path_for_index(deck: &Deck, index: usize) -> String {
    let index = index.min(deck.last_index());
    if index == 0 {
        ROOT_PATH.to_string()
    } else {
        format!("/{}", deck.card_at(index).id)
    }
}

/// Card index for an address-bar path.
///
/// Query strings, fragments and trailing slashes are ignored. Unknown
/// identifiers resolve to 0.
pub fn index_for_path(deck: &Deck, path: &str) -> usize {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let segment = path.trim_start_matches('/');

    if segment.is_empty() || path == INTRO_PATH {
        return 0;
    }
    deck.position(segment).unwrap_or(0)
}

/// Absolute shareable URL for a card.
///
/// Shared links always name the card explicitly, including the first one.
pub fn card_url(base_url: &str, card: &CardDescriptor) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), card.id)
}

/// Absolute URL of the site root.
pub fn root_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
