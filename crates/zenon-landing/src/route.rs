//! What to show for a requested path.

use zenon_content::{routes, Deck};

/// Entry point chosen from the requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The typewriter intro, followed by the deck at the first card
    Intro,
    /// The deck, restored to a card
    Deck(usize),
}

impl Route {
    /// `/` plays the intro; `/intro` and card paths open the deck directly.
    pub fn resolve(deck: &Deck, path: &str) -> Self {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        if bare.trim_matches('/').is_empty() {
            Route::Intro
        } else {
            Route::Deck(routes::index_for_path(deck, path))
        }
    }
}
