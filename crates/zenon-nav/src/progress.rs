//! Derived progress indicators: the dot rail and the mobile progress bar.

use serde::Serialize;
use zenon_content::Deck;

/// How a navigation dot is drawn relative to the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DotState {
    /// Cards already passed
    Visited,
    /// The active card
    Active,
    /// Cards still ahead
    Upcoming,
}

/// One navigation dot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub index: usize,
    pub card_id: String,
    /// Tooltip text (the card title).
    pub label: String,
    pub state: DotState,
}

/// Dots for every card in the deck.
pub fn dots(deck: &Deck, active: usize) -> Vec<Dot> {
    deck.iter()
        .enumerate()
        .map(|(index, card)| Dot {
            index,
            card_id: card.id.clone(),
            label: card.title.clone(),
            state: match index.cmp(&active) {
                std::cmp::Ordering::Less => DotState::Visited,
                std::cmp::Ordering::Equal => DotState::Active,
                std::cmp::Ordering::Greater => DotState::Upcoming,
            },
        })
        .collect()
}

/// Progress ratios in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Progress {
    /// Filled share of the dot rail: `active / (N - 1)`.
    pub rail: f64,
    /// Filled share of the mobile bar: `(active + 1) / N`.
    pub bar: f64,
}

impl Progress {
    pub fn new(active: usize, len: usize) -> Self {
        if len == 0 {
            return Self { rail: 0.0, bar: 0.0 };
        }
        let active = active.min(len - 1) as f64;
        let rail = if len > 1 {
            active / (len - 1) as f64
        } else {
            0.0
        };
        Self {
            rail,
            bar: (active + 1.0) / len as f64,
        }
    }
}
