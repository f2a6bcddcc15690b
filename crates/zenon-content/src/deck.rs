//! Validated, ordered card deck.

use std::collections::HashSet;
use std::sync::Arc;

use crate::builtin;
use crate::card::CardDescriptor;
use crate::error::{Error, Result};
use crate::routes::INTRO_PATH;

/// An ordered, non-empty sequence of cards with unique ids.
///
/// Cloning is cheap; controllers and views share the same cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: Arc<[CardDescriptor]>,
}

impl Deck {
    /// Validate and wrap a list of cards.
    pub fn new(cards: Vec<CardDescriptor>) -> Result<Self> {
        if cards.is_empty() {
            return Err(Error::EmptyDeck);
        }

        let mut seen = HashSet::with_capacity(cards.len());
        for card in &cards {
            validate_id(&card.id)?;
            if !seen.insert(card.id.as_str()) {
                return Err(Error::DuplicateId(card.id.clone()));
            }
        }

        Ok(Self { cards: cards.into() })
    }

    /// The twelve cards shipped with the site.
    pub fn builtin() -> Self {
        Self {
            cards: builtin::cards().into(),
        }
    }

    /// Parse a JSON array of cards and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cards: Vec<CardDescriptor> = serde_json::from_str(json)?;
        Self::new(cards)
    }

    /// Number of cards (never zero).
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of the last card.
    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }

    /// Card at `index`.
    pub fn get(&self, index: usize) -> Option<&CardDescriptor> {
        self.cards.get(index)
    }

    /// The first card, which also stands for the root path.
    pub fn first(&self) -> &CardDescriptor {
        &self.cards[0]
    }

    /// Card at `index` after clamping into range.
    pub fn card_at(&self, index: usize) -> &CardDescriptor {
        &self.cards[index.min(self.last_index())]
    }

    /// Position of the card with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Clamp any signed index into `[0, len - 1]`.
    pub fn clamp_index(&self, index: i64) -> usize {
        if index <= 0 {
            0
        } else {
            usize::try_from(index).map_or(self.last_index(), |i| i.min(self.last_index()))
        }
    }

    /// Iterate cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CardDescriptor> {
        self.cards.iter()
    }

    /// All cards as a slice.
    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a CardDescriptor;
    type IntoIter = std::slice::Iter<'a, CardDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_id(id: &str) -> Result<()> {
    let reason = if id.is_empty() {
        Some("empty")
    } else if id.contains('/') {
        Some("contains '/'")
    } else if id.contains(['?', '#']) {
        Some("contains a query or fragment delimiter")
    } else if id.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else if id == INTRO_PATH.trim_start_matches('/') {
        Some("reserved for the intro route")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::InvalidId {
            id: id.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
