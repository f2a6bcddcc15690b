//! Zenon Landing Content
//!
//! The static side of the landing site: the ordered card deck and everything
//! derived from it without user interaction.
//!
//! # Overview
//!
//! - **Cards**: [`CardDescriptor`] records with a layout [`CardVariant`]
//! - **Deck**: a validated, non-empty, uniquely-keyed [`Deck`]
//! - **Routes**: card index ↔ URL path (`/` is the first card)
//! - **Metadata**: per-card titles, canonical URLs and preview images
//! - **Sitemap**: crawler entries for the root and every card
//!
//! Controllers read the deck; nothing here is ever mutated after startup.

mod builtin;
mod card;
mod deck;
pub mod error;
pub mod metadata;
pub mod routes;
pub mod sitemap;

pub use card::{CardDescriptor, CardMedia, CardVariant, LinkTarget, GITBOOK_BASE_URL, REPO_BASE_URL};
pub use deck::Deck;
pub use error::{Error, Result};
pub use metadata::PageMetadata;
