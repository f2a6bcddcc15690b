//! Zenon Landing Navigation
//!
//! Keeps track of which card in the deck is active and projects that onto
//! the scroll container, the address bar and the progress indicators.
//!
//! # Overview
//!
//! - **Controller**: [`NavController`] owns the active index
//! - **Ports**: [`ScrollSurface`] and [`AddressBar`] for the host view
//! - **Sharing**: [`Sharer`] copies card links through a [`Clipboard`] with a
//!   [`FallbackCopy`] path and a self-clearing [`CopiedFlag`]

pub mod controller;
pub mod error;
pub mod key;
pub mod progress;
pub mod share;
pub mod surface;

pub use controller::{NavController, NavStatus, BRAND_URL};
pub use error::ClipboardError;
pub use key::NavKey;
pub use progress::{Dot, DotState, Progress};
pub use share::{Clipboard, CopiedFlag, CopyMethod, FallbackCopy, ShareOutcome, Sharer, COPIED_RESET};
pub use surface::{AddressBar, MemoryAddressBar, ScrollBehavior, ScrollSurface};
