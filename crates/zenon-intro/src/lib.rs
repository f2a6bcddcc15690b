//! Zenon Landing Intro
//!
//! The typewriter intro shown before the card deck: a cursor blinks, the
//! message `Don't trust. Verify...` is typed one character at a time, and
//! the reader proceeds (or the intro proceeds on its own) into the deck.
//!
//! # Architecture
//!
//! - **Machine**: [`IntroMachine`], a pure phase machine over [`IntroPhase`]
//! - **Controller**: [`IntroController`], a tokio task driving the machine's
//!   timers and delivering completion exactly once
//! - **Seen flag**: [`SeenStore`] port deciding the skip-hint wording
//!
//! # Example
//!
//! ```no_run
//! use zenon_analytics::Analytics;
//! use zenon_intro::{IntroController, IntroOptions, IntroTimings};
//!
//! # async fn demo() {
//! let intro = IntroController::new(IntroOptions::default(), IntroTimings::default(), Analytics::disabled());
//! let handle = intro.spawn(|| println!("intro done"));
//! handle.skip();
//! handle.finished().await;
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod input;
pub mod machine;
pub mod phase;
pub mod seen;
pub mod text;
mod timings;

pub use controller::{IntroController, IntroHandle, IntroOutcome};
pub use error::{Error, Result};
pub use input::{IntroInput, IntroKey};
pub use machine::{IntroEvent, IntroMachine, IntroOptions, IntroSnapshot, PhaseTimer};
pub use phase::IntroPhase;
pub use seen::{has_seen, mark_seen, FileSeenStore, MemorySeenStore, SeenRecord, SeenStore};
pub use text::FULL_TEXT;
pub use timings::IntroTimings;
