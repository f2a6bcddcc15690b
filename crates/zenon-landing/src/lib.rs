//! Zenon Landing
//!
//! Terminal host for the landing experience. It wires the intro and the
//! deck controllers to terminal implementations of their ports and drives
//! them from line commands.
//!
//! # Architecture
//!
//! - **Config**: [`LandingConfig`] from `ZENON_*` environment variables
//! - **Session**: [`Session`] runs the intro, writes the seen flag, then
//!   hands over to the deck
//! - **Terminal ports**: fixed-height viewport, desktop clipboard with an
//!   OSC 52 fallback

pub mod command;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod route;
pub mod session;
pub mod terminal;

pub use command::Command;
pub use config::LandingConfig;
pub use error::{Error, Result};
pub use route::Route;
pub use session::{load_deck, Ports, Reply, Session, SessionEvent};
