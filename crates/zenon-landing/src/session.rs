//! One reader's visit: the intro, then the deck.
//!
//! A [`Session`] starts on the intro or directly on a card, depending on
//! the requested path. When the intro completes the seen flag is written on
//! the blocking pool and the deck opens on the first card at `/`.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tracing::{debug, info, warn};
use zenon_analytics::{Analytics, TracingSink};
use zenon_content::{routes, Deck};
use zenon_intro::{
    has_seen, mark_seen, FileSeenStore, IntroController, IntroHandle, IntroInput, IntroKey,
    IntroOptions, IntroSnapshot, IntroTimings, SeenStore,
};
use zenon_nav::{
    AddressBar, Clipboard, FallbackCopy, MemoryAddressBar, NavController, NavStatus, ShareOutcome,
    Sharer,
};

use crate::command::Command;
use crate::config::LandingConfig;
use crate::error::Result;
use crate::route::Route;
use crate::terminal::{Osc52Copy, SystemClipboard, TerminalViewport};

/// External collaborators of a session.
#[derive(Clone)]
pub struct Ports {
    pub seen: Arc<dyn SeenStore>,
    pub clipboard: Arc<dyn Clipboard>,
    pub fallback: Arc<dyn FallbackCopy>,
    pub analytics: Analytics,
}

impl Ports {
    /// Desktop clipboard, OSC 52 fallback, file-backed seen flag and
    /// analytics written to the log.
    pub fn system(config: &LandingConfig) -> Self {
        Self {
            seen: Arc::new(FileSeenStore::in_dir(&config.data_dir)),
            clipboard: Arc::new(SystemClipboard),
            fallback: Arc::new(Osc52Copy::stdout()),
            analytics: Analytics::new(Arc::new(TracingSink)),
        }
    }
}

/// Load the configured deck, or the built-in one.
pub fn load_deck(config: &LandingConfig) -> Result<Deck> {
    match &config.deck_path {
        Some(path) => load_deck_file(path),
        None => Ok(Deck::builtin()),
    }
}

fn load_deck_file(path: &Path) -> Result<Deck> {
    let json = std::fs::read_to_string(path)?;
    let deck = Deck::from_json(&json)?;
    info!(path = %path.display(), cards = deck.len(), "loaded deck");
    Ok(deck)
}

/// Something the host should render.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// The intro changed
    Intro(IntroSnapshot),
    /// The intro finished and the deck is showing
    DeckOpened,
}

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Nothing visible changed
    None,
    /// The active card or its chrome may have changed
    Redraw,
    Shared(ShareOutcome),
    /// A link the reader asked to follow
    Link(String),
    Status(NavStatus),
    Quit,
}

enum Stage {
    Intro {
        handle: IntroHandle,
        updates: watch::Receiver<IntroSnapshot>,
        done: oneshot::Receiver<()>,
    },
    Deck(NavController),
}

pub struct Session {
    config: LandingConfig,
    deck: Deck,
    ports: Ports,
    viewport: Arc<TerminalViewport>,
    address: Arc<MemoryAddressBar>,
    stage: Stage,
}

impl Session {
    /// Start a session for `path` with the default intro timings.
    pub fn start(config: LandingConfig, deck: Deck, ports: Ports, path: &str) -> Self {
        Self::start_with_timings(config, deck, ports, path, IntroTimings::default())
    }

    pub fn start_with_timings(
        config: LandingConfig,
        deck: Deck,
        ports: Ports,
        path: &str,
        timings: IntroTimings,
    ) -> Self {
        let viewport = Arc::new(TerminalViewport::new(config.viewport_height));
        let address = Arc::new(MemoryAddressBar::new(path));

        let stage = match Route::resolve(&deck, path) {
            Route::Intro => intro_stage(&config, &ports, timings),
            Route::Deck(index) => {
                debug!(path, index, "deep link, skipping intro");
                let mut nav = build_nav(&deck, &config, &ports, &viewport, &address);
                nav.initial_position(index);
                Stage::Deck(nav)
            }
        };

        Self {
            config,
            deck,
            ports,
            viewport,
            address,
            stage,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn address(&self) -> &MemoryAddressBar {
        &self.address
    }

    pub fn viewport(&self) -> &TerminalViewport {
        &self.viewport
    }

    /// The deck controller, once the intro is over.
    pub fn nav(&self) -> Option<&NavController> {
        match &self.stage {
            Stage::Deck(nav) => Some(nav),
            Stage::Intro { .. } => None,
        }
    }

    /// Latest intro frame while the intro is showing.
    pub fn intro_snapshot(&self) -> Option<IntroSnapshot> {
        match &self.stage {
            Stage::Intro { handle, .. } => Some(handle.snapshot()),
            Stage::Deck(_) => None,
        }
    }

    /// Wait for the next intro change. Never resolves once the deck is
    /// showing.
    pub async fn next_event(&mut self) -> SessionEvent {
        let finished = match &mut self.stage {
            Stage::Deck(_) => return std::future::pending().await,
            Stage::Intro { updates, done, .. } => tokio::select! {
                _ = done => true,
                changed = updates.changed() => changed.is_err(),
            },
        };

        if finished {
            self.record_seen().await;
            self.open_deck();
            return SessionEvent::DeckOpened;
        }

        match &mut self.stage {
            Stage::Intro { updates, .. } => SessionEvent::Intro(updates.borrow_and_update().clone()),
            Stage::Deck(_) => SessionEvent::DeckOpened,
        }
    }

    /// Apply one reader command.
    pub async fn apply(&mut self, command: Command) -> Reply {
        if command == Command::Quit {
            return Reply::Quit;
        }

        match &mut self.stage {
            Stage::Intro { handle, .. } => {
                let input = match command {
                    Command::Intro(input) => input,
                    Command::Key(key) => IntroInput::Key(IntroKey::from_code(&key)),
                    other => {
                        debug!(?other, "ignored during intro");
                        return Reply::None;
                    }
                };
                handle.send(input);
                Reply::None
            }
            Stage::Deck(nav) => apply_to_deck(nav, &self.viewport, command).await,
        }
    }

    /// Persist the seen flag off the async workers; stores may hit the disk.
    async fn record_seen(&self) {
        let seen = self.ports.seen.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || mark_seen(seen.as_ref())).await {
            warn!(error = %e, "seen flag writer did not finish");
        }
    }

    fn open_deck(&mut self) {
        let nav = build_nav(&self.deck, &self.config, &self.ports, &self.viewport, &self.address);
        self.stage = Stage::Deck(nav);

        if self.address.current_path() != routes::ROOT_PATH {
            self.address.replace_path(routes::ROOT_PATH);
        }
        info!("intro finished, showing deck");
    }
}

fn build_nav(
    deck: &Deck,
    config: &LandingConfig,
    ports: &Ports,
    viewport: &Arc<TerminalViewport>,
    address: &Arc<MemoryAddressBar>,
) -> NavController {
    NavController::new(
        deck.clone(),
        config.base_url.clone(),
        viewport.clone(),
        address.clone(),
        Sharer::new(ports.clipboard.clone(), ports.fallback.clone()),
        ports.analytics.clone(),
    )
}

fn intro_stage(config: &LandingConfig, ports: &Ports, timings: IntroTimings) -> Stage {
    let options = IntroOptions {
        reduced_motion: config.reduced_motion,
        seen_before: has_seen(ports.seen.as_ref()),
    };
    debug!(?options, "starting intro");

    let (done_tx, done) = oneshot::channel();
    let handle = IntroController::new(options, timings, ports.analytics.clone()).spawn(move || {
        let _ = done_tx.send(());
    });
    let updates = handle.subscribe();

    Stage::Intro {
        handle,
        updates,
        done,
    }
}

/// The container settles where a programmatic scroll sent it, which the
/// controller observes like any other scroll.
fn settle(nav: &mut NavController, viewport: &TerminalViewport) {
    nav.on_scroll_position_changed(viewport.scroll_top());
}

async fn apply_to_deck(nav: &mut NavController, viewport: &TerminalViewport, command: Command) -> Reply {
    match command {
        Command::Key(key) => {
            if nav.on_key(&key) {
                settle(nav, viewport);
                Reply::Redraw
            } else {
                Reply::None
            }
        }
        Command::Scroll(delta) => {
            let top = viewport.scroll_by(delta);
            nav.on_scroll_position_changed(top);
            Reply::Redraw
        }
        Command::Dot(index) => {
            nav.on_dot_clicked(index);
            settle(nav, viewport);
            Reply::Redraw
        }
        Command::Share => Reply::Shared(nav.share().await),
        Command::Link(target) => Reply::Link(nav.on_card_link_clicked(target)),
        Command::Brand => Reply::Link(nav.on_brand_link_clicked().to_string()),
        Command::Status => Reply::Status(nav.status()),
        Command::Intro(input) => {
            debug!(?input, "intro input after intro");
            Reply::None
        }
        Command::Quit => Reply::Quit,
    }
}
