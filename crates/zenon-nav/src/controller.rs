//! Active-card controller.
//!
//! [`NavController`] is the single owner of the active card index. Three
//! input channels write it: programmatic jumps (keys, dots), scroll
//! observation, and the one-off deep-link restore. Jumps and scroll events
//! are last-write-wins; a stale scroll event arriving after a jump is
//! corrected by the next one.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace};
use zenon_analytics::{Analytics, AnalyticsEvent};
use zenon_content::{routes, CardDescriptor, Deck, LinkTarget};

use crate::key::NavKey;
use crate::progress::{self, Dot, Progress};
use crate::share::{CopiedFlag, ShareOutcome, Sharer};
use crate::surface::{AddressBar, ScrollBehavior, ScrollSurface};

/// Target of the footer brand link.
pub const BRAND_URL: &str = "https://zenon.network";

/// Serializable view of the navigation state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavStatus {
    pub active: usize,
    pub card_id: String,
    pub path: String,
    pub progress: Progress,
    pub copied: bool,
}

/// Owner of the active card index and its projections.
pub struct NavController {
    deck: Deck,
    base_url: String,
    surface: Arc<dyn ScrollSurface>,
    address: Arc<dyn AddressBar>,
    sharer: Sharer,
    analytics: Analytics,
    active: usize,
    initial_applied: bool,
}

impl NavController {
    /// Create a controller with the first card active.
    pub fn new(
        deck: Deck,
        base_url: impl Into<String>,
        surface: Arc<dyn ScrollSurface>,
        address: Arc<dyn AddressBar>,
        sharer: Sharer,
        analytics: Analytics,
    ) -> Self {
        Self {
            deck,
            base_url: base_url.into(),
            surface,
            address,
            sharer,
            analytics,
            active: 0,
            initial_applied: false,
        }
    }

    /// The deck being navigated.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Index of the card currently in view.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The card currently in view.
    pub fn active_card(&self) -> &CardDescriptor {
        self.deck.card_at(self.active)
    }

    /// Transient "link copied" confirmation.
    pub fn copied(&self) -> &CopiedFlag {
        self.sharer.copied()
    }

    /// Smooth-scroll to a card and make it active immediately.
    ///
    /// Any index is accepted and clamped into the deck.
    pub fn jump_to(&mut self, index: i64) -> usize {
        let target = self.deck.clamp_index(index);
        match self.viewport_height() {
            Some(height) => self.surface.scroll_to(target as f64 * height, ScrollBehavior::Smooth),
            None => debug!(target, "no viewport height, skipping scroll"),
        }
        self.set_active(target, "jump");
        target
    }

    /// Reconcile the active card with the container's scroll offset.
    pub fn on_scroll_position_changed(&mut self, scroll_top: f64) {
        let Some(height) = self.viewport_height() else {
            return;
        };
        if !scroll_top.is_finite() {
            return;
        }

        let index = self.deck.clamp_index((scroll_top / height).round() as i64);
        trace!(scroll_top, index, "scroll observed");
        self.set_active(index, "scroll");

        let path = routes::path_for_index(&self.deck, index);
        if self.address.current_path() != path {
            debug!(%path, "replacing address bar path");
            self.address.replace_path(&path);
        }
    }

    /// Handle a key press. Returns whether the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        let Some(nav) = NavKey::from_key(key) else {
            return false;
        };
        self.jump_to(nav.target(self.active, self.deck.last_index()));
        true
    }

    /// Restore a deep-linked card without animation.
    ///
    /// Only the first call has any effect. Returns whether a scroll was
    /// issued.
    pub fn initial_position(&mut self, index: usize) -> bool {
        if self.initial_applied {
            return false;
        }
        self.initial_applied = true;

        let index = index.min(self.deck.last_index());
        self.active = index;
        if index == 0 {
            return false;
        }

        match self.viewport_height() {
            Some(height) => {
                self.surface.scroll_to(index as f64 * height, ScrollBehavior::Instant);
                debug!(index, "restored initial card");
                true
            }
            None => false,
        }
    }

    /// A navigation dot was pressed.
    pub fn on_dot_clicked(&mut self, index: usize) -> usize {
        let target = index.min(self.deck.last_index());
        let card = self.deck.card_at(target);
        self.analytics.track(AnalyticsEvent::NavDotClicked {
            card_id: card.id.clone(),
            card_title: card.title.clone(),
        });
        self.jump_to(i64::try_from(target).unwrap_or(i64::MAX))
    }

    /// A documentation link on the active card was followed. Returns the
    /// link target URL.
    pub fn on_card_link_clicked(&self, target: LinkTarget) -> String {
        let card = self.active_card();
        self.analytics.track(AnalyticsEvent::CardLinkClicked {
            card_id: card.id.clone(),
            target: target.as_str(),
        });
        card.link_url(target)
    }

    /// The footer brand link was followed.
    pub fn on_brand_link_clicked(&self) -> &'static str {
        self.analytics.track(AnalyticsEvent::ZenonLinkClicked);
        BRAND_URL
    }

    /// Copy the active card's absolute URL. Never fails.
    pub async fn share(&self) -> ShareOutcome {
        let card = self.active_card();
        self.analytics.track(AnalyticsEvent::ShareClicked {
            card_id: card.id.clone(),
            card_title: card.title.clone(),
        });

        let url = routes::card_url(&self.base_url, card);
        let method = self.sharer.copy(&url).await;
        debug!(%url, ?method, "shared card");
        ShareOutcome { url, method }
    }

    /// Navigation dots, one per card.
    pub fn dots(&self) -> Vec<Dot> {
        progress::dots(&self.deck, self.active)
    }

    /// Dot-rail and progress-bar ratios for the active card.
    pub fn progress(&self) -> Progress {
        Progress::new(self.active, self.deck.len())
    }

    /// Snapshot of the navigation state.
    pub fn status(&self) -> NavStatus {
        NavStatus {
            active: self.active,
            card_id: self.active_card().id.clone(),
            path: routes::path_for_index(&self.deck, self.active),
            progress: self.progress(),
            copied: self.copied().is_set(),
        }
    }

    fn viewport_height(&self) -> Option<f64> {
        let height = self.surface.viewport_height();
        (height.is_finite() && height > 0.0).then_some(height)
    }

    fn set_active(&mut self, index: usize, source: &'static str) {
        if index != self.active {
            debug!(from = self.active, to = index, source, "active card changed");
            self.active = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::share::testing::sharer;
    use crate::share::CopyMethod;
    use crate::surface::MemoryAddressBar;
    use proptest::prelude::*;
    use std::sync::Mutex;
    use std::time::Duration;
    use zenon_analytics::RecordingSink;

    const H: f64 = 800.0;

    struct FakeSurface {
        height: Mutex<f64>,
        scrolls: Mutex<Vec<(f64, ScrollBehavior)>>,
    }

    impl FakeSurface {
        fn new(height: f64) -> Self {
            Self {
                height: Mutex::new(height),
                scrolls: Mutex::new(Vec::new()),
            }
        }

        fn scrolls(&self) -> Vec<(f64, ScrollBehavior)> {
            self.scrolls.lock().unwrap().clone()
        }
    }

    impl ScrollSurface for FakeSurface {
        fn viewport_height(&self) -> f64 {
            *self.height.lock().unwrap()
        }

        fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
            self.scrolls.lock().unwrap().push((top, behavior));
        }
    }

    struct Harness {
        nav: NavController,
        surface: Arc<FakeSurface>,
        address: Arc<MemoryAddressBar>,
        sink: Arc<RecordingSink>,
    }

    fn harness_with(height: f64, path: &str, clipboard_works: bool) -> Harness {
        let surface = Arc::new(FakeSurface::new(height));
        let address = Arc::new(MemoryAddressBar::new(path));
        let sink = Arc::new(RecordingSink::new());
        let (sharer, _, _) = sharer(clipboard_works, true);
        let nav = NavController::new(
            Deck::builtin(),
            "https://zenon.wtf",
            surface.clone(),
            address.clone(),
            sharer,
            Analytics::new(sink.clone()),
        );
        Harness {
            nav,
            surface,
            address,
            sink,
        }
    }

    fn harness() -> Harness {
        harness_with(H, "/", true)
    }

    #[test]
    fn jump_clamps_both_ends() {
        let mut h = harness();
        h.nav.jump_to(5);
        assert_eq!(h.nav.active_index(), 5);

        assert_eq!(h.nav.jump_to(-3), 0);
        assert_eq!(h.nav.active_index(), 0);

        assert_eq!(h.nav.jump_to(100), 11);
        assert_eq!(h.nav.active_index(), 11);

        let scrolls = h.surface.scrolls();
        assert_eq!(scrolls.last(), Some(&(11.0 * H, ScrollBehavior::Smooth)));
    }

    #[test]
    fn jump_is_idempotent() {
        let mut h = harness();
        h.nav.jump_to(4);
        h.nav.jump_to(4);
        assert_eq!(h.nav.active_index(), 4);
        assert_eq!(h.surface.scrolls(), vec![(4.0 * H, ScrollBehavior::Smooth); 2]);
    }

    #[test]
    fn scroll_rounds_to_nearest_card() {
        let mut h = harness();
        h.nav.on_scroll_position_changed(3.4 * H);
        assert_eq!(h.nav.active_index(), 3);
        assert_eq!(h.address.current_path(), "/dual-ledger");

        h.nav.on_scroll_position_changed(3.6 * H);
        assert_eq!(h.nav.active_index(), 4);
        assert_eq!(h.address.current_path(), "/parallel");
    }

    #[test]
    fn scroll_past_the_end_clamps() {
        let mut h = harness();
        h.nav.on_scroll_position_changed(40.0 * H);
        assert_eq!(h.nav.active_index(), 11);
        h.nav.on_scroll_position_changed(-2.0 * H);
        assert_eq!(h.nav.active_index(), 0);
    }

    #[test]
    fn first_card_maps_to_root() {
        let mut h = harness_with(H, "/problem", true);
        h.nav.on_scroll_position_changed(0.2 * H);
        assert_eq!(h.address.current_path(), "/");
    }

    #[test]
    fn matching_path_is_not_rewritten() {
        let mut h = harness();
        h.nav.on_scroll_position_changed(0.0);
        h.nav.on_scroll_position_changed(10.0);
        assert_eq!(h.address.replacements(), 0);

        h.nav.on_scroll_position_changed(H);
        h.nav.on_scroll_position_changed(H + 10.0);
        assert_eq!(h.address.replacements(), 1);
    }

    #[test]
    fn jump_then_scroll_updates_path() {
        let mut h = harness();
        h.nav.on_key("End");
        assert_eq!(h.address.current_path(), "/");

        h.nav.on_scroll_position_changed(11.0 * H);
        assert_eq!(h.address.current_path(), "/vision");
    }

    #[test]
    fn degenerate_viewport_ignores_scroll() {
        let mut h = harness_with(0.0, "/", true);
        h.nav.on_scroll_position_changed(500.0);
        assert_eq!(h.nav.active_index(), 0);
        assert_eq!(h.address.replacements(), 0);

        let mut h = harness();
        h.nav.on_scroll_position_changed(f64::NAN);
        assert_eq!(h.nav.active_index(), 0);
    }

    #[test]
    fn keys() {
        let mut h = harness();
        assert!(h.nav.on_key("ArrowDown"));
        assert!(h.nav.on_key("j"));
        assert_eq!(h.nav.active_index(), 2);

        assert!(h.nav.on_key("k"));
        assert_eq!(h.nav.active_index(), 1);

        assert!(h.nav.on_key("End"));
        assert_eq!(h.nav.active_index(), 11);
        assert!(h.nav.on_key("ArrowDown"));
        assert_eq!(h.nav.active_index(), 11);

        assert!(h.nav.on_key("Home"));
        assert!(h.nav.on_key("ArrowUp"));
        assert_eq!(h.nav.active_index(), 0);

        assert!(!h.nav.on_key("x"));
    }

    #[test]
    fn initial_position_only_once() {
        let mut h = harness();
        assert!(h.nav.initial_position(7));
        assert!(!h.nav.initial_position(3));

        assert_eq!(h.surface.scrolls(), vec![(7.0 * H, ScrollBehavior::Instant)]);
        assert_eq!(h.nav.active_index(), 7);
    }

    #[test]
    fn initial_position_zero_does_not_scroll() {
        let mut h = harness();
        assert!(!h.nav.initial_position(0));
        assert!(!h.nav.initial_position(5));
        assert!(h.surface.scrolls().is_empty());
    }

    #[test]
    fn dot_click_tracks_and_jumps() {
        let mut h = harness();
        assert_eq!(h.nav.on_dot_clicked(7), 7);
        assert_eq!(h.nav.active_index(), 7);

        let events = h.sink.events();
        assert_eq!(events[0].name, "nav_dot_clicked");
        assert_eq!(events[0].properties["card_id"], "dfa");
    }

    #[test]
    fn dots_and_progress_follow_active() {
        let mut h = harness();
        h.nav.jump_to(11);
        assert_eq!(h.nav.progress().rail, 1.0);
        assert!(h.nav.dots().iter().take(11).all(|d| d.state == progress::DotState::Visited));
    }

    #[test]
    fn links_are_tracked() {
        let mut h = harness();
        h.nav.jump_to(7);
        let url = h.nav.on_card_link_clicked(LinkTarget::Repository);
        assert!(url.ends_with(&h.nav.active_card().repo_path));
        assert_eq!(h.nav.on_brand_link_clicked(), BRAND_URL);
        assert_eq!(
            h.sink.names(),
            vec!["card_link_clicked", "zenon_link_clicked"]
        );
        assert_eq!(h.sink.events()[0].properties["target"], "repository");
    }

    #[tokio::test(start_paused = true)]
    async fn share_copies_card_url() {
        let mut h = harness();
        h.nav.jump_to(0);
        let outcome = h.nav.share().await;
        assert_eq!(outcome.url, "https://zenon.wtf/welcome");
        assert_eq!(outcome.method, CopyMethod::Clipboard);
        assert!(h.nav.status().copied);

        let event = &h.sink.events()[0];
        assert_eq!(event.name, "share_clicked");
        assert_eq!(event.properties["card_id"], "welcome");

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert!(!h.nav.status().copied);
    }

    #[tokio::test(start_paused = true)]
    async fn share_falls_back() {
        let mut h = harness_with(H, "/", false);
        h.nav.jump_to(3);
        let outcome = h.nav.share().await;
        assert_eq!(outcome.method, CopyMethod::Fallback);
        assert!(h.nav.copied().is_set());

        tokio::time::sleep(Duration::from_millis(2100)).await;
        assert!(!h.nav.copied().is_set());
    }

    proptest! {
        #[test]
        fn jump_stays_in_range(index in any::<i64>()) {
            let mut h = harness();
            let target = h.nav.jump_to(index);
            prop_assert!(target < h.nav.deck().len());
            prop_assert_eq!(target, h.nav.active_index());
        }

        #[test]
        fn scroll_stays_in_range_and_syncs_path(top in -1.0e7f64..1.0e7) {
            let mut h = harness();
            h.nav.on_scroll_position_changed(top);
            prop_assert!(h.nav.active_index() < h.nav.deck().len());
            prop_assert_eq!(
                h.address.current_path(),
                routes::path_for_index(h.nav.deck(), h.nav.active_index())
            );
        }
    }
}
