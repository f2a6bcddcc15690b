//! Ports the navigation controller drives: the scroll container and the
//! address bar.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// How a programmatic scroll is animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    /// Animated scroll (keyboard, dots)
    Smooth,
    /// Jump without animation (deep-link restore)
    Instant,
}

/// The scrollable card container.
pub trait ScrollSurface: Send + Sync {
    /// Height of one card; a card at index `i` starts at `i * height`.
    fn viewport_height(&self) -> f64;

    /// Scroll the container so that `top` is at the top edge.
    fn scroll_to(&self, top: f64, behavior: ScrollBehavior);
}

/// The browser-style address bar.
pub trait AddressBar: Send + Sync {
    /// Path currently displayed.
    fn current_path(&self) -> String;

    /// Replace the displayed path without adding a history entry.
    fn replace_path(&self, path: &str);
}

/// Address bar held in memory, recording every replacement.
#[derive(Debug)]
pub struct MemoryAddressBar {
    state: Mutex<AddressState>,
}

#[derive(Debug)]
struct AddressState {
    path: String,
    replacements: usize,
}

impl MemoryAddressBar {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(AddressState {
                path: path.into(),
                replacements: 0,
            }),
        }
    }

    /// Number of `replace_path` calls so far.
    pub fn replacements(&self) -> usize {
        self.lock().replacements
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AddressState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryAddressBar {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AddressBar for MemoryAddressBar {
    fn current_path(&self) -> String {
        self.lock().path.clone()
    }

    fn replace_path(&self, path: &str) {
        let mut state = self.lock();
        state.path = path.to_string();
        state.replacements += 1;
    }
}
