//! Keyboard shortcuts for moving through the deck.

/// Navigation requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowDown or `j`
    Next,
    /// ArrowUp or `k`
    Previous,
    /// Home
    First,
    /// End
    Last,
}

impl NavKey {
    /// Map a key value (`"ArrowDown"`, `"j"`, ...). Unbound keys give `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "j" => Some(NavKey::Next),
            "ArrowUp" | "k" => Some(NavKey::Previous),
            "Home" => Some(NavKey::First),
            "End" => Some(NavKey::Last),
            _ => None,
        }
    }

    /// Target index (possibly out of range) from the active index.
    pub fn target(&self, active: usize, last: usize) -> i64 {
        let active = i64::try_from(active).unwrap_or(i64::MAX);
        match self {
            NavKey::Next => active.saturating_add(1),
            NavKey::Previous => active - 1,
            NavKey::First => 0,
            NavKey::Last => i64::try_from(last).unwrap_or(i64::MAX),
        }
    }
}
