//! Reader input the intro reacts to.

/// Minimum upward finger travel, in pixels, for a swipe to count as
/// "scroll down".
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Keys with a meaning during the intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroKey {
    Space,
    Enter,
    Escape,
    /// Any other key; ignored.
    Other,
}

impl IntroKey {
    /// Map a physical key code (`"Space"`, `"Enter"`, `"Escape"`).
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => IntroKey::Space,
            "Enter" | "NumpadEnter" => IntroKey::Enter,
            "Escape" => IntroKey::Escape,
            _ => IntroKey::Other,
        }
    }

    /// Space, Enter and Escape skip while typing and proceed once ready.
    pub fn is_action(&self) -> bool {
        !matches!(self, IntroKey::Other)
    }
}

/// One input event delivered to the intro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntroInput {
    /// The skip affordance was pressed.
    Skip,
    /// Mouse wheel; positive `delta_y` scrolls down.
    Wheel { delta_y: f64 },
    /// Completed touch gesture from `start_y` to `end_y`.
    Swipe { start_y: f64, end_y: f64 },
    /// Click on the revealed text.
    Click,
    /// Key press.
    Key(IntroKey),
}

impl IntroInput {
    /// Whether this input moves a ready intro on.
    pub fn is_proceed_trigger(&self) -> bool {
        match *self {
            IntroInput::Skip | IntroInput::Click => true,
            IntroInput::Wheel { delta_y } => delta_y > 0.0,
            IntroInput::Swipe { start_y, end_y } => start_y - end_y >= MIN_SWIPE_DISTANCE,
            IntroInput::Key(key) => key.is_action(),
        }
    }

    /// Whether this input skips an intro that is still typing.
    ///
    /// Pointer input is only listened for once the text is complete.
    pub fn is_skip_request(&self) -> bool {
        match *self {
            IntroInput::Skip => true,
            IntroInput::Key(key) => key.is_action(),
            IntroInput::Wheel { .. } | IntroInput::Swipe { .. } | IntroInput::Click => false,
        }
    }
}
