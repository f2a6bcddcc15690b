//! Intro timing configuration.

use std::time::Duration;

/// Delays driving the intro sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntroTimings {
    /// Blinking cursor before the first phrase starts typing.
    pub initial_wait: Duration,

    /// Delay between revealed characters.
    pub char_delay: Duration,

    /// Pause between the two phrases.
    pub phrase_pause: Duration,

    /// How long the finished text waits before proceeding on its own.
    pub auto_proceed: Duration,

    /// Length of the exit animation before completion fires.
    pub exit_animation: Duration,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            initial_wait: Duration::from_millis(2000),
            char_delay: Duration::from_millis(80),
            phrase_pause: Duration::from_millis(1000),
            auto_proceed: Duration::from_millis(10_000),
            exit_animation: Duration::from_millis(500),
        }
    }
}

impl IntroTimings {
    /// Set the initial cursor wait.
    #[must_use]
    pub fn with_initial_wait(mut self, wait: Duration) -> Self {
        self.initial_wait = wait;
        self
    }

    /// Set the per-character delay.
    #[must_use]
    pub fn with_char_delay(mut self, delay: Duration) -> Self {
        self.char_delay = delay;
        self
    }

    /// Set the pause between phrases.
    #[must_use]
    pub fn with_phrase_pause(mut self, pause: Duration) -> Self {
        self.phrase_pause = pause;
        self
    }

    /// Set the auto-proceed timeout.
    #[must_use]
    pub fn with_auto_proceed(mut self, timeout: Duration) -> Self {
        self.auto_proceed = timeout;
        self
    }

    /// Set the exit animation length.
    #[must_use]
    pub fn with_exit_animation(mut self, duration: Duration) -> Self {
        self.exit_animation = duration;
        self
    }
}
