//! Intro phases.

use serde::{Deserialize, Serialize};

/// Phase of the intro sequence. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntroPhase {
    /// Blinking cursor before typing starts
    Idle,
    /// Revealing the first phrase
    TypingPhraseOne,
    /// Short pause after the first phrase
    InterPhrasePause,
    /// Revealing the second phrase
    TypingPhraseTwo,
    /// Full text shown, waiting for the reader
    Ready,
    /// Exit animation running (terminal)
    Transitioning,
}

impl IntroPhase {
    /// Stable name used in logs and analytics.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntroPhase::Idle => "idle",
            IntroPhase::TypingPhraseOne => "typing_phrase_one",
            IntroPhase::InterPhrasePause => "inter_phrase_pause",
            IntroPhase::TypingPhraseTwo => "typing_phrase_two",
            IntroPhase::Ready => "ready",
            IntroPhase::Transitioning => "transitioning",
        }
    }

    /// Phases during which text is still being revealed (skip is offered).
    pub fn is_typing(&self) -> bool {
        matches!(
            self,
            IntroPhase::Idle
                | IntroPhase::TypingPhraseOne
                | IntroPhase::InterPhrasePause
                | IntroPhase::TypingPhraseTwo
        )
    }

    /// Whether this is the terminal phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, IntroPhase::Transitioning)
    }
}

impl std::fmt::Display for IntroPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
