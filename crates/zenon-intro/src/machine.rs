//! Intro phase machine.
//!
//! The machine is pure: it never sleeps or spawns. The driver in
//! [`controller`](crate::controller) asks it for the current phase timer,
//! waits, and feeds timer expiries and reader input back in. Each call
//! returns the events the host should act on.
//!
//! ```text
//! Idle ──2000ms──▶ TypingPhraseOne ──12×80ms──▶ InterPhrasePause ──1000ms──▶
//!   TypingPhraseTwo ──9×80ms──▶ Ready ──trigger | 10000ms──▶ Transitioning ──500ms──▶ done
//!
//! any phase before Ready ──skip──▶ Transitioning
//! ```

use std::time::Duration;

use serde::Serialize;
use zenon_analytics::AnalyticsEvent;

use crate::input::IntroInput;
use crate::phase::IntroPhase;
use crate::seen::skip_hint;
use crate::text::{self, FULL_TEXT};
use crate::timings::IntroTimings;

/// Decisions fixed when the intro view mounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntroOptions {
    /// Reader prefers reduced motion; start with the full text.
    pub reduced_motion: bool,

    /// The intro has completed on this client before.
    pub seen_before: bool,
}

/// What a single step of the machine produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntroEvent {
    /// The phase moved forward.
    PhaseChanged { from: IntroPhase, to: IntroPhase },

    /// An analytics event to report.
    Analytics(AnalyticsEvent),

    /// The exit animation finished; hand off to the host view.
    Completed,
}

/// How the phase timer behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseTimer {
    /// Fires once, then the phase changes.
    OneShot(Duration),
    /// Fires every period until the phase changes.
    Repeating(Duration),
}

impl PhaseTimer {
    /// Delay until the next expiry.
    pub fn period(&self) -> Duration {
        match *self {
            PhaseTimer::OneShot(d) | PhaseTimer::Repeating(d) => d,
        }
    }
}

/// Renderable state of the intro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntroSnapshot {
    pub phase: IntroPhase,
    pub revealed: &'static str,
    pub cursor_visible: bool,
    /// Skip affordance text, present only while typing.
    pub skip_hint: Option<&'static str>,
    pub completed: bool,
}

/// The intro state machine.
#[derive(Debug, Clone)]
pub struct IntroMachine {
    phase: IntroPhase,
    revealed: &'static str,
    typed: usize,
    options: IntroOptions,
    started: bool,
    completed: bool,
}

impl IntroMachine {
    /// Create a machine. With reduced motion it starts in `Ready` with the
    /// whole message shown and never visits the typing phases.
    pub fn new(options: IntroOptions) -> Self {
        let (phase, revealed) = if options.reduced_motion {
            (IntroPhase::Ready, FULL_TEXT)
        } else {
            (IntroPhase::Idle, "")
        };

        Self {
            phase,
            revealed,
            typed: 0,
            options,
            started: false,
            completed: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Text revealed so far; always a prefix of [`FULL_TEXT`].
    pub fn revealed(&self) -> &'static str {
        self.revealed
    }

    /// Whether completion has been signalled.
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Options the machine was created with.
    pub fn options(&self) -> IntroOptions {
        self.options
    }

    /// Mount the view. Reports the start of the animation the first time.
    pub fn start(&mut self) -> Vec<IntroEvent> {
        if self.started {
            return Vec::new();
        }
        self.started = true;

        if self.phase == IntroPhase::Idle {
            vec![IntroEvent::Analytics(AnalyticsEvent::IntroStarted)]
        } else {
            Vec::new()
        }
    }

    /// Timer for the current phase, or `None` once completed.
    pub fn timer(&self, timings: &IntroTimings) -> Option<PhaseTimer> {
        if self.completed {
            return None;
        }

        Some(match self.phase {
            IntroPhase::Idle => PhaseTimer::OneShot(timings.initial_wait),
            IntroPhase::TypingPhraseOne | IntroPhase::TypingPhraseTwo => {
                PhaseTimer::Repeating(timings.char_delay)
            }
            IntroPhase::InterPhrasePause => PhaseTimer::OneShot(timings.phrase_pause),
            IntroPhase::Ready => PhaseTimer::OneShot(timings.auto_proceed),
            IntroPhase::Transitioning => PhaseTimer::OneShot(timings.exit_animation),
        })
    }

    /// The current phase timer expired.
    pub fn on_timer(&mut self) -> Vec<IntroEvent> {
        if self.completed {
            return Vec::new();
        }

        match self.phase {
            IntroPhase::Idle => self.advance(IntroPhase::TypingPhraseOne),
            IntroPhase::TypingPhraseOne => {
                self.typed += 1;
                self.revealed = text::phrase_one_prefix(self.typed);
                if self.typed >= text::phrase_one_len() {
                    self.advance(IntroPhase::InterPhrasePause)
                } else {
                    Vec::new()
                }
            }
            IntroPhase::InterPhrasePause => self.advance(IntroPhase::TypingPhraseTwo),
            IntroPhase::TypingPhraseTwo => {
                self.typed += 1;
                self.revealed = text::phrase_two_prefix(self.typed);
                if self.typed >= text::phrase_two_len() {
                    self.advance(IntroPhase::Ready)
                } else {
                    Vec::new()
                }
            }
            IntroPhase::Ready => self.proceed(),
            IntroPhase::Transitioning => {
                self.completed = true;
                vec![IntroEvent::Completed]
            }
        }
    }

    /// Reader input.
    pub fn input(&mut self, input: IntroInput) -> Vec<IntroEvent> {
        match self.phase {
            IntroPhase::Transitioning => Vec::new(),
            IntroPhase::Ready if input.is_proceed_trigger() => self.proceed(),
            IntroPhase::Ready => Vec::new(),
            _ if input.is_skip_request() => self.skip(),
            _ => Vec::new(),
        }
    }

    /// External skip. Jumps straight to `Transitioning` from any typing
    /// phase; in `Ready` it behaves like any other proceed trigger.
    pub fn skip(&mut self) -> Vec<IntroEvent> {
        match self.phase {
            IntroPhase::Transitioning => Vec::new(),
            IntroPhase::Ready => self.proceed(),
            phase => {
                let mut events = vec![IntroEvent::Analytics(AnalyticsEvent::IntroSkipped {
                    phase: phase.as_str(),
                })];
                events.extend(self.advance(IntroPhase::Transitioning));
                events
            }
        }
    }

    /// Renderable state.
    pub fn snapshot(&self) -> IntroSnapshot {
        IntroSnapshot {
            phase: self.phase,
            revealed: self.revealed,
            cursor_visible: !self.phase.is_terminal(),
            skip_hint: self
                .phase
                .is_typing()
                .then(|| skip_hint(self.options.seen_before)),
            completed: self.completed,
        }
    }

    fn proceed(&mut self) -> Vec<IntroEvent> {
        let mut events = vec![IntroEvent::Analytics(AnalyticsEvent::IntroCompleted)];
        events.extend(self.advance(IntroPhase::Transitioning));
        events
    }

    fn advance(&mut self, to: IntroPhase) -> Vec<IntroEvent> {
        debug_assert!(to > self.phase, "intro phases only move forward");
        let from = self.phase;
        self.phase = to;
        self.typed = 0;
        vec![IntroEvent::PhaseChanged { from, to }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::IntroKey;
    use proptest::prelude::*;

    fn fresh() -> IntroMachine {
        let mut machine = IntroMachine::new(IntroOptions::default());
        machine.start();
        machine
    }

    /// Tick until the phase changes, returning how many ticks it took.
    fn run_phase(machine: &mut IntroMachine) -> usize {
        let phase = machine.phase();
        let mut ticks = 0;
        while machine.phase() == phase {
            machine.on_timer();
            ticks += 1;
        }
        ticks
    }

    fn completions(events: &[IntroEvent]) -> usize {
        events.iter().filter(|e| **e == IntroEvent::Completed).count()
    }

    #[test]
    fn starts_idle_and_reports_start_once() {
        let mut machine = IntroMachine::new(IntroOptions::default());
        assert_eq!(machine.phase(), IntroPhase::Idle);
        assert_eq!(machine.revealed(), "");

        assert_eq!(
            machine.start(),
            vec![IntroEvent::Analytics(AnalyticsEvent::IntroStarted)]
        );
        assert!(machine.start().is_empty());
    }

    #[test]
    fn full_sequence() {
        let mut machine = fresh();
        let timings = IntroTimings::default();

        assert_eq!(machine.timer(&timings), Some(PhaseTimer::OneShot(timings.initial_wait)));
        assert_eq!(run_phase(&mut machine), 1);
        assert_eq!(machine.phase(), IntroPhase::TypingPhraseOne);
        assert_eq!(machine.timer(&timings), Some(PhaseTimer::Repeating(timings.char_delay)));

        assert_eq!(run_phase(&mut machine), 12);
        assert_eq!(machine.phase(), IntroPhase::InterPhrasePause);
        assert_eq!(machine.revealed(), "Don't trust.");

        assert_eq!(run_phase(&mut machine), 1);
        assert_eq!(run_phase(&mut machine), 9);
        assert_eq!(machine.phase(), IntroPhase::Ready);
        assert_eq!(machine.revealed(), FULL_TEXT);
        assert_eq!(machine.timer(&timings), Some(PhaseTimer::OneShot(timings.auto_proceed)));

        let events = machine.on_timer();
        assert_eq!(
            events,
            vec![
                IntroEvent::Analytics(AnalyticsEvent::IntroCompleted),
                IntroEvent::PhaseChanged {
                    from: IntroPhase::Ready,
                    to: IntroPhase::Transitioning
                },
            ]
        );

        assert_eq!(machine.on_timer(), vec![IntroEvent::Completed]);
        assert!(machine.is_complete());
        assert_eq!(machine.timer(&timings), None);
        assert!(machine.on_timer().is_empty());
    }

    #[test]
    fn reduced_motion_starts_ready() {
        let mut machine = IntroMachine::new(IntroOptions {
            reduced_motion: true,
            seen_before: false,
        });
        assert_eq!(machine.phase(), IntroPhase::Ready);
        assert_eq!(machine.revealed(), FULL_TEXT);
        assert!(machine.start().is_empty());
        assert!(machine.snapshot().skip_hint.is_none());
    }

    #[test]
    fn skip_reports_phase_and_jumps_to_transitioning() {
        let mut machine = fresh();
        machine.on_timer();
        machine.on_timer();
        machine.on_timer();
        assert_eq!(machine.revealed(), "Do");

        let events = machine.skip();
        assert_eq!(
            events[0],
            IntroEvent::Analytics(AnalyticsEvent::IntroSkipped {
                phase: "typing_phrase_one"
            })
        );
        assert_eq!(machine.phase(), IntroPhase::Transitioning);
        assert_eq!(machine.revealed(), "Do");

        assert!(machine.skip().is_empty());
        assert_eq!(completions(&machine.on_timer()), 1);
        assert!(machine.on_timer().is_empty());
    }

    #[test]
    fn pointer_input_ignored_while_typing() {
        let mut machine = fresh();
        assert!(machine.input(IntroInput::Click).is_empty());
        assert!(machine.input(IntroInput::Wheel { delta_y: 100.0 }).is_empty());
        assert_eq!(machine.phase(), IntroPhase::Idle);

        machine.input(IntroInput::Key(IntroKey::Escape));
        assert_eq!(machine.phase(), IntroPhase::Transitioning);
    }

    #[test]
    fn keys_proceed_when_ready() {
        let mut machine = IntroMachine::new(IntroOptions {
            reduced_motion: true,
            seen_before: true,
        });
        assert!(machine.input(IntroInput::Key(IntroKey::Other)).is_empty());
        assert!(machine.input(IntroInput::Wheel { delta_y: -5.0 }).is_empty());

        let events = machine.input(IntroInput::Key(IntroKey::Enter));
        assert_eq!(events[0], IntroEvent::Analytics(AnalyticsEvent::IntroCompleted));
        assert_eq!(machine.phase(), IntroPhase::Transitioning);
        assert!(machine.input(IntroInput::Click).is_empty());
    }

    #[test]
    fn skip_in_ready_counts_as_completion() {
        let mut machine = IntroMachine::new(IntroOptions {
            reduced_motion: true,
            seen_before: false,
        });
        let events = machine.skip();
        assert_eq!(events[0], IntroEvent::Analytics(AnalyticsEvent::IntroCompleted));
    }

    #[test]
    fn snapshot_hints() {
        let machine = IntroMachine::new(IntroOptions {
            reduced_motion: false,
            seen_before: true,
        });
        let snap = machine.snapshot();
        assert_eq!(snap.skip_hint, Some("press any key to skip"));
        assert!(snap.cursor_visible);

        let mut machine = IntroMachine::new(IntroOptions::default());
        assert_eq!(machine.snapshot().skip_hint, Some("skip"));
        machine.skip();
        let snap = machine.snapshot();
        assert!(!snap.cursor_visible);
        assert!(snap.skip_hint.is_none());
    }

    #[derive(Debug, Clone)]
    enum Step {
        Timer,
        Input(IntroInput),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            6 => Just(Step::Timer),
            1 => Just(Step::Input(IntroInput::Skip)),
            1 => Just(Step::Input(IntroInput::Click)),
            1 => (-10.0f64..10.0).prop_map(|delta_y| Step::Input(IntroInput::Wheel { delta_y })),
            1 => (0.0f64..200.0, 0.0f64..200.0)
                .prop_map(|(start_y, end_y)| Step::Input(IntroInput::Swipe { start_y, end_y })),
            1 => Just(Step::Input(IntroInput::Key(IntroKey::Other))),
        ]
    }

    proptest! {
        #[test]
        fn revealed_text_is_a_growing_prefix(steps in prop::collection::vec(step(), 0..80)) {
            let mut machine = fresh();
            let mut last_len = 0;
            let mut last_phase = machine.phase();
            let mut completed = 0;

            for step in steps {
                let events = match step {
                    Step::Timer => machine.on_timer(),
                    Step::Input(input) => machine.input(input),
                };
                completed += completions(&events);

                let revealed = machine.revealed();
                prop_assert!(FULL_TEXT.starts_with(revealed));
                prop_assert!(revealed.len() >= last_len);
                prop_assert!(machine.phase() >= last_phase);
                last_len = revealed.len();
                last_phase = machine.phase();
            }
            prop_assert!(completed <= 1);
        }

        #[test]
        fn skip_from_any_typing_phase_completes_once(ticks in 0usize..24, trailing in 0usize..10) {
            let mut machine = fresh();
            for _ in 0..ticks {
                machine.on_timer();
            }
            prop_assume!(machine.phase().is_typing());

            let skipped = machine.skip();
            prop_assert!(matches!(
                skipped[0],
                IntroEvent::Analytics(AnalyticsEvent::IntroSkipped { .. })
            ), "first event after skip should be IntroSkipped");
            prop_assert_eq!(machine.phase(), IntroPhase::Transitioning);

            let mut completed = completions(&machine.on_timer());
            for _ in 0..trailing {
                let events = machine.on_timer();
                prop_assert!(events.is_empty());
                completed += completions(&machine.skip());
            }
            prop_assert_eq!(completed, 1);
        }

        #[test]
        fn reduced_motion_never_types(steps in prop::collection::vec(step(), 0..20)) {
            let mut machine = IntroMachine::new(IntroOptions { reduced_motion: true, seen_before: false });
            machine.start();
            for step in steps {
                match step {
                    Step::Timer => machine.on_timer(),
                    Step::Input(input) => machine.input(input),
                };
                prop_assert!(!machine.phase().is_typing());
                prop_assert_eq!(machine.revealed(), FULL_TEXT);
            }
        }
    }
}
