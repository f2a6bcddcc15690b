//! Timer-driven intro controller.
//!
//! [`IntroController::spawn`] moves an [`IntroMachine`] onto a tokio task.
//! The task owns the machine and the single active phase timer; reader
//! input arrives over a channel and renderable state leaves over a `watch`
//! channel.
//!
//! # Timer lifetime
//!
//! The phase timer is a deadline owned by the task loop. Every phase change
//! re-arms it and the previous deadline is simply forgotten, so a timer from
//! an earlier phase can never fire into a later one. Dropping the
//! [`IntroHandle`] aborts the task, which releases the timer and guarantees
//! the completion callback is not called into a torn-down view.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, trace};
use zenon_analytics::Analytics;

use crate::input::IntroInput;
use crate::machine::{IntroEvent, IntroMachine, IntroOptions, IntroSnapshot};
use crate::timings::IntroTimings;

/// How an intro task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroOutcome {
    /// The completion callback ran.
    Completed,
    /// The view went away first; the callback never ran.
    Abandoned,
}

/// An intro ready to be started.
pub struct IntroController {
    machine: IntroMachine,
    timings: IntroTimings,
    analytics: Analytics,
}

impl IntroController {
    /// Create a controller. Options are fixed from here on.
    pub fn new(options: IntroOptions, timings: IntroTimings, analytics: Analytics) -> Self {
        Self {
            machine: IntroMachine::new(options),
            timings,
            analytics,
        }
    }

    /// Start the intro on the current tokio runtime.
    ///
    /// `on_complete` runs at most once, after the exit animation.
    pub fn spawn<F>(self, on_complete: F) -> IntroHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(self.machine.snapshot());
        let task = tokio::spawn(self.run(input_rx, snapshot_tx, on_complete));

        IntroHandle {
            inputs: input_tx,
            snapshots: snapshot_rx,
            task: Some(task),
        }
    }

    async fn run<F>(
        mut self,
        mut inputs: mpsc::UnboundedReceiver<IntroInput>,
        snapshots: watch::Sender<IntroSnapshot>,
        on_complete: F,
    ) -> IntroOutcome
    where
        F: FnOnce() + Send + 'static,
    {
        let mut on_complete = Some(on_complete);

        let events = self.machine.start();
        self.dispatch(events, &mut on_complete);
        snapshots.send_replace(self.machine.snapshot());

        let mut deadline = self.next_deadline();

        loop {
            let Some(at) = deadline else {
                return IntroOutcome::Completed;
            };

            let events = tokio::select! {
                _ = sleep_until(at) => {
                    let events = self.machine.on_timer();
                    deadline = self.next_deadline();
                    events
                }
                input = inputs.recv() => {
                    let Some(input) = input else {
                        debug!(phase = %self.machine.phase(), "intro view torn down");
                        return IntroOutcome::Abandoned;
                    };
                    trace!(?input, "intro input");
                    let before = self.machine.phase();
                    let events = self.machine.input(input);
                    if self.machine.phase() != before {
                        deadline = self.next_deadline();
                    }
                    events
                }
            };

            self.dispatch(events, &mut on_complete);
            snapshots.send_replace(self.machine.snapshot());

            if self.machine.is_complete() {
                return IntroOutcome::Completed;
            }
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.machine
            .timer(&self.timings)
            .map(|timer| Instant::now() + timer.period())
    }

    fn dispatch<F>(&self, events: Vec<IntroEvent>, on_complete: &mut Option<F>)
    where
        F: FnOnce(),
    {
        for event in events {
            match event {
                IntroEvent::PhaseChanged { from, to } => {
                    debug!(%from, %to, revealed = self.machine.revealed(), "intro phase changed");
                }
                IntroEvent::Analytics(event) => self.analytics.track(event),
                IntroEvent::Completed => {
                    if let Some(callback) = on_complete.take() {
                        callback();
                    }
                }
            }
        }
    }
}

/// Handle to a running intro. Dropping it tears the intro down.
pub struct IntroHandle {
    inputs: mpsc::UnboundedSender<IntroInput>,
    snapshots: watch::Receiver<IntroSnapshot>,
    task: Option<JoinHandle<IntroOutcome>>,
}

impl IntroHandle {
    /// Deliver reader input. Returns false once the intro has finished.
    pub fn send(&self, input: IntroInput) -> bool {
        self.inputs.send(input).is_ok()
    }

    /// Press the skip affordance.
    pub fn skip(&self) -> bool {
        self.send(IntroInput::Skip)
    }

    /// Latest renderable state.
    pub fn snapshot(&self) -> IntroSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<IntroSnapshot> {
        self.snapshots.clone()
    }

    /// Wait for the intro to end.
    pub async fn finished(mut self) -> IntroOutcome {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(IntroOutcome::Abandoned),
            None => IntroOutcome::Abandoned,
        }
    }
}

impl Drop for IntroHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::IntroKey;
    use crate::phase::IntroPhase;
    use crate::text::FULL_TEXT;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;
    use zenon_analytics::RecordingSink;

    struct Harness {
        handle: IntroHandle,
        completions: Arc<AtomicUsize>,
        sink: Arc<RecordingSink>,
    }

    fn spawn(options: IntroOptions) -> Harness {
        let sink = Arc::new(RecordingSink::new());
        let completions = Arc::new(AtomicUsize::new(0));
        let counter = completions.clone();
        let controller = IntroController::new(
            options,
            IntroTimings::default(),
            Analytics::new(sink.clone()),
        );
        let handle = controller.spawn(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        Harness {
            handle,
            completions,
            sink,
        }
    }

    // Default timings: typing starts at 2000ms, the fifth character lands at
    // 2400ms, phrase one is done at 2960ms, phrase two starts at 3960ms and
    // is done at 4680ms, auto-proceed fires at 14680ms and completion at
    // 15180ms.

    #[tokio::test(start_paused = true)]
    async fn runs_to_completion_on_its_own() {
        let h = spawn(IntroOptions::default());

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(h.handle.snapshot().phase, IntroPhase::Idle);

        sleep(Duration::from_millis(1450)).await;
        let snap = h.handle.snapshot();
        assert_eq!(snap.phase, IntroPhase::TypingPhraseOne);
        assert_eq!(snap.revealed, "Don't");

        sleep(Duration::from_millis(1000)).await;
        assert_eq!(h.handle.snapshot().phase, IntroPhase::InterPhrasePause);
        assert_eq!(h.handle.snapshot().revealed, "Don't trust.");

        sleep(Duration::from_millis(1500)).await;
        let snap = h.handle.snapshot();
        assert_eq!(snap.phase, IntroPhase::Ready);
        assert_eq!(snap.revealed, FULL_TEXT);
        assert!(snap.skip_hint.is_none());

        sleep(Duration::from_millis(10_200)).await;
        assert_eq!(h.handle.snapshot().phase, IntroPhase::Transitioning);
        assert_eq!(h.completions.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(500)).await;
        assert_eq!(h.completions.load(Ordering::SeqCst), 1);
        assert!(h.handle.snapshot().completed);
        assert_eq!(
            h.sink.names(),
            vec!["intro_started", "intro_completed"]
        );
        assert_eq!(h.handle.finished().await, IntroOutcome::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn skip_while_typing_cancels_later_timers() {
        let h = spawn(IntroOptions::default());

        sleep(Duration::from_millis(2450)).await;
        assert!(h.handle.skip());

        sleep(Duration::from_millis(100)).await;
        assert_eq!(h.handle.snapshot().phase, IntroPhase::Transitioning);
        assert_eq!(h.handle.snapshot().revealed, "Don't");

        sleep(Duration::from_millis(30_000)).await;
        assert_eq!(h.completions.load(Ordering::SeqCst), 1);
        assert_eq!(h.handle.snapshot().revealed, "Don't");
        assert_eq!(h.sink.names(), vec!["intro_started", "intro_skipped"]);
        assert_eq!(
            h.sink.events()[1].properties["phase"],
            "typing_phrase_one"
        );
        assert!(!h.handle.skip());
    }

    #[tokio::test(start_paused = true)]
    async fn pointer_input_waits_for_ready() {
        let h = spawn(IntroOptions::default());

        sleep(Duration::from_millis(3000)).await;
        h.handle.send(IntroInput::Click);
        h.handle.send(IntroInput::Wheel { delta_y: 120.0 });
        sleep(Duration::from_millis(10)).await;
        assert_eq!(h.handle.snapshot().phase, IntroPhase::InterPhrasePause);

        sleep(Duration::from_millis(2000)).await;
        assert_eq!(h.handle.snapshot().phase, IntroPhase::Ready);
        h.handle.send(IntroInput::Swipe { start_y: 500.0, end_y: 420.0 });

        sleep(Duration::from_millis(600)).await;
        assert_eq!(h.completions.load(Ordering::SeqCst), 1);
        assert_eq!(h.sink.count("intro_completed"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reduced_motion_starts_ready_without_start_event() {
        let h = spawn(IntroOptions {
            reduced_motion: true,
            seen_before: false,
        });

        sleep(Duration::from_millis(10)).await;
        assert_eq!(h.handle.snapshot().phase, IntroPhase::Ready);
        assert_eq!(h.handle.snapshot().revealed, FULL_TEXT);

        h.handle.send(IntroInput::Key(IntroKey::Space));
        sleep(Duration::from_millis(600)).await;
        assert_eq!(h.completions.load(Ordering::SeqCst), 1);
        assert_eq!(h.sink.names(), vec!["intro_completed"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_abandons_the_intro() {
        let h = spawn(IntroOptions::default());
        let completions = h.completions.clone();

        sleep(Duration::from_millis(2450)).await;
        h.handle.skip();
        drop(h.handle);

        sleep(Duration::from_millis(5000)).await;
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_skips_complete_once() {
        let h = spawn(IntroOptions::default());

        for _ in 0..5 {
            h.handle.skip();
            h.handle.send(IntroInput::Key(IntroKey::Escape));
        }
        sleep(Duration::from_millis(20_000)).await;

        assert_eq!(h.completions.load(Ordering::SeqCst), 1);
        assert_eq!(h.sink.count("intro_skipped"), 1);
        assert_eq!(h.sink.count("intro_completed"), 0);
    }
}
