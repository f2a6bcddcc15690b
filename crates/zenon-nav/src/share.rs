//! Copying the active card's link.
//!
//! The primary path is an async clipboard write. When it fails the legacy
//! copy path is tried instead. Whatever happens the reader sees the
//! transient "copied" confirmation, which clears itself after
//! [`COPIED_RESET`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::Result;

/// How long the "copied" confirmation stays up.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Primary clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Legacy copy technique used when the primary clipboard refuses.
pub trait FallbackCopy: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<()>;
}

/// Which path ended up handling a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyMethod {
    Clipboard,
    Fallback,
    /// Both paths failed; the confirmation is shown anyway.
    Failed,
}

/// Result of a share action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareOutcome {
    pub url: String,
    pub method: CopyMethod,
}

/// Self-clearing "copied" flag.
///
/// Setting it again while it is up restarts the countdown. Dropping the flag
/// cancels any pending reset.
pub struct CopiedFlag {
    state: Arc<watch::Sender<bool>>,
    reset_after: Duration,
    reset: Mutex<Option<JoinHandle<()>>>,
}

impl CopiedFlag {
    pub fn new(reset_after: Duration) -> Self {
        let (state, _) = watch::channel(false);
        Self {
            state: Arc::new(state),
            reset_after,
            reset: Mutex::new(None),
        }
    }

    /// Raise the flag and schedule it to clear. Needs a tokio runtime.
    pub fn set(&self) {
        self.state.send_replace(true);

        let state = self.state.clone();
        let after = self.reset_after;
        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            state.send_replace(false);
        });

        let mut reset = self.reset.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = reset.replace(task) {
            previous.abort();
        }
    }

    pub fn is_set(&self) -> bool {
        *self.state.borrow()
    }

    /// Receiver notified whenever the flag changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.subscribe()
    }
}

impl Default for CopiedFlag {
    fn default() -> Self {
        Self::new(COPIED_RESET)
    }
}

impl Drop for CopiedFlag {
    fn drop(&mut self) {
        let reset = self.reset.get_mut().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(task) = reset.take() {
            task.abort();
        }
    }
}

/// Clipboard, fallback and confirmation flag bundled together.
pub struct Sharer {
    clipboard: Arc<dyn Clipboard>,
    fallback: Arc<dyn FallbackCopy>,
    copied: CopiedFlag,
}

impl Sharer {
    pub fn new(clipboard: Arc<dyn Clipboard>, fallback: Arc<dyn FallbackCopy>) -> Self {
        Self {
            clipboard,
            fallback,
            copied: CopiedFlag::default(),
        }
    }

    /// Override the confirmation duration.
    #[must_use]
    pub fn with_reset_after(mut self, reset_after: Duration) -> Self {
        self.copied = CopiedFlag::new(reset_after);
        self
    }

    /// Copy `text`, never failing. The copied flag is raised in every case.
    pub async fn copy(&self, text: &str) -> CopyMethod {
        let method = match self.clipboard.write_text(text).await {
            Ok(()) => CopyMethod::Clipboard,
            Err(e) => {
                debug!(error = %e, "clipboard write failed, using fallback");
                match self.fallback.copy_text(text) {
                    Ok(()) => CopyMethod::Fallback,
                    Err(e) => {
                        warn!(error = %e, "fallback copy failed");
                        CopyMethod::Failed
                    }
                }
            }
        };
        self.copied.set();
        method
    }

    pub fn copied(&self) -> &CopiedFlag {
        &self.copied
    }
}


#[cfg(test)]
mod tests {
    use super::testing::sharer;
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn clipboard_path_sets_and_clears_flag() {
        let (sharer, clipboard, fallback) = sharer(true, true);

        assert_eq!(sharer.copy("https://zenon.wtf/dfa").await, CopyMethod::Clipboard);
        assert!(sharer.copied().is_set());
        assert_eq!(*clipboard.written.lock().unwrap(), vec!["https://zenon.wtf/dfa"]);
        assert!(fallback.written.lock().unwrap().is_empty());

        sleep(Duration::from_millis(1990)).await;
        assert!(sharer.copied().is_set());
        sleep(Duration::from_millis(20)).await;
        assert!(!sharer.copied().is_set());
    }

    #[tokio::test(start_paused = true)]
    async fn fallback_path_sets_and_clears_flag() {
        let (sharer, _, fallback) = sharer(false, true);

        assert_eq!(sharer.copy("https://zenon.wtf/vision").await, CopyMethod::Fallback);
        assert!(sharer.copied().is_set());
        assert_eq!(fallback.written.lock().unwrap().len(), 1);

        sleep(Duration::from_millis(2010)).await;
        assert!(!sharer.copied().is_set());
    }

    #[tokio::test(start_paused = true)]
    async fn total_failure_still_confirms() {
        let (sharer, _, _) = sharer(false, false);
        assert_eq!(sharer.copy("x").await, CopyMethod::Failed);
        assert!(sharer.copied().is_set());
    }

    #[tokio::test(start_paused = true)]
    async fn repeated_copy_restarts_countdown() {
        let (sharer, _, _) = sharer(true, true);

        sharer.copy("a").await;
        sleep(Duration::from_millis(1500)).await;
        sharer.copy("b").await;

        sleep(Duration::from_millis(1000)).await;
        assert!(sharer.copied().is_set());
        sleep(Duration::from_millis(1010)).await;
        assert!(!sharer.copied().is_set());
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_see_both_edges() {
        let (sharer, _, _) = sharer(true, true);
        let mut rx = sharer.copied().subscribe();

        sharer.copy("a").await;
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());
        rx.changed().await.unwrap();
        assert!(!*rx.borrow_and_update());
    }
}
