//! Terminal implementations of the navigation ports.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;
use tracing::trace;
use zenon_nav::{Clipboard, ClipboardError, FallbackCopy, ScrollBehavior, ScrollSurface};

/// Scroll surface backed by a fixed card height.
///
/// A terminal has no scroll animation, so every programmatic scroll lands
/// immediately.
#[derive(Debug)]
pub struct TerminalViewport {
    height: f64,
    scroll_top: Mutex<f64>,
}

impl TerminalViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            scroll_top: Mutex::new(0.0),
        }
    }

    /// Current scroll offset.
    pub fn scroll_top(&self) -> f64 {
        *self.lock()
    }

    /// Reader-driven scroll, clamped at the top.
    pub fn scroll_by(&self, delta: f64) -> f64 {
        let mut top = self.lock();
        *top = (*top + delta).max(0.0);
        *top
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, f64> {
        self.scroll_top.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ScrollSurface for TerminalViewport {
    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn scroll_to(&self, top: f64, behavior: ScrollBehavior) {
        trace!(top, ?behavior, "scroll");
        *self.lock() = top.max(0.0);
    }
}

/// The desktop clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || {
            let mut clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Denied(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Denied(e.to_string()))
        })
        .await
        .map_err(|_| ClipboardError::Unavailable)?
    }
}

/// Copy through the terminal with an OSC 52 escape sequence.
pub struct Osc52Copy {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Osc52Copy {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

/// Escape sequence asking the terminal to place `text` on the clipboard.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}

impl FallbackCopy for Osc52Copy {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
