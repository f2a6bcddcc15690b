//! Zenon Landing Analytics
//!
//! A port for fire-and-forget usage events. Controllers hold an
//! [`Analytics`] handle and call [`Analytics::track`]; whether the events go
//! anywhere is the host's business. A missing or failing sink never changes
//! controller behaviour.
//!
//! ```
//! use std::sync::Arc;
//! use zenon_analytics::{Analytics, AnalyticsEvent, RecordingSink};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let analytics = Analytics::new(sink.clone());
//! analytics.track(AnalyticsEvent::IntroStarted);
//! assert_eq!(sink.names(), vec!["intro_started"]);
//! ```

mod error;
mod event;
mod sink;

pub use error::SinkError;
pub use event::AnalyticsEvent;
pub use sink::{Analytics, AnalyticsSink, NoopSink, RecordedEvent, RecordingSink, TracingSink};
