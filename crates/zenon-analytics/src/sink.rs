//! Analytics sinks and the fire-and-forget handle.

use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::SinkError;
use crate::event::AnalyticsEvent;

/// Destination for analytics events.
pub trait AnalyticsSink: Send + Sync {
    /// Deliver one event. Must not block.
    fn capture(&self, name: &str, properties: &Map<String, Value>) -> Result<(), SinkError>;
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn capture(&self, _name: &str, _properties: &Map<String, Value>) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Sink that writes events to the `zenon::analytics` tracing target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn capture(&self, name: &str, properties: &Map<String, Value>) -> Result<(), SinkError> {
        let properties = serde_json::to_string(properties)?;
        info!(target: "zenon::analytics", event = name, %properties, "analytics event");
        Ok(())
    }
}

/// A captured event.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedEvent {
    pub name: String,
    pub properties: Map<String, Value>,
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events captured so far.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Names of all events captured so far, in order.
    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }

    /// Number of captured events with the given name.
    pub fn count(&self, name: &str) -> usize {
        self.events().iter().filter(|e| e.name == name).count()
    }
}

impl AnalyticsSink for RecordingSink {
    fn capture(&self, name: &str, properties: &Map<String, Value>) -> Result<(), SinkError> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedEvent {
                name: name.to_string(),
                properties: properties.clone(),
            });
        Ok(())
    }
}

/// Cheap, cloneable handle controllers use to report events.
///
/// Tracking never fails: a missing sink is a no-op and sink errors are
/// logged at debug level and dropped.
#[derive(Clone, Default)]
pub struct Analytics {
    sink: Option<Arc<dyn AnalyticsSink>>,
}

impl Analytics {
    /// Report to the given sink.
    pub fn new(sink: Arc<dyn AnalyticsSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// No sink at all.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Whether a sink is attached.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Fire and forget.
    pub fn track(&self, event: AnalyticsEvent) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.capture(event.name(), &event.properties()) {
            debug!(event = event.name(), error = %e, "analytics sink rejected event");
        }
    }
}

impl std::fmt::Debug for Analytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analytics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
