//! Analytics event vocabulary.

use serde::Serialize;
use serde_json::{Map, Value};

/// Events reported by the landing controllers.
///
/// The serialized form is `{"event": <name>, ...properties}`; the property
/// bag sent to a sink is everything except the `event` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    /// The intro started its typing sequence
    IntroStarted,

    /// The reader proceeded out of the ready phase (or it timed out)
    IntroCompleted,

    /// The reader skipped the intro before it was ready
    IntroSkipped { phase: &'static str },

    /// The share button was pressed
    ShareClicked { card_id: String, card_title: String },

    /// A navigation dot was pressed
    NavDotClicked { card_id: String, card_title: String },

    /// A documentation link on a card was followed
    CardLinkClicked { card_id: String, target: &'static str },

    /// The brand link in the footer was followed
    ZenonLinkClicked,
}

impl AnalyticsEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::IntroStarted => "intro_started",
            AnalyticsEvent::IntroCompleted => "intro_completed",
            AnalyticsEvent::IntroSkipped { .. } => "intro_skipped",
            AnalyticsEvent::ShareClicked { .. } => "share_clicked",
            AnalyticsEvent::NavDotClicked { .. } => "nav_dot_clicked",
            AnalyticsEvent::CardLinkClicked { .. } => "card_link_clicked",
            AnalyticsEvent::ZenonLinkClicked => "zenon_link_clicked",
        }
    }

    /// Property bag for the event (empty for unit events).
    pub fn properties(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => {
                map.remove("event");
                map
            }
            _ => Map::new(),
        }
    }
}
