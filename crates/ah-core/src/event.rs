//! Lifecycle event definitions.

use serde::Deserialize;

/// Event kinds the notification handler reacts to.
///
/// The host delivers event types as strings; classification is total, so an
/// unknown or missing type never errors; it lands in [`EventKind::Other`]
/// and is filtered by the handler's no-op branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The assistant finished its turn and is waiting for input.
    SessionIdle,
    /// The assistant is blocked on a permission prompt.
    PermissionAsked,
    /// Anything else the host emits. Ignored by the handler.
    Other,
}

impl EventKind {
    /// Classify a wire-format type string.
    pub fn from_type_str(s: &str) -> Self {
        match s {
            "session.idle" => EventKind::SessionIdle,
            "permission.asked" => EventKind::PermissionAsked,
            _ => EventKind::Other,
        }
    }

    /// Returns the wire-format type string, or `None` for [`EventKind::Other`].
    pub fn as_type_str(&self) -> Option<&'static str> {
        match self {
            EventKind::SessionIdle => Some("session.idle"),
            EventKind::PermissionAsked => Some("permission.asked"),
            EventKind::Other => None,
        }
    }
}

/// A lifecycle event record as delivered by the host runtime.
///
/// Only the `type` field is consumed; the remainder of the record is carried
/// opaquely and never inspected. The host owns the event's lifecycle; the
/// handler must not retain it after returning.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,

    /// Opaque remainder of the host's record.
    #[serde(flatten)]
    pub properties: serde_json::Value,
}

impl Event {
    /// Build an event with the given type string and no properties.
    pub fn of_type(event_type: impl Into<String>) -> Self {
        Event {
            event_type: Some(event_type.into()),
            properties: serde_json::Value::Null,
        }
    }

    /// The classified kind of this event.
    pub fn kind(&self) -> EventKind {
        self.event_type
            .as_deref()
            .map(EventKind::from_type_str)
            .unwrap_or(EventKind::Other)
    }
}
