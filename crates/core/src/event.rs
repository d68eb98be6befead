// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events carried by the bus

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved namespace for the flow engine's own lifecycle events.
///
/// Events in this namespace are never delivered to flow matchers.
pub const FLOW_NAMESPACE: &str = "flow:";

/// Published when a flow matches an event (gated or not)
pub const FLOW_TRIGGERED: &str = "flow:triggered";

/// Published when a flow finishes running its actions
pub const FLOW_COMPLETED: &str = "flow:completed";

/// A typed, sourced, data-carrying message.
///
/// Event types are colon-namespaced, e.g. `hook:tool-use` or
/// `deploy:completed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub source: String,
    #[serde(default)]
    pub data: Map<String, Value>,
    pub id: String,
}

impl Event {
    /// Create an event with empty data and a fresh UUID
    pub fn new(event_type: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            source: source.into(),
            data: Map::new(),
            id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach event data.
    ///
    /// Objects become the data map directly; any other value is stored
    /// under the `value` key.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = match data {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                map
            }
        };
        self
    }

    /// Whether this event belongs to the reserved `flow:` namespace
    pub fn is_flow_lifecycle(&self) -> bool {
        self.event_type.starts_with(FLOW_NAMESPACE)
    }

    /// Resolve a path against this event.
    ///
    /// Paths are `type`, `source`, or `data.<key>[.<key>...]`. Numeric
    /// segments index into arrays. Missing keys and `null` values are
    /// unresolved.
    pub fn resolve(&self, path: &str) -> Option<String> {
        match path {
            "type" => Some(self.event_type.clone()),
            "source" => Some(self.source.clone()),
            _ => {
                let rest = path.strip_prefix("data.")?;
                let mut segments = rest.split('.');
                let mut value = self.data.get(segments.next()?)?;
                for segment in segments {
                    value = match value {
                        Value::Object(map) => map.get(segment)?,
                        Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                        _ => return None,
                    };
                }
                stringify(value)
            }
        }
    }
}

/// Render a JSON value the way templates and conditions see it
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).ok(),
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
