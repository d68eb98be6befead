// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event pattern matching and subscriptions

use crate::event::Event;
use std::fmt;
use std::sync::Arc;

/// Pattern for matching event types
/// Supports:
///   - Exact: "deploy:completed"
///   - Namespace: "hook:*" matches every type starting with "hook:"
///   - Everything: "*"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventPattern(String);

impl EventPattern {
    pub fn new(pattern: &str) -> Self {
        Self(pattern.to_string())
    }

    /// Check if this pattern matches an event type
    pub fn matches(&self, event_type: &str) -> bool {
        // Empty pattern matches nothing
        if self.0.is_empty() {
            return false;
        }

        if self.0 == "*" {
            return true;
        }

        // "ns:*" keeps the trailing colon so "hook:*" never matches "hooks:x"
        match self.0.strip_suffix('*') {
            Some(prefix) if prefix.ends_with(':') => event_type.starts_with(prefix),
            _ => self.0 == event_type,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Owner of one or more subscriptions
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientId(pub String);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle for a single registered subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// How a subscriber is reached.
///
/// Opaque to the in-process bus: it is carried for introspection and for
/// layers that bridge subscribers across process boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transport(String);

impl Transport {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn local() -> Self {
        Self::new("local")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::local()
    }
}

/// Callback invoked once per matching event
pub type Callback = Arc<dyn Fn(&Event) + Send + Sync>;

/// A subscription to specific event patterns
#[derive(Clone)]
pub struct Subscription {
    pub client_id: ClientId,
    pub patterns: Vec<EventPattern>,
    pub transport: Transport,
    pub description: String,
    pub callback: Callback,
}

impl Subscription {
    pub fn new<F>(client_id: impl Into<String>, patterns: Vec<EventPattern>, callback: F) -> Self
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        Self {
            client_id: ClientId(client_id.into()),
            patterns,
            transport: Transport::local(),
            description: String::new(),
            callback: Arc::new(callback),
        }
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check if any pattern matches the event type
    pub fn matches(&self, event_type: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(event_type))
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("client_id", &self.client_id)
            .field("patterns", &self.patterns)
            .field("transport", &self.transport)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
