// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus for routing events to subscribers

use super::subscription::{Callback, ClientId, SubscriberId, Subscription};
use crate::event::Event;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct BusState {
    subscribers: Vec<(SubscriberId, Subscription)>,
    destroyed: bool,
}

/// The event bus routes events to matching subscribers.
///
/// Delivery is synchronous: `emit` returns after every matching callback
/// has run. Callbacks are invoked outside the subscriber lock, so they may
/// emit or subscribe themselves.
pub struct EventBus {
    state: Arc<RwLock<BusState>>,
    next_id: Arc<AtomicU64>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(BusState::default())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register a subscription.
    ///
    /// Multiple subscriptions may share patterns and clients; nothing is
    /// de-duplicated.
    pub fn subscribe(&self, subscription: Subscription) -> SubscriberId {
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::SeqCst));

        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if state.destroyed {
            tracing::warn!(client = %subscription.client_id, "subscribe on destroyed bus ignored");
            return id;
        }

        tracing::debug!(
            client = %subscription.client_id,
            transport = subscription.transport.as_str(),
            patterns = ?subscription.patterns.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
            "subscribed"
        );
        state.subscribers.push((id, subscription));
        id
    }

    /// Remove every subscription owned by a client, returning how many were removed
    pub fn unsubscribe(&self, client_id: &ClientId) -> usize {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let before = state.subscribers.len();
        state
            .subscribers
            .retain(|(_, sub)| &sub.client_id != client_id);
        let removed = before - state.subscribers.len();

        if removed > 0 {
            tracing::debug!(client = %client_id, removed, "unsubscribed");
        }
        removed
    }

    /// Deliver an event to every matching subscriber, returning the delivery count.
    ///
    /// A panicking callback is contained and logged; remaining subscribers
    /// still receive the event.
    pub fn emit(&self, event: &Event) -> usize {
        let targets: Vec<(ClientId, Callback)> = {
            let state = self.state.read().unwrap_or_else(|e| e.into_inner());
            if state.destroyed {
                return 0;
            }
            state
                .subscribers
                .iter()
                .filter(|(_, sub)| sub.matches(&event.event_type))
                .map(|(_, sub)| (sub.client_id.clone(), Arc::clone(&sub.callback)))
                .collect()
        };

        tracing::trace!(
            event_type = %event.event_type,
            event_id = %event.id,
            subscribers = targets.len(),
            "emit"
        );

        let mut delivered = 0;
        for (client_id, callback) in targets {
            match catch_unwind(AssertUnwindSafe(|| callback(event))) {
                Ok(()) => delivered += 1,
                Err(_) => tracing::error!(
                    client = %client_id,
                    event_type = %event.event_type,
                    "subscriber panicked during delivery"
                ),
            }
        }
        delivered
    }

    /// Get count of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .subscribers
            .len()
    }

    /// List the clients that currently hold subscriptions
    pub fn clients(&self) -> Vec<ClientId> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let mut clients: Vec<ClientId> = Vec::new();
        for (_, sub) in &state.subscribers {
            if !clients.contains(&sub.client_id) {
                clients.push(sub.client_id.clone());
            }
        }
        clients
    }

    /// Drop every subscription; later emits deliver nothing
    pub fn destroy(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.subscribers.clear();
        state.destroyed = true;
        tracing::debug!("event bus destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .destroyed
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
