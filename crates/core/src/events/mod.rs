// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events system for loose coupling between producers and automations
//!
//! This module provides:
//! - `EventBus` - Route events to matching subscribers using patterns
//! - `EventPattern` - Pattern matching for event subscriptions
//! - `Subscription` - A client's callback registered against patterns

mod bus;
mod subscription;

pub use bus::EventBus;
pub use subscription::{Callback, ClientId, EventPattern, SubscriberId, Subscription, Transport};
