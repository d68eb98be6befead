// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

//! relay-core: Core library for the relay event automation system
//!
//! This crate provides:
//! - The in-process event bus and subscription patterns
//! - Flow definitions, validation, and the project flow store
//! - Condition parsing and template interpolation over events
//! - Bounded execution history
//! - Clock and ID abstractions for deterministic tests

pub mod clock;
pub mod condition;
pub mod event;
pub mod events;
pub mod flow;
pub mod id;
pub mod template;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use condition::{validate_condition, Condition, ConditionError, Operator};
pub use event::{Event, FLOW_COMPLETED, FLOW_NAMESPACE, FLOW_TRIGGERED};
pub use events::{Callback, ClientId, EventBus, EventPattern, SubscriberId, Subscription, Transport};
pub use flow::{
    parse_flows, Action, ExecutionHistory, ExecutionRecord, FlowDefinition, FlowError, FlowStore,
    Gate, GateKind, LoadReport, Rejection, StoreError, Trigger, FLOWS_FILE, MAX_EXECUTIONS,
};
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use template::{interpolate, interpolate_value};
