// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow definitions: declarative "when event X, do actions Y" rules
//!
//! This module provides:
//! - `FlowDefinition` - trigger, optional gate, ordered actions
//! - `FlowStore` - loads definitions from the project's flows file
//! - `ExecutionHistory` - bounded audit trail of flow runs

mod history;
mod store;
mod types;

pub use history::{ExecutionHistory, ExecutionRecord, MAX_EXECUTIONS};
pub use store::{parse_flows, FlowStore, LoadReport, Rejection, StoreError, FLOWS_FILE};
pub use types::{Action, FlowDefinition, FlowError, Gate, GateKind, Trigger};
