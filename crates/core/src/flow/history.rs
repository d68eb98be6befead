// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded audit trail of flow runs

use super::types::GateKind;
use crate::event::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Most recent runs retained; older records are evicted first
pub const MAX_EXECUTIONS: usize = 200;

/// Audit entry for one flow run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub flow: String,
    pub trigger_event_id: String,
    pub trigger_event_type: String,
    pub started_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    pub actions_executed: u32,
    pub actions_failed: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gated: Option<GateKind>,
}

impl ExecutionRecord {
    /// Open a record for a flow triggered by `event`
    pub fn open(flow: &str, event: &Event, started_at: DateTime<Utc>) -> Self {
        Self {
            flow: flow.to_string(),
            trigger_event_id: event.id.clone(),
            trigger_event_type: event.event_type.clone(),
            started_at,
            completed_at: None,
            actions_executed: 0,
            actions_failed: 0,
            error: None,
            gated: None,
        }
    }
}

/// Append-only ring of execution records
#[derive(Debug, Clone)]
pub struct ExecutionHistory {
    records: VecDeque<ExecutionRecord>,
    capacity: usize,
}

impl ExecutionHistory {
    pub fn new() -> Self {
        Self::with_capacity(MAX_EXECUTIONS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity.min(MAX_EXECUTIONS)),
            capacity,
        }
    }

    /// Append a record, returning the evicted oldest record on overflow
    pub fn push(&mut self, record: ExecutionRecord) -> Option<ExecutionRecord> {
        if self.capacity == 0 {
            return Some(record);
        }
        let evicted = if self.records.len() >= self.capacity {
            self.records.pop_front()
        } else {
            None
        };
        self.records.push_back(record);
        evicted
    }

    /// Records in append order
    pub fn records(&self) -> Vec<ExecutionRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for ExecutionHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
