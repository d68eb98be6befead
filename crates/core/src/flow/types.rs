// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow definition types and record validation

use crate::condition;
use crate::event::{Event, FLOW_NAMESPACE};
use crate::events::EventPattern;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Why a flow record was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("missing required field: name")]
    MissingName,
    #[error("flow '{flow}': missing required field: trigger.pattern")]
    MissingPattern { flow: String },
    #[error("flow '{flow}': invalid timestamp '{value}' in gate.{field}")]
    InvalidTimestamp {
        flow: String,
        field: &'static str,
        value: String,
    },
    #[error("malformed flow record: {0}")]
    Malformed(String),
}

/// A validated flow
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    pub trigger: Trigger,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<Gate>,
    pub actions: Vec<Action>,
}

/// What makes a flow fire
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trigger {
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// Preconditions that suppress actions while still recording the run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Gate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
    pub requires_approval: bool,
}

/// Why a run was gated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    Time,
    Approval,
}

impl GateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateKind::Time => "time",
            GateKind::Approval => "approval",
        }
    }
}

/// One step of a flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Write an interpolated message to stdout
    Log { message: String },
    /// Publish a derived event
    Emit {
        event_type: String,
        #[serde(default)]
        data: Map<String, Value>,
    },
    /// Write a journal entry
    Journal {
        #[serde(default = "default_entry_type")]
        entry_type: String,
        title: String,
        #[serde(default)]
        summary: String,
    },
    /// POST to an HTTP endpoint
    Webhook {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<Value>,
    },
    /// Run an external command
    Command {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

fn default_entry_type() -> String {
    "note".to_string()
}

impl Action {
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Log { .. } => "log",
            Action::Emit { .. } => "emit",
            Action::Journal { .. } => "journal",
            Action::Webhook { .. } => "webhook",
            Action::Command { .. } => "command",
        }
    }
}

impl Gate {
    /// Evaluate the gate at `now`. `after` is checked before `before`.
    pub fn check(&self, now: DateTime<Utc>) -> Option<GateKind> {
        if self.after.is_some_and(|after| now < after) {
            return Some(GateKind::Time);
        }
        if self.before.is_some_and(|before| now >= before) {
            return Some(GateKind::Time);
        }
        if self.requires_approval {
            return Some(GateKind::Approval);
        }
        None
    }
}

impl FlowDefinition {
    /// Pre-gate filtering: namespace, source, condition.
    ///
    /// Events in the reserved `flow:` namespace are always rejected.
    pub fn accepts(&self, event: &Event) -> bool {
        if event.is_flow_lifecycle() {
            return false;
        }
        if let Some(source) = &self.trigger.source {
            if *source != event.source {
                return false;
            }
        }
        match &self.trigger.condition {
            Some(expr) => condition::evaluate(expr, event),
            None => true,
        }
    }

    pub fn pattern(&self) -> EventPattern {
        EventPattern::new(&self.trigger.pattern)
    }

    /// Event types emitted by this flow's own actions that its trigger
    /// would pick up again (derived events carry source `flow:<name>`)
    pub fn self_triggering_emits(&self) -> Vec<&str> {
        let pattern = self.pattern();
        let own_source = format!("flow:{}", self.name);
        if self.trigger.source.as_ref().is_some_and(|s| *s != own_source) {
            return Vec::new();
        }
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::Emit { event_type, .. } => Some(event_type.as_str()),
                _ => None,
            })
            .filter(|event_type| !event_type.starts_with(FLOW_NAMESPACE) && pattern.matches(event_type))
            .collect()
    }

    /// Validate one raw record from the flows document
    pub fn from_toml(value: toml::Value) -> Result<Self, FlowError> {
        let raw: RawFlow = value
            .try_into()
            .map_err(|e: toml::de::Error| FlowError::Malformed(e.message().to_string()))?;

        let name = raw
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(FlowError::MissingName)?;

        let trigger = raw.trigger.unwrap_or_default();
        let pattern = trigger
            .pattern
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .ok_or_else(|| FlowError::MissingPattern { flow: name.clone() })?;

        let gate = raw
            .gate
            .map(|g| -> Result<Gate, FlowError> {
                Ok(Gate {
                    after: parse_timestamp(&name, "after", g.after)?,
                    before: parse_timestamp(&name, "before", g.before)?,
                    requires_approval: g.requires_approval.unwrap_or(false),
                })
            })
            .transpose()?;

        Ok(FlowDefinition {
            name,
            description: raw.description,
            enabled: raw.enabled.unwrap_or(true),
            trigger: Trigger {
                pattern,
                source: trigger.source,
                condition: trigger.condition,
            },
            gate,
            actions: raw.actions,
        })
    }
}

/// Accepts RFC 3339 strings and native TOML offset datetimes
fn parse_timestamp(
    flow: &str,
    field: &'static str,
    value: Option<toml::Value>,
) -> Result<Option<DateTime<Utc>>, FlowError> {
    let text = match value {
        None => return Ok(None),
        Some(toml::Value::String(s)) => s,
        Some(toml::Value::Datetime(dt)) => dt.to_string(),
        Some(other) => other.to_string(),
    };

    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| FlowError::InvalidTimestamp {
            flow: flow.to_string(),
            field,
            value: text,
        })
}

#[derive(Debug, Default, Deserialize)]
struct RawFlow {
    name: Option<String>,
    description: Option<String>,
    enabled: Option<bool>,
    trigger: Option<RawTrigger>,
    gate: Option<RawGate>,
    #[serde(default)]
    actions: Vec<Action>,
}

#[derive(Debug, Default, Deserialize)]
struct RawTrigger {
    pattern: Option<String>,
    source: Option<String>,
    condition: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawGate {
    after: Option<toml::Value>,
    before: Option<toml::Value>,
    requires_approval: Option<bool>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
