// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `relay flows` - list the project's flows

use crate::output::{self, OutputFormat};
use clap::Args;
use relay_core::{FlowDefinition, FlowStore};
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Args)]
pub struct FlowsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct FlowInfo {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    enabled: bool,
    pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
    gated: bool,
    actions: Vec<&'static str>,
}

impl From<&FlowDefinition> for FlowInfo {
    fn from(flow: &FlowDefinition) -> Self {
        Self {
            name: flow.name.clone(),
            description: flow.description.clone(),
            enabled: flow.enabled,
            pattern: flow.trigger.pattern.clone(),
            source: flow.trigger.source.clone(),
            condition: flow.trigger.condition.clone(),
            gated: flow.gate.is_some(),
            actions: flow.actions.iter().map(|a| a.kind()).collect(),
        }
    }
}

impl fmt::Display for FlowInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24} {:<8} {:<24} {}",
            self.name,
            if self.enabled { "yes" } else { "no" },
            self.pattern,
            self.actions.len()
        )
    }
}

pub fn handle(args: FlowsArgs, project_root: &Path) -> anyhow::Result<bool> {
    let flows: Vec<FlowInfo> = FlowStore::for_project(project_root)
        .load()
        .iter()
        .map(FlowInfo::from)
        .collect();

    let header = format!("{:<24} {:<8} {:<24} ACTIONS", "NAME", "ENABLED", "PATTERN");
    output::print_list(&flows, args.format, &header, "No flows");
    Ok(true)
}
